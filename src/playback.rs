//! Terminal animation of solver progress

use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::grid::{Cell, Grid, Point};
use crate::overlay::{Mark, Overlay};
use crate::solver::FrameSink;

const RESET: &str = "\x1B[0m";
const GREEN: &str = "\x1B[1;32m";
const WHITE: &str = "\x1B[1;37m";
const BLUE: &str = "\x1B[1;34m";
const RED: &str = "\x1B[1;31m";
const YELLOW: &str = "\x1B[1;33m";

/// Symbol and color for one square, the path mark taking precedence
fn glyph(cell: Cell, mark: Mark) -> (char, Option<&'static str>) {
    match (mark, cell) {
        (Mark::OnPath, _) => ('*', Some(GREEN)),
        (_, Cell::Wall) => ('#', Some(WHITE)),
        (_, Cell::Start) => ('S', Some(BLUE)),
        (_, Cell::End) => ('E', Some(RED)),
        (Mark::Visited, Cell::Path) => ('.', Some(YELLOW)),
        (Mark::Unmarked, Cell::Path) => (' ', None),
    }
}

/// Draw `grid` with `overlay` marks on top, one line per row
///
/// - `color`: Wrap symbols in ANSI color codes.
///
/// # Examples
/// ```
/// use grid_maze::playback::render_frame;
/// use grid_maze::{solve, Algorithm, Grid, NoFrames};
///
/// let grid = Grid::parse("S #\n  E").unwrap();
/// let solution = solve(&grid, Algorithm::Bfs, &mut NoFrames).unwrap();
/// assert_eq!(render_frame(&grid, &solution.overlay, false), "*.#\n***");
/// ```
pub fn render_frame(grid: &Grid, overlay: &Overlay, color: bool) -> String {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let point = Point::new(row, col);
                    let cell = grid.get(point).unwrap_or(Cell::Wall);
                    match glyph(cell, overlay.get(point)) {
                        (symbol, Some(code)) if color => format!("{}{}{}", code, symbol, RESET),
                        (symbol, _) => symbol.to_string(),
                    }
                })
                .join("")
        })
        .join("\n")
}

/// Frame sink printing each snapshot to the terminal
pub struct Playback {
    frame_length: Duration,
    color: bool,
}

impl Playback {
    /// - `frame_length_ms`: Pause after each frame, milliseconds; 0 disables pausing.
    /// - `color`: Use ANSI colors.
    pub fn new(frame_length_ms: u64, color: bool) -> Self {
        Self {
            frame_length: Duration::from_millis(frame_length_ms),
            color,
        }
    }

    /// Clear the screen and print one frame
    pub fn show(&self, grid: &Grid, overlay: &Overlay) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", render_frame(grid, overlay, self.color));
    }
}

impl FrameSink for Playback {
    fn frame(&mut self, grid: &Grid, overlay: &Overlay) {
        self.show(grid, overlay);
        if !self.frame_length.is_zero() {
            thread::sleep(self.frame_length);
        }
    }
}
