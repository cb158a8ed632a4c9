//! Path finding from start to end
//!
//! Two strategies are available: depth-first search finds *some* path,
//! breadth-first search finds a shortest one. Both borrow the [Grid]
//! immutably and record their progress in a fresh [Overlay], which is
//! returned as part of the [Solution]. The same grid can therefore be
//! solved any number of times, with either algorithm.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::error::SolveError;
use crate::grid::{Cell, Direction, Grid, Point};
use crate::overlay::{Mark, Overlay};

/// Traversal strategy
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Algorithm {
    /// Depth-first search with backtracking
    Dfs,
    /// Breadth-first search, finds a shortest path
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Bfs => write!(f, "BFS"),
        }
    }
}

/// Receiver of read-only snapshots after each state-changing solver step
pub trait FrameSink {
    fn frame(&mut self, grid: &Grid, overlay: &Overlay);
}

impl<F: FnMut(&Grid, &Overlay)> FrameSink for F {
    fn frame(&mut self, grid: &Grid, overlay: &Overlay) {
        self(grid, overlay)
    }
}

/// Sink that ignores all frames
pub struct NoFrames;

impl FrameSink for NoFrames {
    fn frame(&mut self, _grid: &Grid, _overlay: &Overlay) {}
}

/// How the search ended
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Outcome {
    /// End was reached
    Solved,
    /// Every reachable square was explored without reaching the end
    NoPath,
}

/// Result of a finished search
#[derive(Debug, Clone)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    /// Squares from start to end, inclusive; empty if there is no path
    pub path: Vec<Point>,
    /// Final marks; squares on `path` are [Mark::OnPath]
    pub overlay: Overlay,
    /// Number of frames handed to the sink
    pub frames: usize,
    /// Number of squares expanded by the search
    pub expanded: usize,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Path length in steps, i.e. squares on the path minus one
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        match self.outcome {
            Outcome::Solved => println!(
                "Maze solved with {}! The path is {} steps ({} squares explored).",
                self.algorithm,
                self.steps(),
                self.expanded
            ),
            Outcome::NoPath => println!(
                "No path found with {} ({} squares explored).",
                self.algorithm, self.expanded
            ),
        }
    }
}

/// Solve `grid` with the chosen algorithm
///
/// Returns error only if the grid lacks a start or an end; an unreachable
/// end is reported as [Outcome::NoPath].
pub fn solve(
    grid: &Grid,
    algorithm: Algorithm,
    sink: &mut impl FrameSink,
) -> Result<Solution, SolveError> {
    debug!("Solving {}x{} maze with {}", grid.rows(), grid.cols(), algorithm);
    let solution = match algorithm {
        Algorithm::Dfs => solve_dfs(grid, sink),
        Algorithm::Bfs => solve_bfs(grid, sink),
    }?;
    debug!(
        "{} finished: {:?}, {} steps, {} expanded, {} frames",
        algorithm,
        solution.outcome,
        solution.steps(),
        solution.expanded,
        solution.frames
    );
    Ok(solution)
}

fn endpoints(grid: &Grid) -> Result<(Point, Point), SolveError> {
    let start = grid.start().ok_or(SolveError::NoStart)?;
    let end = grid.end().ok_or(SolveError::NoEnd)?;
    Ok((start, end))
}

/// Depth-first search with backtracking
///
/// Neighbours are tried in [Direction::ALL] order and the first route
/// that reaches the end wins, so the path is not necessarily the
/// shortest. Squares on the current route are marked [Mark::OnPath];
/// when a square runs out of neighbours it is downgraded to
/// [Mark::Visited] and never entered again.
///
/// Uses an explicit stack of `(square, next direction)` frames, so the
/// depth is bounded by the number of squares rather than the call stack.
pub fn solve_dfs(grid: &Grid, sink: &mut impl FrameSink) -> Result<Solution, SolveError> {
    let (start, end) = endpoints(grid)?;
    let mut overlay = Overlay::for_grid(grid);
    let mut frames = 0;
    let mut expanded = 1;

    let mut stack: Vec<(Point, usize)> = Vec::with_capacity(grid.rows() * grid.cols());
    overlay.set(start, Mark::OnPath);
    sink.frame(grid, &overlay);
    frames += 1;
    stack.push((start, 0));

    let outcome = loop {
        let Some(top) = stack.last_mut() else {
            break Outcome::NoPath;
        };
        let (current, next) = *top;

        if next == Direction::ALL.len() {
            trace!("Backtracking from {}", current);
            overlay.set(current, Mark::Visited);
            stack.pop();
            sink.frame(grid, &overlay);
            frames += 1;
            continue;
        }
        top.1 += 1;

        let Some(neighbor) = grid.step(current, Direction::ALL[next], 1) else {
            continue;
        };
        if overlay.get(neighbor) != Mark::Unmarked {
            continue;
        }
        match grid.get(neighbor) {
            Some(Cell::End) => {
                overlay.set(neighbor, Mark::OnPath);
                sink.frame(grid, &overlay);
                frames += 1;
                break Outcome::Solved;
            }
            Some(cell) if cell.is_open() => {
                trace!("Entering {}", neighbor);
                overlay.set(neighbor, Mark::OnPath);
                sink.frame(grid, &overlay);
                frames += 1;
                expanded += 1;
                stack.push((neighbor, 0));
            }
            _ => (),
        }
    };

    let path = match outcome {
        Outcome::Solved => stack.iter().map(|(point, _)| *point).chain([end]).collect(),
        Outcome::NoPath => Vec::new(),
    };

    Ok(Solution {
        algorithm: Algorithm::Dfs,
        outcome,
        path,
        overlay,
        frames,
        expanded,
    })
}

/// Breadth-first search with shortest path reconstruction
///
/// Squares are expanded in order of discovery from a FIFO frontier. Each
/// square is enqueued at most once and remembers the square it was first
/// discovered from; when the end is dequeued, this parent chain is walked
/// back to the start. Since discovery order never decreases in distance,
/// the first route to the end is a shortest one.
pub fn solve_bfs(grid: &Grid, sink: &mut impl FrameSink) -> Result<Solution, SolveError> {
    let (start, end) = endpoints(grid)?;
    let mut overlay = Overlay::for_grid(grid);
    let mut frames = 0;
    let mut expanded = 0;

    let capacity = grid.rows() * grid.cols();
    let mut frontier = VecDeque::with_capacity(capacity);
    let mut parent: Vec<Option<Point>> = vec![None; capacity];
    let mut discovered = vec![false; capacity];

    discovered[grid.index_of(start)] = true;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == end {
            let path = reconstruct_path(grid, &parent, end);
            for point in &path {
                overlay.set(*point, Mark::OnPath);
            }
            sink.frame(grid, &overlay);
            frames += 1;
            return Ok(Solution {
                algorithm: Algorithm::Bfs,
                outcome: Outcome::Solved,
                path,
                overlay,
                frames,
                expanded,
            });
        }

        trace!("Expanding {}", current);
        overlay.set(current, Mark::Visited);
        expanded += 1;
        sink.frame(grid, &overlay);
        frames += 1;

        for neighbor in grid.neighbors(current) {
            let idx = grid.index_of(neighbor);
            if discovered[idx] || !matches!(grid.get(neighbor), Some(Cell::Path | Cell::End)) {
                continue;
            }
            discovered[idx] = true;
            parent[idx] = Some(current);
            frontier.push_back(neighbor);
        }
    }

    Ok(Solution {
        algorithm: Algorithm::Bfs,
        outcome: Outcome::NoPath,
        path: Vec::new(),
        overlay,
        frames,
        expanded,
    })
}

/// Follow parents from `end` back to the square without one (the start)
fn reconstruct_path(grid: &Grid, parent: &[Option<Point>], end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = parent[grid.index_of(current)] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use crate::error::SolveError;
    use crate::grid::{Cell, Grid, Point};
    use crate::overlay::{Mark, Overlay};
    use crate::solver::{solve, solve_bfs, solve_dfs, Algorithm, NoFrames, Outcome};

    const CORRIDOR: &str = "
S   E
#####
#####
#####
#####";

    const BLOCKED: &str = "S# \n # \n #E";

    const OPEN_FIELD: &str = "S    \n     \n     \n     \n    E";

    fn is_connected_path(path: &[Point]) -> bool {
        path.windows(2)
            .all(|w| w[0].row.abs_diff(w[1].row) + w[0].col.abs_diff(w[1].col) == 1)
    }

    #[test]
    fn straight_corridor_is_solved_by_both() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        let expected: Vec<_> = (0..5).map(|col| Point::new(0, col)).collect();

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let solution = solve(&grid, algorithm, &mut NoFrames).unwrap();
            assert_eq!(solution.outcome, Outcome::Solved);
            assert_eq!(solution.path, expected);
            assert_eq!(solution.overlay.count(Mark::OnPath), 5);
            assert!((0..5).all(|col| solution.overlay.get(Point::new(0, col)) == Mark::OnPath));
        }
    }

    #[test]
    fn wall_column_blocks_both() {
        let grid = Grid::parse(BLOCKED).unwrap();

        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let solution = solve(&grid, algorithm, &mut NoFrames).unwrap();
            assert_eq!(solution.outcome, Outcome::NoPath);
            assert!(solution.path.is_empty());
            assert_eq!(solution.overlay.count(Mark::OnPath), 0);
            assert_eq!(solution.overlay.count(Mark::Visited), 3);
            assert_eq!(solution.overlay.get(Point::new(2, 2)), Mark::Unmarked);
        }
    }

    #[test]
    fn solving_leaves_grid_untouched() {
        let grid = Grid::parse(OPEN_FIELD).unwrap();
        let original = grid.clone();

        let dfs = solve_dfs(&grid, &mut NoFrames).unwrap();
        let bfs = solve_bfs(&grid, &mut NoFrames).unwrap();

        assert_eq!(grid, original);
        assert!(dfs.is_solved());
        assert!(bfs.is_solved());
    }

    #[test]
    fn bfs_is_never_longer_than_dfs() {
        let grid = Grid::parse(OPEN_FIELD).unwrap();

        let dfs = solve_dfs(&grid, &mut NoFrames).unwrap();
        let bfs = solve_bfs(&grid, &mut NoFrames).unwrap();

        assert_eq!(bfs.steps(), 8);
        assert!(dfs.steps() >= bfs.steps());
        for solution in [&dfs, &bfs] {
            assert_eq!(solution.path.first(), Some(&Point::new(0, 0)));
            assert_eq!(solution.path.last(), Some(&Point::new(4, 4)));
            assert!(is_connected_path(&solution.path));
            assert_eq!(solution.overlay.count(Mark::OnPath), solution.path.len());
        }
    }

    #[test]
    fn dfs_takes_detour_that_bfs_avoids() {
        let text = "
#####
#S E#
#   #
#####";
        let grid = Grid::parse(text).unwrap();
        let bfs = solve_bfs(&grid, &mut NoFrames).unwrap();
        let dfs = solve_dfs(&grid, &mut NoFrames).unwrap();

        assert_eq!(
            bfs.path,
            vec![Point::new(1, 1), Point::new(1, 2), Point::new(1, 3)]
        );
        // Down is tried before right
        assert_eq!(
            dfs.path,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(1, 3)
            ]
        );
        assert!(is_connected_path(&dfs.path));
    }

    #[test]
    fn dfs_follows_direction_order() {
        let text = "
######
#S   #
# ####
#   E#
######";
        let grid = Grid::parse(text).unwrap();
        let solution = solve_dfs(&grid, &mut NoFrames).unwrap();

        assert!(solution.is_solved());
        assert_eq!(solution.steps(), 5);
        assert_eq!(solution.overlay.get(Point::new(1, 2)), Mark::Unmarked);
    }

    #[test]
    fn dfs_marks_dead_ends_visited() {
        let text = "
#####
#S  #
## ##
#  E#
#####";
        let grid = Grid::parse(text).unwrap();
        let dead_end = Point::new(3, 1);
        let mut seen_tentative = false;
        let mut sink = |_: &Grid, overlay: &Overlay| {
            seen_tentative |= overlay.get(dead_end) == Mark::OnPath;
        };
        let solution = solve_dfs(&grid, &mut sink).unwrap();

        assert!(seen_tentative);
        assert_eq!(solution.overlay.get(dead_end), Mark::Visited);
        assert_eq!(
            solution.path,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(3, 2),
                Point::new(3, 3)
            ]
        );
        assert_eq!(solution.overlay.get(Point::new(1, 3)), Mark::Unmarked);
    }

    #[test]
    fn frames_are_emitted_per_step() {
        let grid = Grid::parse(CORRIDOR).unwrap();
        let mut count = 0;
        let mut sink = |_: &Grid, _: &Overlay| count += 1;

        let solution = solve_bfs(&grid, &mut sink).unwrap();
        assert_eq!(solution.frames, count);
        // Four squares expanded before the end is dequeued, plus the final frame
        assert_eq!(solution.expanded, 4);
        assert_eq!(count, 5);

        let solution = solve_dfs(&grid, &mut NoFrames).unwrap();
        assert_eq!(solution.frames, 5);
    }

    #[test]
    fn missing_start_or_end_is_an_error() {
        let mut grid = Grid::filled(2, 2, Cell::Path).unwrap();
        grid.set(Point::new(1, 1), Cell::End);
        assert_eq!(
            solve(&grid, Algorithm::Bfs, &mut NoFrames).unwrap_err(),
            SolveError::NoStart
        );
        assert_eq!(
            solve(&grid, Algorithm::Dfs, &mut NoFrames).unwrap_err(),
            SolveError::NoStart
        );

        let mut grid = Grid::filled(2, 2, Cell::Path).unwrap();
        grid.set(Point::new(0, 0), Cell::Start);
        assert_eq!(solve_bfs(&grid, &mut NoFrames).unwrap_err(), SolveError::NoEnd);
    }

    #[test]
    fn adjacent_start_and_end() {
        let grid = Grid::parse("SE").unwrap();
        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let solution = solve(&grid, algorithm, &mut NoFrames).unwrap();
            assert_eq!(solution.steps(), 1);
        }
    }

    #[cfg(feature = "mapgen")]
    #[test]
    fn both_solvers_agree_on_generated_mazes() {
        use crate::maze_generator::MazeGenerator;

        for seed in 0..25 {
            for (rows, cols) in [(4, 5), (7, 7), (20, 33), (99, 100), (100, 100)] {
                let grid = MazeGenerator::new(Some(seed))
                    .generate_maze(rows, cols)
                    .unwrap();
                let dfs = solve_dfs(&grid, &mut NoFrames).unwrap();
                let bfs = solve_bfs(&grid, &mut NoFrames).unwrap();

                assert!(dfs.is_solved(), "DFS {}x{} seed {}", rows, cols, seed);
                assert!(bfs.is_solved(), "BFS {}x{} seed {}", rows, cols, seed);
                assert!(bfs.steps() <= dfs.steps());
                for solution in [&dfs, &bfs] {
                    assert!(is_connected_path(&solution.path));
                    assert_eq!(solution.overlay.count(Mark::OnPath), solution.path.len());
                }
            }
        }
    }

    #[cfg(feature = "cli")]
    #[test]
    fn algorithm_names_on_command_line() {
        use clap::ValueEnum;

        assert_eq!(Algorithm::from_str("dfs", true), Ok(Algorithm::Dfs));
        assert_eq!(Algorithm::from_str("BFS", true), Ok(Algorithm::Bfs));
        assert!(Algorithm::from_str("astar", true).is_err());
    }
}
