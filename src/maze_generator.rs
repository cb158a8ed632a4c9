//! Map generation

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::error::GridError;
use crate::grid::{Cell, Direction, Grid, Point, DEFAULT_MAX_SIZE};

/// Maze generator using randomized depth-first carving
pub struct MazeGenerator {
    random: StdRng,
    max_size: usize,
}

impl MazeGenerator {
    /// Create generator
    ///
    /// - `seed`: Seed for reproducible mazes; fresh entropy if `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Accept dimensions up to `max_size` instead of [DEFAULT_MAX_SIZE]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Generate a perfect maze (no loops) of `rows` x `cols` squares
    ///
    /// Corridors are carved on the lattice of odd coordinates, starting
    /// from (1, 1). Start is then placed at (1, 1) and end at
    /// (rows - 2, cols - 2). When the end falls between lattice squares
    /// (even dimensions), it is joined to the nearest carved square.
    ///
    /// Returns error, if dimensions exceed the maximum or are too small
    /// to hold separate start and end squares.
    ///
    /// # Examples
    /// ```
    /// use grid_maze::maze_generator::MazeGenerator;
    ///
    /// let grid = MazeGenerator::new(Some(7)).generate_maze(11, 21).unwrap();
    /// assert!(grid.validate().is_ok());
    /// ```
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows < 3 || cols < 3 || (rows == 3 && cols == 3) {
            return Err(GridError::TooSmallToGenerate { rows, cols });
        }
        let mut grid = Grid::filled_with_limit(rows, cols, Cell::Wall, self.max_size)?;
        debug!("Generating {}x{} maze", rows, cols);

        let origin = Point::new(1, 1);
        grid.set(origin, Cell::Path);
        let carved = self.carve(&mut grid, origin);

        let end = Point::new(rows - 2, cols - 2);
        Self::anchor_end(&mut grid, end);
        grid.set(origin, Cell::Start);
        grid.set(end, Cell::End);

        debug!("Carved {} lattice squares", carved);
        Ok(grid)
    }

    /// Carve corridors from `origin` until every lattice square is reached
    ///
    /// Iterative recursive-backtracker: move to a random uncarved square two
    /// steps away, opening the wall in between, or pop the stack when stuck.
    /// Returns the number of lattice squares carved.
    fn carve(&mut self, grid: &mut Grid, origin: Point) -> usize {
        let mut stack: Vec<Point> = Vec::with_capacity(grid.rows() * grid.cols() / 4 + 1);
        let mut current = origin;
        let mut carved = 1;

        loop {
            let candidates: Vec<(Point, Point)> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    let target = grid.step(current, direction, 2)?;
                    let between = grid.step(current, direction, 1)?;
                    (grid.get(target) == Some(Cell::Wall)).then_some((between, target))
                })
                .collect();

            if let Some(&(between, target)) = candidates.choose(&mut self.random) {
                grid.set(between, Cell::Path);
                grid.set(target, Cell::Path);
                stack.push(current);
                current = target;
                carved += 1;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }
        carved
    }

    /// Connect `end` to the carved lattice, if it is not a lattice square
    ///
    /// Opens at most two squares: one step towards the nearest odd row,
    /// then one step towards the nearest odd column.
    fn anchor_end(grid: &mut Grid, end: Point) {
        let row = if end.row % 2 == 1 { end.row } else { end.row - 1 };
        let col = if end.col % 2 == 1 { end.col } else { end.col - 1 };
        if (row, col) == (end.row, end.col) {
            return;
        }
        warn!(
            "End {} is off the carving lattice, connecting it to ({}, {})",
            end, row, col
        );
        for point in [Point::new(row, end.col), Point::new(row, col)] {
            if grid.get(point) == Some(Cell::Wall) {
                grid.set(point, Cell::Path);
            }
        }
    }
}
