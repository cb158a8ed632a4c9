//! Maze layout: cell classification, coordinates and adjacency

use std::fmt;

use itertools::Itertools;

use crate::error::GridError;

/// Largest accepted number of rows or columns, unless overridden
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Static classification of a maze square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Wall,
    Path,
    Start,
    End,
}

impl Cell {
    const S_WALL: char = '#';
    const S_PATH: char = ' ';
    const S_START: char = 'S';
    const S_END: char = 'E';

    /// Classify one character of the text representation
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::S_WALL => Some(Cell::Wall),
            Self::S_PATH => Some(Cell::Path),
            Self::S_START => Some(Cell::Start),
            Self::S_END => Some(Cell::End),
            _ => None,
        }
    }

    /// Character used for this cell in the text representation
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => Self::S_WALL,
            Cell::Path => Self::S_PATH,
            Cell::Start => Self::S_START,
            Cell::End => Self::S_END,
        }
    }

    /// Whether a solver may step onto this cell
    pub fn is_open(self) -> bool {
        self != Cell::Wall
    }
}

/// Location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal movement; no diagonals
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order shared by the solvers and the generator
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta of a single step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Fixed-size rectangular maze
///
/// Cells are stored row-major. The classification is never changed by
/// solving; solver progress is kept in an [crate::Overlay].
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every square set to `cell`
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Result<Self, GridError> {
        Self::filled_with_limit(rows, cols, cell, DEFAULT_MAX_SIZE)
    }

    /// Like [Self::filled], but with a custom upper bound for dimensions
    pub fn filled_with_limit(
        rows: usize,
        cols: usize,
        cell: Cell,
        max: usize,
    ) -> Result<Self, GridError> {
        check_dimensions(rows, cols, max)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        })
    }

    /// Parse maze from its text representation and validate it
    ///
    /// - `text`: One line per row, using `#` for walls, ` ` for paths,
    ///   `S` for the start and `E` for the end. Blank lines before and
    ///   after the maze are ignored.
    ///
    /// Returns error on unknown characters, rows of differing length,
    /// dimensions above [DEFAULT_MAX_SIZE], or a start/end count other
    /// than one.
    ///
    /// # Examples
    /// ```
    /// use grid_maze::Grid;
    ///
    /// let grid = Grid::parse("S  #\n## #\nE  #").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (3, 4));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::parse_with_limit(text, DEFAULT_MAX_SIZE)
    }

    /// Like [Self::parse], but with a custom upper bound for dimensions
    pub fn parse_with_limit(text: &str, max: usize) -> Result<Self, GridError> {
        let text = text.trim_matches(|c| c == '\n' || c == '\r');
        if text.is_empty() {
            return Err(GridError::EmptyInput);
        }

        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        let cols = lines[0].chars().count();
        check_dimensions(rows, cols, max)?;

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(GridError::InvalidCharacter { ch, row, col })?;
                if col < cols {
                    cells.push(cell);
                }
                found += 1;
            }
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let grid = Grid { rows, cols, cells };
        grid.validate()?;
        Ok(grid)
    }

    /// Check that the grid has exactly one start and exactly one end
    ///
    /// Does not modify the grid, so repeated calls give the same answer.
    pub fn validate(&self) -> Result<(), GridError> {
        let (starts, ends) = self.cells.iter().fold((0, 0), |(s, e), cell| match cell {
            Cell::Start => (s + 1, e),
            Cell::End => (s, e + 1),
            _ => (s, e),
        });
        if starts != 1 {
            return Err(GridError::StartCount(starts));
        }
        if ends != 1 {
            return Err(GridError::EndCount(ends));
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `point` lies inside the grid; classification is not checked
    pub fn is_valid(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    /// Point `distance` squares away in `direction`, if it is inside the grid
    pub fn step(&self, point: Point, direction: Direction, distance: usize) -> Option<Point> {
        let (dr, dc) = direction.offset();
        let distance = isize::try_from(distance).ok()?;
        let next = Point {
            row: point.row.checked_add_signed(dr * distance)?,
            col: point.col.checked_add_signed(dc * distance)?,
        };
        self.is_valid(next).then_some(next)
    }

    /// Orthogonal neighbours of `point` inside the grid, in [Direction::ALL] order
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(point, direction, 1))
    }

    /// Row-major position of `point` in flat per-cell storage
    pub fn index_of(&self, point: Point) -> usize {
        point.row * self.cols + point.col
    }

    /// Classification at `point`, or `None` outside the grid
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.is_valid(point).then(|| self.cells[self.index_of(point)])
    }

    /// Set classification at `point`
    ///
    /// Panics, if `point` is outside the grid.
    pub fn set(&mut self, point: Point, cell: Cell) {
        assert!(self.is_valid(point), "Point {} outside the maze", point);
        let idx = self.index_of(point);
        self.cells[idx] = cell;
    }

    /// First point with classification `cell`, scanning row by row
    pub fn find(&self, cell: Cell) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| *c == cell)
            .map(|idx| Point::new(idx / self.cols, idx % self.cols))
    }

    pub fn start(&self) -> Option<Point> {
        self.find(Cell::Start)
    }

    pub fn end(&self) -> Option<Point> {
        self.find(Cell::End)
    }

    /// Iterate rows as slices of cells
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .iter_rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).join(""))
            .join("\n");
        write!(f, "{}", text)
    }
}

fn check_dimensions(rows: usize, cols: usize, max: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 || rows > max || cols > max || rows.checked_mul(cols).is_none() {
        return Err(GridError::InvalidDimensions { rows, cols, max });
    }
    Ok(())
}
