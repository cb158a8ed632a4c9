//! Solver progress, kept apart from the maze layout

use crate::grid::{Grid, Point};

/// Per-square annotation written by a solver
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Mark {
    #[default]
    Unmarked,
    /// Explored, not on the current or final path
    Visited,
    /// Part of the (tentative or final) path from start to end
    OnPath,
}

/// Layer of [Mark]s with the same shape as a [Grid]
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Overlay {
    rows: usize,
    cols: usize,
    marks: Vec<Mark>,
}

impl Overlay {
    pub fn new(rows: usize, cols: usize) -> Self {
        Overlay {
            rows,
            cols,
            marks: vec![Mark::Unmarked; rows * cols],
        }
    }

    /// Empty overlay matching the shape of `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Mark at `point`; points outside the overlay read as unmarked
    pub fn get(&self, point: Point) -> Mark {
        if point.row < self.rows && point.col < self.cols {
            self.marks[point.row * self.cols + point.col]
        } else {
            Mark::Unmarked
        }
    }

    /// Panics, if `point` is outside the overlay.
    pub fn set(&mut self, point: Point, mark: Mark) {
        assert!(
            point.row < self.rows && point.col < self.cols,
            "Point {} outside the overlay",
            point
        );
        self.marks[point.row * self.cols + point.col] = mark;
    }

    /// Number of squares carrying `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|m| **m == mark).count()
    }

    /// Points carrying `mark`, row by row
    pub fn points(&self, mark: Mark) -> impl Iterator<Item = Point> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(move |(_, m)| **m == mark)
            .map(|(idx, _)| Point::new(idx / self.cols, idx % self.cols))
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Point;
    use crate::overlay::{Mark, Overlay};

    #[test]
    fn marks_are_independent() {
        let mut overlay = Overlay::new(2, 3);
        overlay.set(Point::new(0, 2), Mark::OnPath);
        overlay.set(Point::new(1, 0), Mark::Visited);

        assert_eq!(overlay.get(Point::new(0, 2)), Mark::OnPath);
        assert_eq!(overlay.get(Point::new(1, 0)), Mark::Visited);
        assert_eq!(overlay.get(Point::new(1, 1)), Mark::Unmarked);
        assert_eq!(overlay.get(Point::new(7, 7)), Mark::Unmarked);
        assert_eq!(overlay.count(Mark::Unmarked), 4);
        assert_eq!(
            overlay.points(Mark::OnPath).collect::<Vec<_>>(),
            vec![Point::new(0, 2)]
        );
    }
}
