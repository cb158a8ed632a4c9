//! Generate rectangular grid mazes and find a way from start to end
//!
//! A maze is a [Grid] of walls (`#`), paths (` `), one start (`S`) and one
//! end (`E`). It can be parsed from text or carved by
//! [maze_generator::MazeGenerator]. Solvers never modify the grid; their
//! progress is recorded in an [Overlay] and handed, frame by frame, to a
//! [FrameSink] such as [playback::Playback].
//!
//! # Examples
//! ## Depth-first and breadth-first search on the same maze
//! ```
//! use grid_maze::{solve, Algorithm, Grid, NoFrames};
//!
//! let text = [
//!     "#########",
//!     "#S      #",
//!     "# ##### #",
//!     "#     # #",
//!     "##### # #",
//!     "#E      #",
//!     "#########",
//! ]
//! .join("\n");
//! let grid = Grid::parse(&text).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (7, 9));
//!
//! let dfs = solve(&grid, Algorithm::Dfs, &mut NoFrames).unwrap();
//! let bfs = solve(&grid, Algorithm::Bfs, &mut NoFrames).unwrap();
//! assert!(dfs.is_solved() && bfs.is_solved());
//! assert!(bfs.steps() <= dfs.steps());
//! bfs.print_report();
//! ```
//!
//! ## Watching the search
//! ```
//! use grid_maze::{solve_bfs, Grid, Overlay};
//!
//! let grid = Grid::parse("S  \n## \nE  ").unwrap();
//! let mut frames = Vec::new();
//! let solution = solve_bfs(&grid, &mut |_: &Grid, overlay: &Overlay| {
//!     frames.push(overlay.clone())
//! })
//! .unwrap();
//! assert_eq!(solution.steps(), 6);
//! assert_eq!(frames.len(), solution.frames);
//! ```

pub mod error;
pub mod grid;
#[cfg(feature = "mapgen")]
pub mod maze_generator;
pub mod overlay;
pub mod playback;
pub mod solver;

pub use error::{GridError, SolveError};
pub use grid::{Cell, Direction, Grid, Point, DEFAULT_MAX_SIZE};
pub use overlay::{Mark, Overlay};
pub use solver::{solve, solve_bfs, solve_dfs, Algorithm, FrameSink, NoFrames, Outcome, Solution};
