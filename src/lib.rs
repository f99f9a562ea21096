//! Maze generation and solving for the `amaze` terminal game.
//!
//! The library half of the crate is the game-independent core: a logical
//! grid of cells with four wall flags each, a randomized depth-first
//! backtracking generator that carves a spanning tree into it, a
//! depth-first solver that recovers the unique entry-to-exit path, and a
//! projection onto the doubled-resolution occupancy grid the renderer
//! consumes.
//!
//! ```
//! let grid = amaze::generate(10, (5, 5), Some(42)).unwrap();
//! let path = amaze::solve(&grid, Some(42)).unwrap();
//! let cells = amaze::project(&grid);
//! assert_eq!(grid.open_edge_count(), 10 * 10 - 1);
//! assert_eq!(cells.side(), 21);
//! assert!(!path.is_empty());
//! ```

pub mod app;
pub mod generators;
pub mod maze;
pub mod projection;
pub mod rng;
pub mod solvers;

pub use generators::generate;
pub use maze::{Cell, Direction, Grid};
pub use projection::{OccupancyGrid, project, projected};
pub use solvers::{solve, solve_between};
