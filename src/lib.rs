//! Perfect maze generation.
//!
//! A [`maze::Maze`] is a spanning tree over a rectangular grid of cells, built by one of the
//! [`generators`]: origin shift, recursive backtracking or binary tree. Its space graph can
//! be turned into a wall graph over grid-line intersections with
//! [`maze::space_to_wall_graph`], which is what [`app::renderer`] draws.
//!
//! ```
//! use mazegen::generators::{Backtracking, MazeAlgorithm, get_rng};
//!
//! let mut rng = get_rng(Some(1));
//! let maze = Backtracking::new(8, 5).generate_with(&mut rng).unwrap();
//! assert_eq!(maze.space_graph().edge_count(), 8 * 5 - 1);
//!
//! let walls = maze.wall_graph().unwrap();
//! assert_eq!(walls.node_count(), 9 * 6);
//! ```

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;

pub use error::{MazeError, Result};
