//! **trollmaze-core**: the maze grid and the entities that walk it.
//!
//! This crate provides the read-only world model shared by the rest of the
//! *trollmaze* workspace. [`Maze`] holds passable and blocked cells addressed
//! by [`Location`]; [`attempt_move`] is the single movement primitive used by
//! both the player and the trolls.

pub mod entity;
pub mod geom;
pub mod maze;

pub use entity::{Entity, MoveOutcome, attempt_move, look};
pub use geom::{Direction, Location};
pub use maze::{DEFAULT_MAZE, Maze, MazeError, Tile};
