//! Trollmaze: escape the maze before the trolls find you.
//!
//! The game shell around the navigation crates. [`troll`] drives each troll
//! along the paths [`trollmaze_paths`] computes, [`policy`] decides where
//! idle trolls head, [`game`] runs the turns and [`draw`] / [`term`] put it
//! on a crossterm terminal.

pub mod config;
pub mod draw;
pub mod game;
pub mod policy;
pub mod term;
pub mod troll;

pub use config::GameConfig;
pub use game::{Game, GameState};
pub use policy::{DestinationPolicy, Hunt, PolicyKind, Stalk, Wander};
pub use troll::{FollowOutcome, NavState, Troll, TrollAction};
