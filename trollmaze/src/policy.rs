//! Where a troll heads once it has no path to follow.

use rand::RngCore;
use trollmaze_core::{Location, Maze};

/// Chooses the destination of a new path request.
///
/// Returning `None` skips path planning for this tick; the troll then falls
/// back to walking straight ahead.
pub trait DestinationPolicy {
    fn destination(
        &mut self,
        maze: &Maze,
        troll: Location,
        player: Location,
        rng: &mut dyn RngCore,
    ) -> Option<Location>;

    fn name(&self) -> &'static str;
}

/// Head for a random floor cell anywhere in the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wander;

impl DestinationPolicy for Wander {
    fn destination(
        &mut self,
        maze: &Maze,
        _troll: Location,
        _player: Location,
        rng: &mut dyn RngCore,
    ) -> Option<Location> {
        maze.random_passable(rng)
    }

    fn name(&self) -> &'static str {
        "wander"
    }
}

/// Head straight for the player's current cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hunt;

impl DestinationPolicy for Hunt {
    fn destination(
        &mut self,
        _maze: &Maze,
        _troll: Location,
        player: Location,
        _rng: &mut dyn RngCore,
    ) -> Option<Location> {
        Some(player)
    }

    fn name(&self) -> &'static str {
        "hunt"
    }
}

/// Hunt the player while within `vision` cells (Euclidean), wander
/// otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Stalk {
    pub vision: f64,
}

impl DestinationPolicy for Stalk {
    fn destination(
        &mut self,
        maze: &Maze,
        troll: Location,
        player: Location,
        rng: &mut dyn RngCore,
    ) -> Option<Location> {
        if troll.distance(player) <= self.vision {
            Hunt.destination(maze, troll, player, rng)
        } else {
            Wander.destination(maze, troll, player, rng)
        }
    }

    fn name(&self) -> &'static str {
        "stalk"
    }
}

/// Configuration-level selector for a [`DestinationPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    #[default]
    Wander,
    Hunt,
    Stalk,
}

impl PolicyKind {
    /// Instantiate the policy. `vision` only matters for [`PolicyKind::Stalk`].
    pub fn build(self, vision: u8) -> Box<dyn DestinationPolicy> {
        match self {
            PolicyKind::Wander => Box::new(Wander),
            PolicyKind::Hunt => Box::new(Hunt),
            PolicyKind::Stalk => Box::new(Stalk {
                vision: f64::from(vision),
            }),
        }
    }
}
