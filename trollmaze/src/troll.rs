//! Troll navigation: drive a troll along its owned path and fall back to
//! simple heuristics when it has none.

use rand::{Rng, RngCore};
use trollmaze_core::{Direction, Entity, Location, Maze, MoveOutcome, attempt_move, look};
use trollmaze_paths::{Path, PathFinder};

use crate::policy::DestinationPolicy;

/// Navigation state, derived from the path a troll owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    NoPath,
    Following,
    Exhausted,
}

/// Result of one [`Troll::follow_path`] tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The troll took the next step; the cursor advanced.
    Moved,
    /// The troll turned toward the next step but stayed put. The step is
    /// retried next tick.
    Turned,
    /// The next cell is impassable. The path was discarded.
    Blocked,
    /// There was no path to follow, or it was already used up.
    NoPath,
}

/// What a troll did during one [`Troll::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrollAction {
    /// Stepped or turned along an existing path.
    Followed(FollowOutcome),
    /// Planned a new path and stepped or turned along it.
    Replanned(FollowOutcome),
    /// Walked one cell in its facing direction.
    Forward,
    /// Turned toward the longest open sightline.
    Reoriented(Direction),
    /// Walled in on every side.
    Stuck,
}

/// A troll and the one path it owns, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Troll {
    pub entity: Entity,
    path: Option<Path>,
}

impl Troll {
    pub const fn new(entity: Entity) -> Self {
        Self { entity, path: None }
    }

    pub fn loc(&self) -> Location {
        self.entity.loc
    }

    /// The path currently owned, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn nav_state(&self) -> NavState {
        match &self.path {
            None => NavState::NoPath,
            Some(p) if p.is_exhausted() => NavState::Exhausted,
            Some(_) => NavState::Following,
        }
    }

    /// Drop the owned path.
    pub fn discard_path(&mut self) {
        self.path = None;
    }

    /// Compute a path to `destination` and take ownership of it.
    ///
    /// Any previous path is dropped first, whether or not the new search
    /// succeeds.
    pub fn request_new_path(
        &mut self,
        finder: &mut PathFinder,
        maze: &Maze,
        destination: Location,
    ) -> bool {
        self.path = finder.find_path(maze, self.entity.loc, destination);
        match &self.path {
            Some(p) => {
                log::debug!(
                    "troll at {} planned {} steps to {destination}",
                    self.entity.loc,
                    p.len()
                );
                true
            }
            None => {
                log::debug!("troll at {} found no path to {destination}", self.entity.loc);
                false
            }
        }
    }

    /// Advance one tick along the owned path.
    pub fn follow_path(&mut self, maze: &Maze) -> FollowOutcome {
        let Some(dir) = self.path.as_ref().and_then(Path::next_step) else {
            self.path = None;
            return FollowOutcome::NoPath;
        };

        match attempt_move(maze, &mut self.entity, dir) {
            MoveOutcome::Moved => {
                if let Some(p) = self.path.as_mut() {
                    p.advance();
                }
                FollowOutcome::Moved
            }
            MoveOutcome::Turned => FollowOutcome::Turned,
            MoveOutcome::Blocked => {
                log::debug!(
                    "troll at {} blocked heading {dir}, discarding path",
                    self.entity.loc
                );
                self.path = None;
                FollowOutcome::Blocked
            }
        }
    }

    /// Run one tick of the troll's decision loop.
    ///
    /// In order: follow the owned path, plan a new one toward the policy's
    /// destination and follow that, walk forward, turn toward the longest
    /// open sightline. A troll walled in on all sides stays put.
    pub fn update(
        &mut self,
        maze: &Maze,
        finder: &mut PathFinder,
        policy: &mut dyn DestinationPolicy,
        player: Location,
        rng: &mut dyn RngCore,
    ) -> TrollAction {
        match self.follow_path(maze) {
            outcome @ (FollowOutcome::Moved | FollowOutcome::Turned) => {
                return TrollAction::Followed(outcome);
            }
            FollowOutcome::Blocked | FollowOutcome::NoPath => {}
        }

        let planned = policy
            .destination(maze, self.entity.loc, player, rng)
            .is_some_and(|dest| self.request_new_path(finder, maze, dest));
        if planned {
            match self.follow_path(maze) {
                outcome @ (FollowOutcome::Moved | FollowOutcome::Turned) => {
                    return TrollAction::Replanned(outcome);
                }
                FollowOutcome::Blocked | FollowOutcome::NoPath => {}
            }
        }

        let face = self.entity.face;
        if attempt_move(maze, &mut self.entity, face) == MoveOutcome::Moved {
            return TrollAction::Forward;
        }

        match self.longest_sightline(maze, rng) {
            Some(dir) => {
                self.entity.face = dir;
                TrollAction::Reoriented(dir)
            }
            None => TrollAction::Stuck,
        }
    }

    /// The direction with the most open cells ahead, ties broken at random.
    /// `None` when every neighbour is blocked.
    fn longest_sightline(&self, maze: &Maze, rng: &mut dyn RngCore) -> Option<Direction> {
        let mut best = 0;
        let mut candidates: Vec<Direction> = Vec::with_capacity(4);
        for dir in Direction::ALL {
            let n = look(maze, &self.entity, dir);
            if n == 0 || n < best {
                continue;
            }
            if n > best {
                best = n;
                candidates.clear();
            }
            candidates.push(dir);
        }
        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            len => Some(candidates[rng.random_range(0..len)]),
        }
    }
}
