//! Core game state.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use trollmaze_core::{Direction, Entity, Location, Maze, MazeError, MoveOutcome, Tile, attempt_move};
use trollmaze_paths::{PathFinder, bfs_map};

use crate::config::GameConfig;
use crate::policy::DestinationPolicy;
use crate::troll::Troll;

/// Spawn attempts before a troll is allowed to share the player's cell.
const SPAWN_TRIES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// The player reached the exit.
    Won,
    /// A troll caught the player.
    Lost,
}

/// Core game state (separate from the terminal front end).
pub struct Game {
    pub maze: Maze,
    pub player: Entity,
    pub trolls: Vec<Troll>,
    pub finder: PathFinder,
    policy: Box<dyn DestinationPolicy>,
    rng: SmallRng,
    pub state: GameState,
    pub turn: u32,
    pub config: GameConfig,
}

impl Game {
    /// Start a game on `config.maze`, or on the built-in maze.
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        let maze = match &config.maze {
            Some(text) => Maze::parse(text)?,
            None => Maze::builtin(),
        };
        Self::with_maze(maze, config)
    }

    /// Start a game on an already decoded maze. `config.maze` is ignored.
    pub fn with_maze(maze: Maze, config: GameConfig) -> Result<Self, MazeError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let player_loc = maze.random_passable(&mut rng).ok_or(MazeError::NoFloor)?;
        let player = Entity::new(player_loc, random_direction(&mut rng));

        let reachable = bfs_map(&maze, player_loc).iter().flatten().count();
        if reachable < maze.passable_count() {
            log::warn!(
                "only {reachable} of {} open cells are reachable from {player_loc}",
                maze.passable_count()
            );
        }

        let mut trolls = Vec::with_capacity(config.num_trolls as usize);
        for _ in 0..config.num_trolls {
            let mut loc = player_loc;
            for _ in 0..SPAWN_TRIES {
                loc = maze.random_passable(&mut rng).ok_or(MazeError::NoFloor)?;
                if loc != player_loc {
                    break;
                }
            }
            trolls.push(Troll::new(Entity::new(loc, random_direction(&mut rng))));
        }

        log::info!(
            "new game on {}x{} maze: player at {player_loc}, {} trolls, {:?} policy",
            maze.width(),
            maze.height(),
            trolls.len(),
            config.policy
        );

        let mut game = Self {
            finder: PathFinder::new(maze.width(), maze.height()),
            policy: config.policy.build(config.player_vision),
            maze,
            player,
            trolls,
            rng,
            state: GameState::Playing,
            turn: 0,
            config,
        };
        game.update_state();
        Ok(game)
    }

    /// Turn the player toward `dir` and step that way in a single keypress.
    /// Returns whether the player changed cells.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        let mut outcome = attempt_move(&self.maze, &mut self.player, dir);
        if outcome == MoveOutcome::Turned {
            outcome = attempt_move(&self.maze, &mut self.player, dir);
        }
        outcome == MoveOutcome::Moved
    }

    /// Process end of turn: every troll acts once, then the game state is
    /// re-evaluated. A player standing on the exit has already won and the
    /// trolls do not move.
    pub fn end_turn(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.turn += 1;
        self.update_state();
        if self.state != GameState::Playing {
            return;
        }

        for troll in self.trolls.iter_mut() {
            let action = troll.update(
                &self.maze,
                &mut self.finder,
                self.policy.as_mut(),
                self.player.loc,
                &mut self.rng,
            );
            log::trace!("turn {}: troll at {} {action:?}", self.turn, troll.loc());
        }
        self.update_state();
    }

    /// One full turn for a player command.
    pub fn play(&mut self, dir: Direction) -> bool {
        let moved = self.move_player(dir);
        self.end_turn();
        moved
    }

    fn update_state(&mut self) {
        let next = if self.maze.tile(self.player.loc) == Some(Tile::Exit) {
            GameState::Won
        } else if self.trolls.iter().any(|t| t.loc() == self.player.loc) {
            GameState::Lost
        } else {
            GameState::Playing
        };
        if next != self.state {
            log::info!("turn {}: {:?} -> {next:?}", self.turn, self.state);
            self.state = next;
        }
    }

    /// Whether the player can see `loc`.
    pub fn in_vision(&self, loc: Location) -> bool {
        self.player.loc.distance(loc) <= f64::from(self.config.player_vision)
    }

    /// Trolls the player can currently see.
    pub fn visible_trolls(&self) -> impl Iterator<Item = &Troll> {
        self.trolls.iter().filter(|t| self.in_vision(t.loc()))
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

fn random_direction<R: RngCore + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}
