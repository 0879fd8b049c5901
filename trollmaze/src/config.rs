//! Game session settings.

use crate::policy::PolicyKind;

/// Settings for a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Trolls spawned at the start of the game.
    pub num_trolls: u8,
    /// Radius, in cells, within which the player sees trolls.
    pub player_vision: u8,
    /// How idle trolls pick where to go next.
    pub policy: PolicyKind,
    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Maze text in the `#`/space/`X` format. `None` uses the built-in maze.
    pub maze: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_trolls: 4,
            player_vision: 10,
            policy: PolicyKind::Wander,
            seed: None,
            maze: None,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: GameConfig =
            serde_json::from_str(r#"{ "num_trolls": 2, "policy": "stalk", "seed": 7 }"#).unwrap();
        assert_eq!(cfg.num_trolls, 2);
        assert_eq!(cfg.player_vision, 10);
        assert_eq!(cfg.policy, PolicyKind::Stalk);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.maze, None);
    }
}
