//! Game configuration loaded from TOML.
//!
//! ```toml
//! stories_dir = "stories"
//!
//! [player]
//! name = "Hero"
//! gold = 50
//!
//! [[goals]]
//! kind = "inventory"
//! items = ["Sword", "Shield"]
//! ```

use paths_rules::{Goal, Player, PlayerSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoryError, StoryResult};
use crate::game::Game;
use crate::library::StoryLibrary;
use crate::story::Story;

/// Settings for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding `.paths` files.
    pub stories_dir: PathBuf,

    /// Starting player; checked when the game is created.
    pub player: PlayerSpec,

    /// Victory conditions.
    pub goals: Vec<GoalConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stories_dir: PathBuf::from("stories"),
            player: PlayerSpec::default(),
            goals: vec![
                GoalConfig::Health { minimum: 100 },
                GoalConfig::Score { minimum: 100 },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> StoryResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| StoryError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> StoryResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn library(&self) -> StoryLibrary {
        StoryLibrary::new(&self.stories_dir)
    }

    /// Build and validate the starting player.
    pub fn player(&self) -> StoryResult<Player> {
        Ok(Player::new(self.player.clone())?)
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.goals.iter().cloned().map(Goal::from).collect()
    }

    /// Start a game of `story` with the configured player and goals.
    pub fn new_game(&self, story: Story) -> StoryResult<Game> {
        Ok(Game::new(self.player()?, story, self.goals()))
    }
}

/// TOML shape of a [`Goal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GoalConfig {
    Health { minimum: i32 },
    Score { minimum: i32 },
    Gold { minimum: i32 },
    Inventory { items: Vec<String> },
}

impl From<GoalConfig> for Goal {
    fn from(config: GoalConfig) -> Self {
        match config {
            GoalConfig::Health { minimum } => Goal::Health(minimum),
            GoalConfig::Score { minimum } => Goal::Score(minimum),
            GoalConfig::Gold { minimum } => Goal::Gold(minimum),
            GoalConfig::Inventory { items } => Goal::Inventory(items),
        }
    }
}

impl From<Goal> for GoalConfig {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Health(minimum) => GoalConfig::Health { minimum },
            Goal::Score(minimum) => GoalConfig::Score { minimum },
            Goal::Gold(minimum) => GoalConfig::Gold { minimum },
            Goal::Inventory(items) => GoalConfig::Inventory { items },
        }
    }
}
