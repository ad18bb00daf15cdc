//! Plain configuration struct a [`Player`](super::Player) is built from.

use serde::{Deserialize, Serialize};

use super::limits::DEFAULT_HEALTH;

/// All fields of a player, unchecked.
///
/// Pass it to [`Player::new`](super::Player::new) to run the range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSpec {
    pub name: String,
    pub health: i32,
    pub score: i32,
    pub gold: i32,
    pub inventory: Vec<String>,
}

impl PlayerSpec {
    /// A default spec with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }

    /// Append items to the starting inventory.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inventory.extend(items.into_iter().map(Into::into));
        self
    }
}

impl Default for PlayerSpec {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            health: DEFAULT_HEALTH,
            score: 0,
            gold: 0,
            inventory: Vec::new(),
        }
    }
}
