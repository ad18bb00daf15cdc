//! Goals: victory conditions evaluated against a player.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Player;

/// A pure predicate over player state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Health of at least the given amount.
    Health(i32),
    /// Score of at least the given amount.
    Score(i32),
    /// Gold of at least the given amount.
    Gold(i32),
    /// Every listed item held. Duplicates only require presence.
    Inventory(Vec<String>),
}

impl Goal {
    pub fn inventory<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Goal::Inventory(items.into_iter().map(Into::into).collect())
    }

    /// Check whether the player currently satisfies this goal.
    pub fn is_fulfilled(&self, player: &Player) -> bool {
        match self {
            Goal::Health(minimum) => player.health() >= *minimum,
            Goal::Score(minimum) => player.score() >= *minimum,
            Goal::Gold(minimum) => player.gold() >= *minimum,
            Goal::Inventory(items) => items.iter().all(|item| player.has_item(item)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Health(minimum) => write!(f, "health >= {}", minimum),
            Goal::Score(minimum) => write!(f, "score >= {}", minimum),
            Goal::Gold(minimum) => write!(f, "gold >= {}", minimum),
            Goal::Inventory(items) => write!(f, "items: {}", items.join(", ")),
        }
    }
}
