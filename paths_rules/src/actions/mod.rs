//! Actions: single effects applied to a player when a link is followed.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RulesError, RulesResult};
use crate::player::Player;

/// One stat or inventory change.
///
/// The single-letter codes are part of the `.paths` text format and must
/// stay stable: `H` health, `S` score, `G` gold, `I` inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Health(i32),
    Score(i32),
    Gold(i32),
    Inventory(String),
}

impl Action {
    pub const HEALTH_CODE: char = 'H';
    pub const SCORE_CODE: char = 'S';
    pub const GOLD_CODE: char = 'G';
    pub const INVENTORY_CODE: char = 'I';

    /// Every code the text format recognises.
    pub const CODES: [char; 4] = [
        Self::HEALTH_CODE,
        Self::INVENTORY_CODE,
        Self::SCORE_CODE,
        Self::GOLD_CODE,
    ];

    /// Build an action from its wire code and raw payload.
    ///
    /// The payload is taken as is: `" 7"` is not a number.
    pub fn from_code(code: char, raw: &str) -> RulesResult<Self> {
        let amount = || {
            raw.parse::<i32>().map_err(|_| RulesError::InvalidValue {
                code,
                raw: raw.to_string(),
            })
        };
        match code {
            Self::HEALTH_CODE => Ok(Action::Health(amount()?)),
            Self::SCORE_CODE => Ok(Action::Score(amount()?)),
            Self::GOLD_CODE => Ok(Action::Gold(amount()?)),
            Self::INVENTORY_CODE => Ok(Action::Inventory(raw.to_string())),
            other => Err(RulesError::UnknownCode(other)),
        }
    }

    /// The wire code of this action.
    pub fn code(&self) -> char {
        match self {
            Action::Health(_) => Self::HEALTH_CODE,
            Action::Score(_) => Self::SCORE_CODE,
            Action::Gold(_) => Self::GOLD_CODE,
            Action::Inventory(_) => Self::INVENTORY_CODE,
        }
    }

    /// Apply the effect to the player.
    ///
    /// Fails with the same range error as the player mutator it calls; the
    /// player is untouched in that case.
    pub fn execute(&self, player: &mut Player) -> RulesResult<()> {
        debug!("└─ action: {} on {}", self, player.name());
        match self {
            Action::Health(delta) => player.add_health(*delta),
            Action::Score(delta) => player.add_score(*delta),
            Action::Gold(delta) => player.add_gold(*delta),
            Action::Inventory(item) => player.add_to_inventory(item.as_str()),
        }
    }
}

/// Renders the `.paths` token, e.g. `H:10` or `I:Sword`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Health(v) | Action::Score(v) | Action::Gold(v) => {
                write!(f, "{}:{}", self.code(), v)
            }
            Action::Inventory(item) => write!(f, "{}:{}", self.code(), item),
        }
    }
}

/// Run actions in order, stopping at the first failure.
///
/// Actions before the failing one stay applied.
pub fn execute_all<'a, I>(actions: I, player: &mut Player) -> RulesResult<()>
where
    I: IntoIterator<Item = &'a Action>,
{
    for action in actions {
        action.execute(player)?;
    }
    Ok(())
}
