//! The player whose stats and inventory the story mutates.

pub mod limits;
mod spec;

pub use spec::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Attribute, RulesError, RulesResult};
use limits::*;

/// A player with range-checked stats.
///
/// Every mutator either applies fully or returns
/// [`RulesError::OutOfRangeAttribute`] and leaves the player as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerSpec", into = "PlayerSpec")]
pub struct Player {
    name: String,
    health: i32,
    score: i32,
    gold: i32,
    inventory: Vec<String>,
}

impl Player {
    /// Validate a spec and build a player from it.
    pub fn new(spec: PlayerSpec) -> RulesResult<Self> {
        check_name(&spec.name)?;
        check_range(Attribute::Health, spec.health.into(), 0, MAX_HEALTH)?;
        check_range(Attribute::Score, spec.score.into(), 0, MAX_SCORE - 1)?;
        check_range(Attribute::Gold, spec.gold.into(), 0, MAX_GOLD)?;
        if spec.inventory.len() > MAX_INVENTORY_SIZE {
            return Err(inventory_full(spec.inventory.len()));
        }
        for item in &spec.inventory {
            check_item(item)?;
        }

        Ok(Self {
            name: spec.name,
            health: spec.health,
            score: spec.score,
            gold: spec.gold,
            inventory: spec.inventory,
        })
    }

    /// A player with default stats and the given name.
    pub fn named(name: impl Into<String>) -> RulesResult<Self> {
        Self::new(PlayerSpec::named(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Check whether the inventory holds the item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Check if the player is still standing.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Add `delta` (possibly negative) to health.
    pub fn add_health(&mut self, delta: i32) -> RulesResult<()> {
        self.health = adjusted(Attribute::Health, self.health, delta, MAX_HEALTH)?;
        Ok(())
    }

    /// Add `delta` (possibly negative) to the score.
    pub fn add_score(&mut self, delta: i32) -> RulesResult<()> {
        self.score = adjusted(Attribute::Score, self.score, delta, MAX_SCORE - 1)?;
        Ok(())
    }

    /// Add `delta` (possibly negative) to gold.
    pub fn add_gold(&mut self, delta: i32) -> RulesResult<()> {
        self.gold = adjusted(Attribute::Gold, self.gold, delta, MAX_GOLD)?;
        Ok(())
    }

    /// Put an item in the inventory.
    pub fn add_to_inventory(&mut self, item: impl Into<String>) -> RulesResult<()> {
        let item = item.into();
        check_item(&item)?;
        if self.inventory.len() >= MAX_INVENTORY_SIZE {
            return Err(inventory_full(self.inventory.len() + 1));
        }
        self.inventory.push(item);
        Ok(())
    }
}

impl TryFrom<PlayerSpec> for Player {
    type Error = RulesError;

    fn try_from(spec: PlayerSpec) -> RulesResult<Self> {
        Player::new(spec)
    }
}

impl From<Player> for PlayerSpec {
    fn from(player: Player) -> Self {
        PlayerSpec {
            name: player.name,
            health: player.health,
            score: player.score,
            gold: player.gold,
            inventory: player.inventory,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} {:>3} HP  {:>4} PTS  {:>4} GOLD  INV: {}",
            self.name,
            self.health,
            self.score,
            self.gold,
            self.inventory.join(", ")
        )
    }
}

fn adjusted(attribute: Attribute, current: i32, delta: i32, max: i32) -> RulesResult<i32> {
    let total = i64::from(current) + i64::from(delta);
    check_range(attribute, total, 0, max)?;
    // In range of [0, max], so the narrowing cannot truncate.
    Ok(total as i32)
}

fn check_range(attribute: Attribute, value: i64, min: i32, max: i32) -> RulesResult<()> {
    let (min, max) = (i64::from(min), i64::from(max));
    if value < min || value > max {
        return Err(RulesError::out_of_range(attribute, value, min, max));
    }
    Ok(())
}

fn check_length(attribute: Attribute, text: &str, min: usize, max: usize) -> RulesResult<()> {
    let length = text.chars().count();
    if length < min || length > max {
        return Err(RulesError::out_of_range(
            attribute,
            length as i64,
            min as i64,
            max as i64,
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> RulesResult<()> {
    check_length(Attribute::Name, name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
}

fn check_item(item: &str) -> RulesResult<()> {
    check_length(Attribute::ItemLength, item, MIN_ITEM_LENGTH, MAX_ITEM_LENGTH)
}

fn inventory_full(size: usize) -> RulesError {
    RulesError::out_of_range(
        Attribute::InventorySize,
        size as i64,
        0,
        MAX_INVENTORY_SIZE as i64,
    )
}
