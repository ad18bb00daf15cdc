//! Valid ranges for player attributes.

/// Health a new player starts with unless configured otherwise.
pub const DEFAULT_HEALTH: i32 = 100;
pub const MAX_HEALTH: i32 = 1000;
/// Exclusive: the highest reachable score is `MAX_SCORE - 1`.
pub const MAX_SCORE: i32 = 1000;
pub const MAX_GOLD: i32 = 100_000;
pub const MAX_INVENTORY_SIZE: usize = 10;
pub const MIN_ITEM_LENGTH: usize = 2;
pub const MAX_ITEM_LENGTH: usize = 15;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 15;
