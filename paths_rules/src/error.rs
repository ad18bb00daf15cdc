//! Error types for player mutation and the action/goal factories.

use std::fmt;

use thiserror::Error;

/// Result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;

/// Player attributes that carry a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Name,
    Health,
    Score,
    Gold,
    InventorySize,
    ItemLength,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Name => "name length",
            Attribute::Health => "health",
            Attribute::Score => "score",
            Attribute::Gold => "gold",
            Attribute::InventorySize => "inventory size",
            Attribute::ItemLength => "item length",
        };
        f.write_str(name)
    }
}

/// Errors raised by the rules crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A mutation or construction would leave an attribute outside its range.
    #[error("{attribute} must be between {min} and {max}, got {value}")]
    OutOfRangeAttribute {
        attribute: Attribute,
        /// The rejected value, widened so overflowing sums are still reported.
        value: i64,
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// The letter does not name an action type.
    #[error("unknown action code: {0:?}")]
    UnknownCode(char),

    /// The payload of a numeric action is not an integer.
    #[error("invalid value for action {code:?}: {raw:?}")]
    InvalidValue { code: char, raw: String },
}

impl RulesError {
    pub(crate) fn out_of_range(attribute: Attribute, value: i64, min: i64, max: i64) -> Self {
        RulesError::OutOfRangeAttribute {
            attribute,
            value,
            min,
            max,
        }
    }
}
