//! # Paths Rules
//!
//! Player state and the rules that change or judge it. This crate knows
//! nothing about stories or the `.paths` format; it only defines what a link
//! can do to a player (actions) and what a player must reach to win (goals).

pub mod actions;
pub mod error;
pub mod goals;
pub mod player;

pub use actions::*;
pub use error::*;
pub use goals::*;
pub use player::*;
