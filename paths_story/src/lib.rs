//! # Paths Story
//!
//! Branching stories for the Paths engine. A story is a graph of passages
//! joined by links; following a link can change the player through the
//! actions it carries.
//!
//! ## Core Components
//!
//! - **story**: The passage graph and its integrity rules
//! - **format**: Reader and writer for the `.paths` text format
//! - **library**: A directory of saved `.paths` files
//! - **game**: Traversal of a story by one player towards a set of goals
//! - **config**: TOML settings for starting a game
//!
//! Player state, actions and goals live in `paths_rules`. The crate never
//! prints; diagnostics go through the `log` facade.

pub mod config;
pub mod error;
pub mod format;
pub mod game;
pub mod library;
pub mod story;

pub use config::*;
pub use error::*;
pub use format::*;
pub use game::*;
pub use library::*;
pub use story::*;
