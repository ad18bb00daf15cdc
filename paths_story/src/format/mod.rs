//! The `.paths` text format: one story per file, line oriented.
//!
//! Action codes inside `{...}` lines are a stable contract:
//! `H` health, `I` inventory item, `S` score, `G` gold.

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;

/// File extension of story files, without the dot.
pub const FILE_EXTENSION: &str = "paths";
