//! Story module - the passage graph.
//!
//! The graph consists of:
//! - **Passages**: nodes with a title, body text, and outgoing links
//! - **Links**: labeled edges naming their target passage by title
//! - **Story**: the container holding the opening passage and every other passage

mod graph;
mod link;
mod passage;

pub use graph::*;
pub use link::*;
pub use passage::*;
