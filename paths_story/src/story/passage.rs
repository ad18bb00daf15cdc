//! Passages - the nodes of a story.

use serde::{Deserialize, Serialize};

use super::Link;

/// A titled block of text with outgoing links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    title: String,
    content: String,
    #[serde(default)]
    links: Vec<Link>,
}

impl Passage {
    /// Create a passage without links.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            links: Vec::new(),
        }
    }

    /// Add a link to this passage.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Check if the passage has any way out.
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Check if any link of this passage targets `title`.
    pub fn links_to(&self, title: &str) -> bool {
        self.links.iter().any(|link| link.points_to(title))
    }

    /// Drop every link targeting `title`, returning how many were removed.
    pub fn remove_links_to(&mut self, title: &str) -> usize {
        let before = self.links.len();
        self.links.retain(|link| !link.points_to(title));
        before - self.links.len()
    }
}
