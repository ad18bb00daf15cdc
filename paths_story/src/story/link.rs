//! Links - labeled edges between passages.

use paths_rules::Action;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A directed edge to the passage titled `reference`.
///
/// Identity is `(text, reference)`; the attached actions do not take part in
/// equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Label shown to the player.
    pub text: String,

    /// Title of the target passage.
    #[serde(rename = "ref")]
    pub reference: String,

    /// Effects applied, in order, when the link is followed.
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Link {
    /// Create a link without actions.
    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: reference.into(),
            actions: Vec::new(),
        }
    }

    /// A link whose text and reference are both `title`.
    pub fn to_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self::new(title.clone(), title)
    }

    /// Attach an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Attach several actions.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn points_to(&self, title: &str) -> bool {
        self.reference == title
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.reference == other.reference
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.reference.hash(state);
    }
}
