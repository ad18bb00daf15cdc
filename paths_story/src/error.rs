//! Error types for the story graph, the `.paths` format, and play.

use paths_rules::RulesError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while reading, editing, or playing a story.
///
/// Parse errors carry the 0-based index of the offending line and its text.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The file is too short or does not open with a passage header.
    #[error("malformed story at line {line}: {reason} ({content:?})")]
    MalformedStory {
        line: usize,
        content: String,
        reason: &'static str,
    },

    /// A passage header without a body line.
    #[error("malformed passage at line {line}: {content:?}")]
    MalformedPassage { line: usize, content: String },

    /// A line shaped like a link that does not match `[text](ref)`.
    #[error("malformed link at line {line}: {content:?}")]
    MalformedLink { line: usize, content: String },

    /// An action token with a known code but an unusable value.
    #[error("malformed action at line {line}: {content:?}: {source}")]
    MalformedAction {
        line: usize,
        content: String,
        #[source]
        source: RulesError,
    },

    /// No stored passage has the requested title.
    #[error("no such passage: {0:?}")]
    NoSuchPassage(String),

    /// Story titles must be between 2 and 50 characters.
    #[error("story title must be between 2 and 50 characters: {0:?}")]
    InvalidTitle(String),

    /// A player mutation failed, e.g. an action pushed a stat out of range.
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid game config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize game config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl StoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoryError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check whether this is a player range failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            StoryError::Rules(RulesError::OutOfRangeAttribute { .. })
        )
    }
}
