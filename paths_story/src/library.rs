//! Story library - the directory holding `<Title>.paths` files.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoryError, StoryResult};
use crate::format::{parse_story, write_story, FILE_EXTENSION};
use crate::story::Story;

/// A directory of story files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryLibrary {
    root: PathBuf,
}

impl StoryLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Raw file names in the library, sorted.
    ///
    /// A missing or unreadable directory is an empty library, not an error.
    pub fn saved_stories(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Path of the file for a story name, with or without the extension.
    pub fn path_for(&self, name: &str) -> PathBuf {
        let stem = strip_extension(name);
        self.root.join(format!("{}.{}", stem, FILE_EXTENSION))
    }

    /// Read and parse a story.
    ///
    /// `name` may be a title (`"Cave"`) or a listed file name (`"Cave.paths"`).
    pub fn load(&self, name: &str) -> StoryResult<Story> {
        let path = self.path_for(name);
        let text = fs::read_to_string(&path).map_err(|e| StoryError::io(&path, e))?;
        let story = parse_story(&text)?;
        info!(
            "loaded story {:?} from {} ({} passages)",
            story.title(),
            path.display(),
            story.passage_count() + 1
        );
        Ok(story)
    }

    /// Write a story to `<root>/<title>.paths`, creating the directory if
    /// needed. Returns the written path.
    pub fn save(&self, story: &Story) -> StoryResult<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| StoryError::io(&self.root, e))?;
        let path = self.path_for(story.title());
        fs::write(&path, write_story(story)).map_err(|e| StoryError::io(&path, e))?;
        info!("saved story {:?} to {}", story.title(), path.display());
        Ok(path)
    }
}

fn strip_extension(name: &str) -> &str {
    name.strip_suffix(FILE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(name)
}
