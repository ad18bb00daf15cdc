//! Story - the passage graph and its integrity rules.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{Link, Passage};
use crate::error::{StoryError, StoryResult};

pub const MIN_TITLE_LENGTH: usize = 2;
pub const MAX_TITLE_LENGTH: usize = 50;

/// Minimum Jaro-Winkler similarity for a title to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A branching story.
///
/// The opening passage is the implicit root and is never part of the stored
/// passages. Stored passages are keyed by title and keep insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoryRecord", into = "StoryRecord")]
pub struct Story {
    title: String,
    opening_passage: Passage,

    /// Stored passages in insertion order.
    passages: Vec<Passage>,

    /// Index: title -> position in `passages`.
    by_title: HashMap<String, usize>,
}

impl Story {
    /// Create a story with no passages besides the opening one.
    pub fn new(title: impl Into<String>, opening_passage: Passage) -> StoryResult<Self> {
        let title = title.into();
        let length = title.chars().count();
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length) {
            return Err(StoryError::InvalidTitle(title));
        }
        Ok(Self {
            title,
            opening_passage,
            passages: Vec::new(),
            by_title: HashMap::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn opening_passage(&self) -> &Passage {
        &self.opening_passage
    }

    pub fn opening_passage_mut(&mut self) -> &mut Passage {
        &mut self.opening_passage
    }

    /// Store a passage.
    ///
    /// Returns `false` without touching the story if a passage with the same
    /// title is already stored.
    pub fn add_passage(&mut self, passage: Passage) -> bool {
        if self.by_title.contains_key(passage.title()) {
            debug!("duplicate passage {:?} ignored", passage.title());
            return false;
        }
        self.by_title
            .insert(passage.title().to_string(), self.passages.len());
        self.passages.push(passage);
        true
    }

    /// Get the stored passage `link` points to.
    ///
    /// The opening passage is not stored and therefore not found here.
    pub fn get_passage(&self, link: &Link) -> StoryResult<&Passage> {
        self.passage(&link.reference)
            .ok_or_else(|| StoryError::NoSuchPassage(link.reference.clone()))
    }

    /// Get mutable access to the stored passage `link` points to.
    pub fn get_passage_mut(&mut self, link: &Link) -> StoryResult<&mut Passage> {
        match self.by_title.get(&link.reference) {
            Some(&index) => Ok(&mut self.passages[index]),
            None => Err(StoryError::NoSuchPassage(link.reference.clone())),
        }
    }

    /// Get a stored passage by title.
    pub fn passage(&self, title: &str) -> Option<&Passage> {
        self.by_title.get(title).map(|&index| &self.passages[index])
    }

    /// Check if a passage with this title is stored.
    pub fn contains_passage(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// All stored passages, in insertion order.
    pub fn passages(&self) -> impl Iterator<Item = &Passage> {
        self.passages.iter()
    }

    /// Get the number of stored passages.
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// Remove the stored passage `link` points to.
    ///
    /// The passage is kept, and `false` returned, while any stored passage
    /// still links to it. Links from the opening passage are not considered.
    pub fn remove_passage(&mut self, link: &Link) -> StoryResult<bool> {
        let title = link.reference.as_str();
        let index = *self
            .by_title
            .get(title)
            .ok_or_else(|| StoryError::NoSuchPassage(title.to_string()))?;

        if self.passages.iter().any(|passage| passage.links_to(title)) {
            warn!("passage {:?} is still referenced and was not removed", title);
            return Ok(false);
        }

        self.passages.remove(index);
        self.reindex();
        Ok(true)
    }

    /// Links whose target is neither a stored passage nor the opening passage.
    ///
    /// Duplicates (same text and reference) are reported once, in the order
    /// they are first found.
    pub fn broken_links(&self) -> Vec<Link> {
        let mut broken: Vec<Link> = Vec::new();
        for link in self.passages.iter().flat_map(|passage| passage.links()) {
            if self.is_broken(link) && !broken.contains(link) {
                broken.push(link.clone());
            }
        }
        broken
    }

    /// Delete every link targeting `title`, from the opening passage and
    /// every stored passage.
    pub fn remove_all_links_to_passage(&mut self, title: &str) {
        let mut removed = self.opening_passage.remove_links_to(title);
        for passage in &mut self.passages {
            removed += passage.remove_links_to(title);
        }
        debug!("removed {} link(s) to {:?}", removed, title);
    }

    /// Find the passage title closest to a (broken) reference.
    pub fn suggest_passage(&self, reference: &str) -> Option<&str> {
        std::iter::once(self.opening_passage.title())
            .chain(self.passages.iter().map(|passage| passage.title()))
            .map(|title| (strsim::jaro_winkler(reference, title), title))
            .filter(|(confidence, _)| *confidence > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, title)| title)
    }

    fn is_broken(&self, link: &Link) -> bool {
        !self.contains_passage(&link.reference)
            && !link.points_to(self.opening_passage.title())
    }

    fn reindex(&mut self) {
        self.by_title = self
            .passages
            .iter()
            .enumerate()
            .map(|(index, passage)| (passage.title().to_string(), index))
            .collect();
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Opening Passage:")?;
        writeln!(f, "{}", self.opening_passage.content())?;
        writeln!(f, "Passages:")?;
        let mut sorted: Vec<&Passage> = self.passages.iter().collect();
        sorted.sort_by(|a, b| a.title().cmp(b.title()));
        for passage in sorted {
            writeln!(f, "- {}: {}", passage.title(), passage.content())?;
        }
        Ok(())
    }
}

/// Serialized shape of a [`Story`]; the title index is rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoryRecord {
    title: String,
    opening_passage: Passage,
    #[serde(default)]
    passages: Vec<Passage>,
}

impl TryFrom<StoryRecord> for Story {
    type Error = StoryError;

    fn try_from(record: StoryRecord) -> StoryResult<Self> {
        let mut story = Story::new(record.title, record.opening_passage)?;
        for passage in record.passages {
            story.add_passage(passage);
        }
        Ok(story)
    }
}

impl From<Story> for StoryRecord {
    fn from(story: Story) -> Self {
        StoryRecord {
            title: story.title,
            opening_passage: story.opening_passage,
            passages: story.passages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paths_rules::Action;

    fn story() -> Story {
        let opening = Passage::new("Opening", "You wake up.").with_link(Link::new("Get up", "Hall"));
        Story::new("Test Story", opening).unwrap()
    }

    #[test]
    fn test_title_length() {
        assert!(Story::new("T", Passage::new("Opening", "")).is_err());
        assert!(Story::new("ab", Passage::new("Opening", "")).is_ok());
        assert!(Story::new("x".repeat(50), Passage::new("Opening", "")).is_ok());
        assert!(matches!(
            Story::new("x".repeat(51), Passage::new("Opening", "")),
            Err(StoryError::InvalidTitle(_))
        ));
    }

    #[test]
    fn test_add_and_get_passage() {
        let mut story = story();
        let hall = Passage::new("Hall", "A long hall.");

        assert!(story.add_passage(hall.clone()));

        let found = story.get_passage(&Link::to_title("Hall")).unwrap();
        assert_eq!(found, &hall);
        assert_eq!(story.passage_count(), 1);
    }

    #[test]
    fn test_get_passage_uses_reference() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A long hall."));
        let found = story.get_passage(&Link::new("Walk on", "Hall")).unwrap();
        assert_eq!(found.title(), "Hall");
    }

    #[test]
    fn test_duplicate_passage_is_ignored() {
        let mut story = story();
        assert!(story.add_passage(Passage::new("Hall", "First.")));
        assert!(!story.add_passage(Passage::new("Hall", "Second.")));

        assert_eq!(story.passage_count(), 1);
        assert_eq!(story.passage("Hall").unwrap().content(), "First.");
    }

    #[test]
    fn test_opening_passage_is_not_stored() {
        let story = story();
        assert_eq!(story.passage_count(), 0);
        assert!(matches!(
            story.get_passage(&Link::to_title("Opening")),
            Err(StoryError::NoSuchPassage(title)) if title == "Opening"
        ));
    }

    #[test]
    fn test_edit_passages_in_place() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A long hall."));

        story
            .get_passage_mut(&Link::to_title("Hall"))
            .unwrap()
            .add_link(Link::new("Down", "Cellar"));
        story
            .opening_passage_mut()
            .add_link(Link::new("Jump", "Window"));

        assert!(story.passage("Hall").unwrap().links_to("Cellar"));
        assert_eq!(story.opening_passage().links().len(), 2);
        // Only stored passages are scanned for broken links.
        assert_eq!(story.broken_links(), vec![Link::new("Down", "Cellar")]);

        assert!(matches!(
            story.get_passage_mut(&Link::to_title("Cellar")),
            Err(StoryError::NoSuchPassage(title)) if title == "Cellar"
        ));
    }

    #[test]
    fn test_get_missing_passage() {
        let story = story();
        assert!(matches!(
            story.get_passage(&Link::to_title("Nowhere")),
            Err(StoryError::NoSuchPassage(_))
        ));
    }

    #[test]
    fn test_remove_referenced_passage_is_refused() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A hall.").with_link(Link::new("Down", "Cellar")));
        story.add_passage(Passage::new("Cellar", "Dark."));

        assert!(!story.remove_passage(&Link::to_title("Cellar")).unwrap());
        assert_eq!(story.passage_count(), 2);
        assert!(story.contains_passage("Cellar"));
    }

    #[test]
    fn test_remove_unreferenced_passage() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A hall."));
        story.add_passage(Passage::new("Attic", "Dusty."));
        story.add_passage(Passage::new("Cellar", "Dark."));

        assert!(story.remove_passage(&Link::to_title("Attic")).unwrap());
        assert!(story.get_passage(&Link::to_title("Attic")).is_err());

        // Remaining passages are still found after the index is rebuilt.
        assert_eq!(story.passage("Cellar").unwrap().content(), "Dark.");
        let titles: Vec<_> = story.passages().map(|p| p.title()).collect();
        assert_eq!(titles, ["Hall", "Cellar"]);
    }

    #[test]
    fn test_remove_ignores_links_from_opening_passage() {
        // The opening passage links to "Hall", yet removal is allowed.
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A hall."));
        assert!(story.remove_passage(&Link::to_title("Hall")).unwrap());
    }

    #[test]
    fn test_remove_missing_passage() {
        let mut story = story();
        assert!(matches!(
            story.remove_passage(&Link::to_title("Nowhere")),
            Err(StoryError::NoSuchPassage(_))
        ));
    }

    #[test]
    fn test_broken_links() {
        let mut story = story();
        story.add_passage(
            Passage::new("Hall", "A hall.")
                .with_link(Link::new("Back", "Opening"))
                .with_link(Link::new("Down", "Cellar"))
                .with_link(Link::new("Up", "Attic")),
        );
        story.add_passage(
            Passage::new("Kitchen", "Pots.")
                .with_link(Link::new("Up", "Attic").with_action(Action::Score(1)))
                .with_link(Link::new("Hall", "Hall")),
        );

        let broken = story.broken_links();
        assert_eq!(broken, vec![Link::new("Down", "Cellar"), Link::new("Up", "Attic")]);
    }

    #[test]
    fn test_broken_links_skip_opening_title() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A hall.").with_link(Link::new("Back", "Opening")));
        assert!(story.broken_links().is_empty());
    }

    #[test]
    fn test_remove_all_links_to_passage() {
        let mut story = story();
        story.add_passage(
            Passage::new("Kitchen", "Pots.")
                .with_link(Link::new("Hall", "Hall"))
                .with_link(Link::new("Out", "Garden")),
        );
        story.add_passage(Passage::new("Hall", "A hall."));

        story.remove_all_links_to_passage("Hall");

        assert!(!story.opening_passage().has_links());
        let kitchen = story.passage("Kitchen").unwrap();
        assert_eq!(kitchen.links(), &[Link::new("Out", "Garden")]);

        assert!(story.remove_passage(&Link::to_title("Hall")).unwrap());
    }

    #[test]
    fn test_suggest_passage() {
        let mut story = story();
        story.add_passage(Passage::new("Forest", "Trees."));
        story.add_passage(Passage::new("Cave", "Dark."));

        assert_eq!(story.suggest_passage("Forrest"), Some("Forest"));
        assert_eq!(story.suggest_passage("Openng"), Some("Opening"));
        assert_eq!(story.suggest_passage("Spaceship"), None);
    }

    #[test]
    fn test_display_sorts_passages() {
        let mut story = story();
        story.add_passage(Passage::new("Zoo", "Animals."));
        story.add_passage(Passage::new("Attic", "Dusty."));

        let text = story.to_string();
        assert_eq!(
            text,
            "Title: Test Story\nOpening Passage:\nYou wake up.\nPassages:\n- Attic: Dusty.\n- Zoo: Animals.\n"
        );
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let mut story = story();
        story.add_passage(Passage::new("Hall", "A hall.").with_link(Link::new("Back", "Opening")));

        let json = serde_json::to_string(&story).unwrap();
        let loaded: Story = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.title(), "Test Story");
        assert_eq!(loaded.opening_passage(), story.opening_passage());
        assert_eq!(loaded.passage("Hall"), story.passage("Hall"));
    }
}
