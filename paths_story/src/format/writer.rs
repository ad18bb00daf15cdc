//! Writer for the `.paths` text format.

use std::fmt;

use crate::story::{Passage, Story};

/// Render a story as `.paths` text.
///
/// Reading the output back yields the same titles, contents, links, and
/// actions. Passage bodies are single lines; a body starting with `::` or a
/// link text containing `](` cannot be represented faithfully.
pub fn write_story(story: &Story) -> String {
    PathsText(story).to_string()
}

/// Display adapter producing `.paths` text.
pub struct PathsText<'a>(pub &'a Story);

impl fmt::Display for PathsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let story = self.0;
        writeln!(f, "{}", story.title())?;
        writeln!(f)?;
        write_passage(f, story.opening_passage())?;
        for passage in story.passages() {
            writeln!(f)?;
            write_passage(f, passage)?;
        }
        Ok(())
    }
}

fn write_passage(f: &mut fmt::Formatter<'_>, passage: &Passage) -> fmt::Result {
    writeln!(f, "::{}", passage.title())?;
    writeln!(f, "{}", passage.content())?;
    for link in passage.links() {
        writeln!(f, "[{}]({})", link.text, link.reference)?;
        if !link.actions.is_empty() {
            let tokens: Vec<String> = link.actions.iter().map(ToString::to_string).collect();
            writeln!(f, "{{{}}}", tokens.join(","))?;
        }
    }
    Ok(())
}
