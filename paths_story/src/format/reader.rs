//! Reader for the `.paths` text format.
//!
//! ```text
//! Story title
//!
//! ::Opening passage
//! Body of the opening passage
//! [Link text](Target title)
//! {H:10,G:5}
//!
//! ::Target title
//! Body of the target
//! ```
//!
//! Lines are separated by `\n`; a trailing `\r` is dropped so files written on
//! Windows read the same. A final line terminator does not start a new line.

use log::{debug, warn};
use std::str::FromStr;

use paths_rules::Action;

use crate::error::{StoryError, StoryResult};
use crate::story::{Link, Passage, Story};

const HEADER_PREFIX: &str = "::";

/// Parse a complete `.paths` document.
///
/// Either the whole story is returned or the first error found; a partially
/// built story is never handed out.
pub fn parse_story(input: &str) -> StoryResult<Story> {
    let lines = split_lines(input);
    if lines.len() < 4 {
        return Err(StoryError::MalformedStory {
            line: 0,
            content: lines.first().copied().unwrap_or_default().to_string(),
            reason: "a story needs at least 4 lines",
        });
    }

    if header_title(lines[2]).is_none() {
        return Err(StoryError::MalformedStory {
            line: 2,
            content: lines[2].to_string(),
            reason: "line 2 must open the first passage with '::'",
        });
    }
    let opening = read_passage(&lines, 2)?;
    let mut story = Story::new(lines[0], opening).map_err(|_| StoryError::MalformedStory {
        line: 0,
        content: lines[0].to_string(),
        reason: "the story title must be between 2 and 50 characters",
    })?;

    for index in 4..lines.len() {
        if header_title(lines[index]).is_some() {
            let passage = read_passage(&lines, index)?;
            debug!(
                "passage {:?} at line {} with {} link(s)",
                passage.title(),
                index,
                passage.links().len()
            );
            story.add_passage(passage);
        }
    }

    Ok(story)
}

impl FromStr for Story {
    type Err = StoryError;

    fn from_str(input: &str) -> StoryResult<Self> {
        parse_story(input)
    }
}

fn split_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// `^::(.+)$`
fn header_title(line: &str) -> Option<&str> {
    line.strip_prefix(HEADER_PREFIX)
        .filter(|title| !title.is_empty())
}

/// `^\{(.+)\}$`
fn actions_body(line: &str) -> Option<&str> {
    line.strip_prefix('{')?
        .strip_suffix('}')
        .filter(|body| !body.is_empty())
}

/// Lines shaped like a link must match [`link_parts`] or the file is rejected.
fn is_link_like(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(')')
}

/// `^\[(.+)\]\((.+)\)$`, with the text capture as long as possible.
fn link_parts(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix('[')?.strip_suffix(')')?;
    inner
        .rmatch_indices("](")
        .map(|(at, _)| at)
        .find(|&at| at > 0 && at + 2 < inner.len())
        .map(|at| (&inner[..at], &inner[at + 2..]))
}

fn read_passage(lines: &[&str], index: usize) -> StoryResult<Passage> {
    let malformed = || StoryError::MalformedPassage {
        line: index,
        content: lines[index].to_string(),
    };
    let title = header_title(lines[index]).ok_or_else(malformed)?;
    let content = lines.get(index + 1).ok_or_else(malformed)?;

    let mut passage = Passage::new(title, *content);
    read_links(lines, index + 2, &mut passage)?;
    Ok(passage)
}

fn read_links(lines: &[&str], start: usize, passage: &mut Passage) -> StoryResult<()> {
    let mut index = start;
    while let Some(&line) = lines.get(index) {
        if line.is_empty() || header_title(line).is_some() || actions_body(line).is_some() {
            break;
        }
        index += 1;
        if !is_link_like(line) {
            continue;
        }

        let (text, reference) = link_parts(line).ok_or_else(|| StoryError::MalformedLink {
            line: index - 1,
            content: line.to_string(),
        })?;
        let mut link = Link::new(text, reference);

        if let Some(body) = lines.get(index).and_then(|next| actions_body(next)) {
            read_actions(&mut link, body, index, lines[index])?;
            index += 1;
        }
        passage.add_link(link);
    }
    Ok(())
}

fn read_actions(link: &mut Link, body: &str, line: usize, content: &str) -> StoryResult<()> {
    for token in body.split(',') {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(code), Some(':')) if Action::CODES.contains(&code) => {
                let action = Action::from_code(code, &token[2..]).map_err(|source| {
                    StoryError::MalformedAction {
                        line,
                        content: content.to_string(),
                        source,
                    }
                })?;
                link.add_action(action);
            }
            // Unknown codes are dropped rather than rejected.
            _ => warn!("skipping action token {:?} at line {}", token, line),
        }
    }
    Ok(())
}
