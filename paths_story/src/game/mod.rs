//! Game - one playthrough of a story.
//!
//! A game couples a [`Player`], a [`Story`] and the [`Goal`]s to reach. It
//! tracks the current passage and applies link actions as the player moves.

use log::{debug, info};
use paths_rules::{execute_all, Goal, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::StoryResult;
use crate::story::{Link, Passage, Story};

/// Handle identifying one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal state for a story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    player: Player,
    story: Story,
    goals: Vec<Goal>,

    /// Title of the passage the player is on; `None` before [`Game::begin`].
    current: Option<String>,
}

impl Game {
    pub fn new(player: Player, story: Story, goals: Vec<Goal>) -> Self {
        Self {
            id: GameId::new(),
            player,
            story,
            goals,
            current: None,
        }
    }

    /// Move to the opening passage.
    pub fn begin(&mut self) -> &Passage {
        let opening = self.story.opening_passage();
        info!(
            "game {} begins {:?} at {:?}",
            self.id,
            self.story.title(),
            opening.title()
        );
        self.current = Some(opening.title().to_string());
        opening
    }

    /// Follow `link`.
    ///
    /// The target is looked up before anything changes. The link's actions
    /// then run in order; if one fails the error is returned and the player
    /// stays where they were, though earlier actions remain applied.
    pub fn go(&mut self, link: &Link) -> StoryResult<&Passage> {
        let target = Self::resolve(&self.story, link)?;
        execute_all(&link.actions, &mut self.player)?;

        info!("game {} goes {:?} -> {:?}", self.id, link.text, target.title());
        debug!("└─ player: {}", self.player);
        self.current = Some(target.title().to_string());
        Ok(target)
    }

    fn resolve<'a>(story: &'a Story, link: &Link) -> StoryResult<&'a Passage> {
        let opening = story.opening_passage();
        if link.reference == opening.title() {
            Ok(opening)
        } else {
            story.get_passage(link)
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The passage the player is on, if the game has begun.
    pub fn current_passage(&self) -> Option<&Passage> {
        let title = self.current.as_deref()?;
        let opening = self.story.opening_passage();
        if title == opening.title() {
            Some(opening)
        } else {
            self.story.passage(title)
        }
    }

    pub fn fulfilled_goals(&self) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.is_fulfilled(&self.player))
            .collect()
    }

    pub fn all_goals_fulfilled(&self) -> bool {
        self.goals.iter().all(|goal| goal.is_fulfilled(&self.player))
    }

    /// True when the current passage offers no way on.
    pub fn is_dead_end(&self) -> bool {
        self.current_passage()
            .is_some_and(|passage| !passage.has_links())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryError;
    use paths_rules::Action;

    fn story() -> Story {
        let opening = Passage::new("Gate", "A locked gate.")
            .with_link(Link::new("Climb", "Garden").with_action(Action::Score(10)))
            .with_link(Link::new("Walk away", "Road"));
        let mut story = Story::new("Garden Tale", opening).unwrap();
        story.add_passage(
            Passage::new("Garden", "Roses everywhere.")
                .with_link(Link::new("Back over", "Gate").with_action(Action::Health(-5))),
        );
        story.add_passage(Passage::new("Road", "The road goes on."));
        story
    }

    fn game() -> Game {
        Game::new(
            Player::named("Ada").unwrap(),
            story(),
            vec![Goal::Score(10), Goal::inventory(["Rose"])],
        )
    }

    #[test]
    fn test_begin_is_idempotent() {
        let mut game = game();
        assert!(game.current_passage().is_none());

        assert_eq!(game.begin().title(), "Gate");
        assert_eq!(game.begin().title(), "Gate");
        assert_eq!(game.current_passage().unwrap().title(), "Gate");
    }

    #[test]
    fn test_go_runs_actions() {
        let mut game = game();
        game.begin();

        let link = game.story().opening_passage().links()[0].clone();
        let passage = game.go(&link).unwrap();
        assert_eq!(passage.title(), "Garden");
        assert_eq!(game.player().score(), 10);
        assert_eq!(game.current_passage().unwrap().title(), "Garden");
    }

    #[test]
    fn test_go_back_to_opening() {
        let mut game = game();
        game.begin();
        game.go(&Link::to_title("Garden")).unwrap();

        let back = game.story().passage("Garden").unwrap().links()[0].clone();
        assert_eq!(game.go(&back).unwrap().title(), "Gate");
        assert_eq!(game.player().health(), 95);
    }

    #[test]
    fn test_go_unknown_reference() {
        let mut game = game();
        game.begin();

        let err = game.go(&Link::new("Dig", "Tunnel")).unwrap_err();
        assert!(matches!(err, StoryError::NoSuchPassage(ref title) if title == "Tunnel"));
        assert_eq!(game.current_passage().unwrap().title(), "Gate");
    }

    #[test]
    fn test_unknown_reference_runs_no_actions() {
        let mut game = game();
        game.begin();

        let link = Link::new("Dig", "Tunnel").with_action(Action::Gold(5));
        assert!(game.go(&link).is_err());
        assert_eq!(game.player().gold(), 0);
    }

    #[test]
    fn test_failed_action_keeps_position() {
        let mut game = game();
        game.begin();

        let link = Link::new("Rob", "Road")
            .with_action(Action::Health(20))
            .with_action(Action::Gold(999_999));
        let err = game.go(&link).unwrap_err();

        assert!(err.is_out_of_range());
        assert_eq!(game.player().health(), 120);
        assert_eq!(game.player().gold(), 0);
        assert_eq!(game.current_passage().unwrap().title(), "Gate");
    }

    #[test]
    fn test_goals() {
        let mut game = game();
        game.begin();
        assert!(game.fulfilled_goals().is_empty());
        assert!(!game.all_goals_fulfilled());

        let link = game.story().opening_passage().links()[0].clone();
        game.go(&link).unwrap();
        assert_eq!(game.fulfilled_goals(), vec![&Goal::Score(10)]);

        game.player_mut().add_to_inventory("Rose").unwrap();
        assert!(game.all_goals_fulfilled());
    }

    #[test]
    fn test_dead_end() {
        let mut game = game();
        assert!(!game.is_dead_end());
        game.begin();
        assert!(!game.is_dead_end());

        game.go(&Link::to_title("Road")).unwrap();
        assert!(game.is_dead_end());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(game().id(), game().id());
        assert_eq!(GameId(Uuid::nil()).to_string(), Uuid::nil().to_string());
    }
}
