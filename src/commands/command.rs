//! Parsed command values.
//!
//! Every line typed by the user ends up as exactly one [`Command`]. Parse
//! failures are not errors but the [`Command::Incorrect`] variant, which only
//! carries the feedback to display.

use std::collections::HashSet;
use std::fmt;

use crate::tags::Tag;

/// Kind of roster entry a command targets.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Entity {
    /// A player of the league
    Player,
    /// A team of the league
    Team,
    /// A scheduled or played match
    Match,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Player => "player",
            Entity::Team => "team",
            Entity::Match => "match",
        };
        f.write_str(name)
    }
}

/// Fields of a fully described player (`add`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub age: String,
    pub salary: String,
    pub goals_scored: String,
    pub goals_assisted: String,
    pub team: String,
    pub country: String,
    pub jersey_number: String,
    pub appearance: String,
    pub health_status: String,
    pub tags: HashSet<Tag>,
}

/// Fields of a player added with the reduced `addfast` form.
///
/// Goals, appearances and health status are left for the store to default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayerFast {
    pub name: String,
    pub position: String,
    pub age: String,
    pub salary: String,
    pub team: String,
    pub country: String,
    pub jersey_number: String,
    pub tags: HashSet<Tag>,
}

/// Fields of a new team (`addteam`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub country: String,
    pub sponsor: String,
    pub tags: HashSet<Tag>,
}

/// Changes requested on an existing team (`editteam`).
///
/// `None` means the field was not supplied and must be left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEdit {
    /// 1-based display index of the team to edit
    pub index: usize,
    pub name: Option<String>,
    pub country: Option<String>,
    pub sponsor: Option<String>,
    pub tags: HashSet<Tag>,
}

/// Fields of a new match (`addmatch`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub date: String,
    pub home: String,
    pub away: String,
    pub tags: HashSet<Tag>,
}

/// A parsed user command.
///
/// Non-sentinel variants only ever hold fields that matched their grammar and
/// passed validation. Values are immutable once built and compare by value,
/// so parsing the same line twice yields two equal commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a fully described player
    AddPlayer(NewPlayer),
    /// Add a player with the reduced field set
    AddPlayerFast(NewPlayerFast),
    /// Add a team
    AddTeam(NewTeam),
    /// Edit some fields of a listed team
    EditTeam(TeamEdit),
    /// Add a match
    AddMatch(NewMatch),
    /// Delete the entry at a display index
    Delete { entity: Entity, index: usize },
    /// Remove every entry of a kind
    Clear(Entity),
    /// Find entries matching any of the keywords
    Find {
        entity: Entity,
        keywords: HashSet<String>,
    },
    /// List every entry of a kind
    List(Entity),
    /// List the finances of every team
    ListFinance,
    /// Show every detail of the player at a display index
    ViewAll { index: usize },
    /// Show the finances of the team at a display index
    Finance { index: usize },
    /// Sort the player list
    Sort,
    /// Show the help listing
    Help,
    /// Leave the program
    Exit,
    /// The line could not be parsed
    ///
    /// # Fields
    ///
    /// * `String` - Feedback to show to the user
    Incorrect(String),
}

impl Command {
    /// Returns the feedback of an [`Command::Incorrect`] value.
    pub fn feedback(&self) -> Option<&str> {
        match self {
            Command::Incorrect(feedback) => Some(feedback.as_str()),
            _ => None,
        }
    }

    /// Whether this is the [`Command::Incorrect`] sentinel.
    pub fn is_incorrect(&self) -> bool {
        matches!(self, Command::Incorrect(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_only_on_incorrect() {
        let incorrect = Command::Incorrect("Invalid command format! \nusage".to_owned());
        assert_eq!(incorrect.feedback(), Some("Invalid command format! \nusage"));
        assert!(incorrect.is_incorrect());

        assert_eq!(Command::Help.feedback(), None);
        assert!(!Command::List(Entity::Team).is_incorrect());
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(Entity::Player.to_string(), "player");
        assert_eq!(Entity::Team.to_string(), "team");
        assert_eq!(Entity::Match.to_string(), "match");
    }
}
