//! Command dispatcher.
//!
//! This module provides the [`CommandParser`] struct, the entry point turning a
//! raw input line into a [`Command`]. It splits the line into a keyword and an
//! argument string, then routes the arguments through a static keyword table.
//!
//! # Flow
//!
//! ```text
//! input line → (keyword, arguments) → route → extractor → Command
//! ```
//!
//! # Examples
//!
//! ```
//! use roster::commands::{Command, CommandParser, Entity};
//!
//! let parser = CommandParser::new();
//!
//! let command = parser.parse("delete 3");
//! assert_eq!(command, Command::Delete { entity: Entity::Player, index: 3 });
//!
//! let command = parser.parse("delete abc");
//! assert!(command.is_incorrect());
//! ```

use log::{debug, warn};
use serde::Deserialize;

use crate::{
    commands::{
        command::{Command, Entity},
        extractors::{Extractor, fixture, indexed, player, search, team},
        grammar::BASIC_COMMAND,
        usage::{self, HELP_USAGE, format_invalid_format, format_unknown_command},
    },
    tags::{StrictTagValidator, TagValidator},
};

/// What a keyword leads to.
enum Route {
    /// Run an extractor on the argument string
    Extract(Extractor),
    /// Return a fixed command, ignoring any argument
    Fixed(Command),
}

/// Keyword table. Lookups are exact and case-sensitive.
static ROUTES: [(&str, Route); 23] = [
    (usage::ADD_PLAYER, Route::Extract(player::prepare_add_player)),
    (usage::ADD_PLAYER_FAST, Route::Extract(player::prepare_add_player_fast)),
    (usage::ADD_TEAM, Route::Extract(team::prepare_add_team)),
    (usage::EDIT_TEAM, Route::Extract(team::prepare_edit_team)),
    (usage::ADD_MATCH, Route::Extract(fixture::prepare_add_match)),
    (usage::DELETE_PLAYER, Route::Extract(indexed::prepare_delete_player)),
    (usage::DELETE_TEAM, Route::Extract(indexed::prepare_delete_team)),
    (usage::DELETE_MATCH, Route::Extract(indexed::prepare_delete_match)),
    (usage::VIEW_ALL, Route::Extract(indexed::prepare_view_all)),
    (usage::FINANCE, Route::Extract(indexed::prepare_finance)),
    (usage::FIND_PLAYER, Route::Extract(search::prepare_find_player)),
    (usage::FIND_TEAM, Route::Extract(search::prepare_find_team)),
    (usage::FIND_MATCH, Route::Extract(search::prepare_find_match)),
    (usage::CLEAR_PLAYERS, Route::Fixed(Command::Clear(Entity::Player))),
    (usage::CLEAR_TEAMS, Route::Fixed(Command::Clear(Entity::Team))),
    (usage::CLEAR_MATCHES, Route::Fixed(Command::Clear(Entity::Match))),
    (usage::LIST_PLAYERS, Route::Fixed(Command::List(Entity::Player))),
    (usage::LIST_TEAMS, Route::Fixed(Command::List(Entity::Team))),
    (usage::LIST_MATCHES, Route::Fixed(Command::List(Entity::Match))),
    (usage::LIST_FINANCES, Route::Fixed(Command::ListFinance)),
    (usage::SORT, Route::Fixed(Command::Sort)),
    (usage::EXIT, Route::Fixed(Command::Exit)),
    (usage::HELP, Route::Fixed(Command::Help)),
];

/// How the parser treats a keyword missing from the table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyword {
    /// Answer with [`Command::Help`], as if `help` had been typed
    #[default]
    Help,
    /// Answer with [`Command::Incorrect`] naming the help command
    Reject,
}

/// Parser turning input lines into commands.
///
/// The parser holds no mutable state: a single instance can be shared by
/// several threads and every call to [`CommandParser::parse`] is independent.
///
/// # Supported Commands
///
/// `add`, `addfast`, `addteam`, `editteam`, `addmatch`, `delete`, `delteam`,
/// `deletematch`, `clear`, `clearteam`, `clearmatch`, `find`, `findteam`,
/// `findmatch`, `list`, `listteam`, `listmatch`, `listfinance`, `viewall`,
/// `finance`, `sort`, `help` and `exit`.
#[derive(Debug, Clone)]
pub struct CommandParser<V = StrictTagValidator> {
    /// Validator applied to every tag
    validator: V,
    /// Policy for keywords missing from the table
    unknown_keyword: UnknownKeyword,
}

impl CommandParser {
    /// Creates a parser with the default tag validation.
    pub fn new() -> Self {
        CommandParser::with_validator(StrictTagValidator)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        CommandParser::new()
    }
}

impl<V: TagValidator> CommandParser<V> {
    /// Creates a parser delegating tag validation to `validator`.
    pub fn with_validator(validator: V) -> Self {
        CommandParser {
            validator,
            unknown_keyword: UnknownKeyword::default(),
        }
    }

    /// Sets the policy applied to unknown keywords.
    pub fn with_unknown_keyword(mut self, unknown_keyword: UnknownKeyword) -> Self {
        self.unknown_keyword = unknown_keyword;
        self
    }

    /// Policy applied to unknown keywords.
    pub fn unknown_keyword(&self) -> UnknownKeyword {
        self.unknown_keyword
    }

    /// Parses a full input line into a command.
    ///
    /// This never fails: any problem with the line is reported as a
    /// [`Command::Incorrect`] holding the feedback to show.
    ///
    /// # Returns
    ///
    /// * `Command::Incorrect` with the help usage - the line is blank
    /// * `Command::Help` - the keyword is unknown and the policy is [`UnknownKeyword::Help`]
    /// * `Command::Incorrect` - the keyword is unknown and the policy is [`UnknownKeyword::Reject`]
    /// * otherwise whatever the keyword's extractor returns
    pub fn parse(&self, line: &str) -> Command {
        let Some(caps) = BASIC_COMMAND.captures(line.trim()) else {
            debug!("unable to split input line: {:?}", line);
            return Command::Incorrect(format_invalid_format(HELP_USAGE));
        };

        let keyword = &caps["commandWord"];
        let arguments = &caps["arguments"];

        match ROUTES.iter().find(|(word, _)| *word == keyword) {
            Some((_, Route::Extract(extract))) => {
                debug!("routing {:?} to its extractor", keyword);
                extract(arguments, &self.validator)
            }
            Some((_, Route::Fixed(command))) => {
                debug!("routing {:?} to {:?}", keyword, command);
                command.clone()
            }
            None => {
                warn!("unknown command keyword: {:?}", keyword);
                match self.unknown_keyword {
                    UnknownKeyword::Help => Command::Help,
                    UnknownKeyword::Reject => Command::Incorrect(format_unknown_command()),
                }
            }
        }
    }
}
