//! Field extractors.
//!
//! One extractor per command family. Each receives the argument string left
//! after the command keyword and returns a [`Command`], never an error: a line
//! that does not fit the grammar becomes [`Command::Incorrect`] with the usage
//! of the command, and a field rejected after a structural match carries the
//! validator's own message.
//!
//! # Available Extractors
//!
//! - [`player`] - `add` and `addfast`
//! - [`team`] - `addteam` and `editteam`
//! - [`fixture`] - `addmatch`
//! - [`indexed`] - `delete`, `delteam`, `deletematch`, `viewall` and `finance`
//! - [`search`] - `find`, `findteam` and `findmatch`

use regex::Captures;

use crate::{
    commands::{command::Command, usage::format_invalid_format},
    tags::TagValidator,
};

pub mod fixture;
pub mod indexed;
pub mod player;
pub mod search;
pub mod team;

/// Signature shared by every extractor.
pub type Extractor = fn(&str, &dyn TagValidator) -> Command;

/// Builds the generic structural failure for a command.
fn invalid_format(usage: &str) -> Command {
    Command::Incorrect(format_invalid_format(usage))
}

/// Trimmed value of a required capture group.
///
/// Required groups always participate in a successful match; an absent group
/// yields an empty string.
fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default()
}

/// Trimmed value of an optional capture group.
fn optional_field(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().trim().to_owned())
}

/// Raw, untrimmed tag group of a match.
fn tag_arguments<'h>(caps: &Captures<'h>) -> &'h str {
    caps.name("tagArguments").map_or("", |m| m.as_str())
}
