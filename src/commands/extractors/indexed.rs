//! Index-based extractors: deletions, `viewall` and `finance`.
//!
//! All of them take a single display index. A missing index and an index that
//! is not a positive number produce the same feedback.

use log::debug;

use crate::{
    commands::{
        command::{Command, Entity},
        extractors::invalid_format,
        index::parse_display_index,
        usage::{
            DELETE_MATCH_USAGE, DELETE_PLAYER_USAGE, DELETE_TEAM_USAGE, FINANCE_USAGE,
            VIEW_ALL_USAGE,
        },
    },
    tags::TagValidator,
};

fn prepare_indexed(args: &str, usage: &str, build: impl FnOnce(usize) -> Command) -> Command {
    match parse_display_index(args) {
        Ok(index) => build(index),
        Err(e) => {
            debug!("invalid display index {:?}: {:?}", args, e);
            invalid_format(usage)
        }
    }
}

/// Parses the arguments of the `delete` command.
pub fn prepare_delete_player(args: &str, _: &dyn TagValidator) -> Command {
    prepare_indexed(args, DELETE_PLAYER_USAGE, |index| Command::Delete {
        entity: Entity::Player,
        index,
    })
}

/// Parses the arguments of the `delteam` command.
pub fn prepare_delete_team(args: &str, _: &dyn TagValidator) -> Command {
    prepare_indexed(args, DELETE_TEAM_USAGE, |index| Command::Delete {
        entity: Entity::Team,
        index,
    })
}

/// Parses the arguments of the `deletematch` command.
pub fn prepare_delete_match(args: &str, _: &dyn TagValidator) -> Command {
    prepare_indexed(args, DELETE_MATCH_USAGE, |index| Command::Delete {
        entity: Entity::Match,
        index,
    })
}

/// Parses the arguments of the `viewall` command.
pub fn prepare_view_all(args: &str, _: &dyn TagValidator) -> Command {
    prepare_indexed(args, VIEW_ALL_USAGE, |index| Command::ViewAll { index })
}

/// Parses the arguments of the `finance` command.
pub fn prepare_finance(args: &str, _: &dyn TagValidator) -> Command {
    prepare_indexed(args, FINANCE_USAGE, |index| Command::Finance { index })
}
