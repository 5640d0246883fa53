//! Keyword search extractors: `find`, `findteam` and `findmatch`.

use log::debug;

use crate::{
    commands::{
        command::{Command, Entity},
        extractors::invalid_format,
        keywords::parse_keywords,
        usage::{FIND_MATCH_USAGE, FIND_PLAYER_USAGE, FIND_TEAM_USAGE},
    },
    tags::TagValidator,
};

fn prepare_find(args: &str, entity: Entity, usage: &str) -> Command {
    debug!("parsing find {} command: {:?}", entity, args);

    match parse_keywords(args) {
        Some(keywords) => Command::Find { entity, keywords },
        None => invalid_format(usage),
    }
}

/// Parses the arguments of the `find` command.
pub fn prepare_find_player(args: &str, _: &dyn TagValidator) -> Command {
    prepare_find(args, Entity::Player, FIND_PLAYER_USAGE)
}

/// Parses the arguments of the `findteam` command.
pub fn prepare_find_team(args: &str, _: &dyn TagValidator) -> Command {
    prepare_find(args, Entity::Team, FIND_TEAM_USAGE)
}

/// Parses the arguments of the `findmatch` command.
pub fn prepare_find_match(args: &str, _: &dyn TagValidator) -> Command {
    prepare_find(args, Entity::Match, FIND_MATCH_USAGE)
}
