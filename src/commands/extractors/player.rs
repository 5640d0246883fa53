//! Player extractors: `add` and `addfast`.
//!
//! Both forms share the same leading fields; `addfast` drops goals, appearances
//! and health status.

use log::debug;

use crate::{
    commands::{
        command::{Command, NewPlayer, NewPlayerFast},
        extractors::{field, invalid_format, tag_arguments},
        grammar::{PLAYER_DATA_ARGS, PLAYER_FAST_DATA_ARGS},
        usage::{ADD_PLAYER_FAST_USAGE, ADD_PLAYER_USAGE},
    },
    tags::{TagValidator, extract_tags},
};

/// Parses the arguments of the `add` command.
pub fn prepare_add_player(args: &str, validator: &dyn TagValidator) -> Command {
    debug!("parsing add player command: {:?}", args);

    let Some(caps) = PLAYER_DATA_ARGS.captures(args.trim()) else {
        return invalid_format(ADD_PLAYER_USAGE);
    };

    let tags = match extract_tags(tag_arguments(&caps), validator) {
        Ok(tags) => tags,
        Err(reason) => return Command::Incorrect(reason),
    };

    let player = NewPlayer {
        name: field(&caps, "name"),
        position: field(&caps, "position"),
        age: field(&caps, "age"),
        salary: field(&caps, "salary"),
        goals_scored: field(&caps, "goalsScored"),
        goals_assisted: field(&caps, "goalsAssisted"),
        team: field(&caps, "team"),
        country: field(&caps, "country"),
        jersey_number: field(&caps, "jerseyNumber"),
        appearance: field(&caps, "appearance"),
        health_status: field(&caps, "healthStatus"),
        tags,
    };

    debug!("parsed add player command: {:?}", player);

    Command::AddPlayer(player)
}

/// Parses the arguments of the `addfast` command.
pub fn prepare_add_player_fast(args: &str, validator: &dyn TagValidator) -> Command {
    debug!("parsing add fast player command: {:?}", args);

    let Some(caps) = PLAYER_FAST_DATA_ARGS.captures(args.trim()) else {
        return invalid_format(ADD_PLAYER_FAST_USAGE);
    };

    let tags = match extract_tags(tag_arguments(&caps), validator) {
        Ok(tags) => tags,
        Err(reason) => return Command::Incorrect(reason),
    };

    let player = NewPlayerFast {
        name: field(&caps, "name"),
        position: field(&caps, "position"),
        age: field(&caps, "age"),
        salary: field(&caps, "salary"),
        team: field(&caps, "team"),
        country: field(&caps, "country"),
        jersey_number: field(&caps, "jerseyNumber"),
        tags,
    };

    debug!("parsed add fast player command: {:?}", player);

    Command::AddPlayerFast(player)
}
