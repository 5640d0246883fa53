//! Team extractors: `addteam` and `editteam`.

use log::debug;

use crate::{
    commands::{
        command::{Command, NewTeam, TeamEdit},
        extractors::{field, invalid_format, optional_field, tag_arguments},
        grammar::{TEAM_DATA_ARGS, TEAM_EDIT_DATA_ARGS, TEAM_EDIT_NO_ARGS},
        index::parse_display_index,
        usage::{ADD_TEAM_USAGE, EDIT_TEAM_USAGE, format_no_fields_to_edit},
    },
    tags::{TagValidator, extract_tags},
};

/// Parses the arguments of the `addteam` command.
pub fn prepare_add_team(args: &str, validator: &dyn TagValidator) -> Command {
    debug!("parsing add team command: {:?}", args);

    let Some(caps) = TEAM_DATA_ARGS.captures(args.trim()) else {
        return invalid_format(ADD_TEAM_USAGE);
    };

    let tags = match extract_tags(tag_arguments(&caps), validator) {
        Ok(tags) => tags,
        Err(reason) => return Command::Incorrect(reason),
    };

    let team = NewTeam {
        name: field(&caps, "name"),
        country: field(&caps, "country"),
        sponsor: field(&caps, "sponsor"),
        tags,
    };

    debug!("parsed add team command: {:?}", team);

    Command::AddTeam(team)
}

/// Parses the arguments of the `editteam` command.
///
/// An index followed by nothing else is rejected with a dedicated message
/// before the grammar is even tried.
pub fn prepare_edit_team(args: &str, validator: &dyn TagValidator) -> Command {
    debug!("parsing edit team command: {:?}", args);

    let args = args.trim();
    if TEAM_EDIT_NO_ARGS.is_match(args) {
        debug!("edit team command has no field to edit");
        return Command::Incorrect(format_no_fields_to_edit());
    }

    let Some(caps) = TEAM_EDIT_DATA_ARGS.captures(args) else {
        return invalid_format(EDIT_TEAM_USAGE);
    };

    let index = match parse_display_index(&caps["targetIndex"]) {
        Ok(index) => index,
        Err(e) => {
            debug!("invalid edit team index: {:?}", e);
            return invalid_format(EDIT_TEAM_USAGE);
        }
    };

    let tags = match extract_tags(tag_arguments(&caps), validator) {
        Ok(tags) => tags,
        Err(reason) => return Command::Incorrect(reason),
    };

    let edit = TeamEdit {
        index,
        name: optional_field(&caps, "name"),
        country: optional_field(&caps, "country"),
        sponsor: optional_field(&caps, "sponsor"),
        tags,
    };

    debug!("parsed edit team command: {:?}", edit);

    Command::EditTeam(edit)
}
