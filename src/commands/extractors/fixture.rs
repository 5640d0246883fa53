//! Match extractor: `addmatch`.

use log::debug;

use crate::{
    commands::{
        command::{Command, NewMatch},
        extractors::{field, invalid_format, tag_arguments},
        grammar::MATCH_DATA_ARGS,
        usage::ADD_MATCH_USAGE,
    },
    tags::{TagValidator, extract_tags},
};

/// Parses the arguments of the `addmatch` command.
pub fn prepare_add_match(args: &str, validator: &dyn TagValidator) -> Command {
    debug!("parsing add match command: {:?}", args);

    let Some(caps) = MATCH_DATA_ARGS.captures(args.trim()) else {
        return invalid_format(ADD_MATCH_USAGE);
    };

    let tags = match extract_tags(tag_arguments(&caps), validator) {
        Ok(tags) => tags,
        Err(reason) => return Command::Incorrect(reason),
    };

    let fixture = NewMatch {
        date: field(&caps, "date"),
        home: field(&caps, "home"),
        away: field(&caps, "away"),
        tags,
    };

    debug!("parsed add match command: {:?}", fixture);

    Command::AddMatch(fixture)
}
