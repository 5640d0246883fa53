//! Command keywords, usage texts and feedback formatters.
//!
//! Usage texts mirror the field order and prefixes of the grammars in
//! [`grammar`](crate::commands::grammar): the examples they show must parse.

pub const ADD_PLAYER: &str = "add";
pub const ADD_PLAYER_FAST: &str = "addfast";
pub const ADD_TEAM: &str = "addteam";
pub const EDIT_TEAM: &str = "editteam";
pub const ADD_MATCH: &str = "addmatch";
pub const DELETE_PLAYER: &str = "delete";
pub const DELETE_TEAM: &str = "delteam";
pub const DELETE_MATCH: &str = "deletematch";
pub const CLEAR_PLAYERS: &str = "clear";
pub const CLEAR_TEAMS: &str = "clearteam";
pub const CLEAR_MATCHES: &str = "clearmatch";
pub const FIND_PLAYER: &str = "find";
pub const FIND_TEAM: &str = "findteam";
pub const FIND_MATCH: &str = "findmatch";
pub const LIST_PLAYERS: &str = "list";
pub const LIST_TEAMS: &str = "listteam";
pub const LIST_MATCHES: &str = "listmatch";
pub const LIST_FINANCES: &str = "listfinance";
pub const VIEW_ALL: &str = "viewall";
pub const FINANCE: &str = "finance";
pub const SORT: &str = "sort";
pub const HELP: &str = "help";
pub const EXIT: &str = "exit";

pub const ADD_PLAYER_USAGE: &str = "add: Adds a player to the league tracker. \
    Parameters: NAME p/POSITION a/AGE sal/SALARY gs/GOALS_SCORED ga/GOALS_ASSISTED \
    tm/TEAM ctry/COUNTRY jn/JERSEY_NUMBER app/APPEARANCE hs/HEALTH_STATUS [t/TAG]...\n\
    Example: add Bruno Fernandes p/Midfielder a/29 sal/200000 gs/8 ga/10 tm/Manchester United \
    ctry/Portugal jn/18 app/30 hs/Healthy t/captain";

pub const ADD_PLAYER_FAST_USAGE: &str = "addfast: Adds a player with the key fields only. \
    Parameters: NAME p/POSITION a/AGE sal/SALARY tm/TEAM ctry/COUNTRY jn/JERSEY_NUMBER [t/TAG]...\n\
    Example: addfast Marcus Rashford p/Forward a/27 sal/300000 tm/Manchester United \
    ctry/England jn/10";

pub const ADD_TEAM_USAGE: &str = "addteam: Adds a team to the league tracker. \
    Parameters: NAME c/COUNTRY s/SPONSOR [t/TAG]...\n\
    Example: addteam Arsenal c/England s/Emirates t/rich";

pub const EDIT_TEAM_USAGE: &str = "editteam: Edits the team identified by the index number \
    used in the last team listing. \
    Parameters: INDEX [n/NAME] [c/COUNTRY] [s/SPONSOR] [t/TAG]...\n\
    Example: editteam 1 n/Chelsea c/England";

pub const ADD_MATCH_USAGE: &str = "addmatch: Adds a match to the league tracker. \
    Parameters: DATE h/HOME_TEAM a/AWAY_TEAM [t/TAG]...\n\
    Example: addmatch 2024-05-19 h/Arsenal a/Everton t/final day";

pub const DELETE_PLAYER_USAGE: &str = "delete: Deletes the player identified by the index number \
    used in the last player listing.\n\
    Parameters: INDEX\n\
    Example: delete 1";

pub const DELETE_TEAM_USAGE: &str = "delteam: Deletes the team identified by the index number \
    used in the last team listing.\n\
    Parameters: INDEX\n\
    Example: delteam 1";

pub const DELETE_MATCH_USAGE: &str = "deletematch: Deletes the match identified by the index number \
    used in the last match listing.\n\
    Parameters: INDEX\n\
    Example: deletematch 1";

pub const CLEAR_PLAYERS_USAGE: &str = "clear: Clears all players.\nExample: clear";
pub const CLEAR_TEAMS_USAGE: &str = "clearteam: Clears all teams.\nExample: clearteam";
pub const CLEAR_MATCHES_USAGE: &str = "clearmatch: Clears all matches.\nExample: clearmatch";

pub const FIND_PLAYER_USAGE: &str = "find: Finds all players whose names contain any of the \
    specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

pub const FIND_TEAM_USAGE: &str = "findteam: Finds all teams whose names contain any of the \
    specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: findteam Arsenal Chelsea";

pub const FIND_MATCH_USAGE: &str = "findmatch: Finds all matches involving any of the \
    specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: findmatch Arsenal";

pub const LIST_PLAYERS_USAGE: &str =
    "list: Displays all players in the league tracker as a list with index numbers.\nExample: list";
pub const LIST_TEAMS_USAGE: &str =
    "listteam: Displays all teams as a list with index numbers.\nExample: listteam";
pub const LIST_MATCHES_USAGE: &str =
    "listmatch: Displays all matches as a list with index numbers.\nExample: listmatch";
pub const LIST_FINANCES_USAGE: &str =
    "listfinance: Displays the finances of every team.\nExample: listfinance";

pub const VIEW_ALL_USAGE: &str = "viewall: Views every detail of the player identified by the \
    index number in the last player listing.\n\
    Parameters: INDEX\n\
    Example: viewall 1";

pub const FINANCE_USAGE: &str = "finance: Shows the finances of the team identified by the \
    index number in the last team listing.\n\
    Parameters: INDEX\n\
    Example: finance 1";

pub const SORT_USAGE: &str = "sort: Sorts the player list by name.\nExample: sort";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

/// Every usage text, in the order the help listing shows them.
const ALL_USAGES: &[&str] = &[
    ADD_PLAYER_USAGE,
    ADD_PLAYER_FAST_USAGE,
    DELETE_PLAYER_USAGE,
    CLEAR_PLAYERS_USAGE,
    FIND_PLAYER_USAGE,
    LIST_PLAYERS_USAGE,
    VIEW_ALL_USAGE,
    SORT_USAGE,
    ADD_TEAM_USAGE,
    EDIT_TEAM_USAGE,
    DELETE_TEAM_USAGE,
    CLEAR_TEAMS_USAGE,
    FIND_TEAM_USAGE,
    LIST_TEAMS_USAGE,
    ADD_MATCH_USAGE,
    DELETE_MATCH_USAGE,
    CLEAR_MATCHES_USAGE,
    FIND_MATCH_USAGE,
    LIST_MATCHES_USAGE,
    FINANCE_USAGE,
    LIST_FINANCES_USAGE,
    HELP_USAGE,
    EXIT_USAGE,
];

/// Formats the feedback for a line that does not fit a command's grammar.
///
/// # Examples
///
/// ```
/// # use roster::commands::usage::{format_invalid_format, DELETE_PLAYER_USAGE};
/// let msg = format_invalid_format(DELETE_PLAYER_USAGE);
/// assert!(msg.starts_with("Invalid command format! \n"));
/// ```
pub fn format_invalid_format(usage: &str) -> String {
    format!("Invalid command format! \n{}", usage)
}

/// Formats the feedback for an `editteam` line that only holds an index.
pub fn format_no_fields_to_edit() -> String {
    format!("No fields to edit were given! \n{}", EDIT_TEAM_USAGE)
}

/// Formats the feedback for an unrecognized command keyword.
///
/// Only used when the parser rejects unknown keywords instead of showing help.
pub fn format_unknown_command() -> String {
    format!("Unknown command! \n{}", HELP_USAGE)
}

/// Formats the full help listing, one usage per paragraph.
pub fn format_help() -> String {
    ALL_USAGES.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_invalid_format() {
        assert_eq!(
            format_invalid_format(HELP_USAGE),
            "Invalid command format! \nhelp: Shows program usage instructions.\nExample: help"
        );
    }

    #[test]
    fn test_format_no_fields_to_edit_differs_from_generic() {
        let msg = format_no_fields_to_edit();
        assert!(msg.starts_with("No fields to edit"));
        assert!(msg.contains(EDIT_TEAM_USAGE));
        assert_ne!(msg, format_invalid_format(EDIT_TEAM_USAGE));
    }

    #[test]
    fn test_format_unknown_command() {
        assert!(format_unknown_command().contains(HELP_USAGE));
    }

    #[test]
    fn test_usages_start_with_their_keyword() {
        let pairs = [
            (ADD_PLAYER, ADD_PLAYER_USAGE),
            (ADD_PLAYER_FAST, ADD_PLAYER_FAST_USAGE),
            (ADD_TEAM, ADD_TEAM_USAGE),
            (EDIT_TEAM, EDIT_TEAM_USAGE),
            (ADD_MATCH, ADD_MATCH_USAGE),
            (DELETE_PLAYER, DELETE_PLAYER_USAGE),
            (DELETE_TEAM, DELETE_TEAM_USAGE),
            (DELETE_MATCH, DELETE_MATCH_USAGE),
            (CLEAR_PLAYERS, CLEAR_PLAYERS_USAGE),
            (CLEAR_TEAMS, CLEAR_TEAMS_USAGE),
            (CLEAR_MATCHES, CLEAR_MATCHES_USAGE),
            (FIND_PLAYER, FIND_PLAYER_USAGE),
            (FIND_TEAM, FIND_TEAM_USAGE),
            (FIND_MATCH, FIND_MATCH_USAGE),
            (LIST_PLAYERS, LIST_PLAYERS_USAGE),
            (LIST_TEAMS, LIST_TEAMS_USAGE),
            (LIST_MATCHES, LIST_MATCHES_USAGE),
            (LIST_FINANCES, LIST_FINANCES_USAGE),
            (VIEW_ALL, VIEW_ALL_USAGE),
            (FINANCE, FINANCE_USAGE),
            (SORT, SORT_USAGE),
            (HELP, HELP_USAGE),
            (EXIT, EXIT_USAGE),
        ];

        for (keyword, usage) in pairs {
            assert!(
                usage.starts_with(&format!("{}:", keyword)),
                "usage of {} does not start with its keyword",
                keyword
            );
        }
    }

    #[test]
    fn test_format_help_lists_every_usage() {
        let help = format_help();
        for usage in ALL_USAGES {
            assert!(help.contains(usage));
        }
    }
}
