//! Grammar registry: one structural pattern per command family.
//!
//! Each grammar is compiled once, on first use, and shared read-only by every
//! parse afterwards. Forward slashes are reserved for prefix tokens, so a field
//! value runs up to the next prefix or the end of the argument string.
//!
//! Capture names are the field names used by the extractors; the trailing
//! `tagArguments` group is either empty or a repetition of ` t/value`.

use std::sync::LazyLock;

use regex::Regex;

/// Keyword and argument split of a whole input line.
pub static BASIC_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?<commandWord>\S+)(?<arguments>.*)$"));

/// Any non-empty remainder, interpreted as a display index afterwards.
pub static INDEX_ARGS: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?<targetIndex>.+)$"));

/// One or more whitespace separated keywords.
pub static KEYWORDS_ARGS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?<keywords>\S+(?:\s+\S+)*)$"));

pub static PLAYER_DATA_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?<name>[^/]+)",
        r"p/(?<position>[^/]+)",
        r"a/(?<age>[^/]+)",
        r"sal/(?<salary>[^/]+)",
        r"gs/(?<goalsScored>[^/]+)",
        r"ga/(?<goalsAssisted>[^/]+)",
        r"tm/(?<team>[^/]+)",
        r"ctry/(?<country>[^/]+)",
        r"jn/(?<jerseyNumber>[^/]+)",
        r"app/(?<appearance>[^/]+)",
        r"hs/(?<healthStatus>[^/]+)",
        r"(?<tagArguments>(?: t/[^/]+)*)$",
    ))
});

pub static PLAYER_FAST_DATA_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?<name>[^/]+)",
        r"p/(?<position>[^/]+)",
        r"a/(?<age>[^/]+)",
        r"sal/(?<salary>[^/]+)",
        r"tm/(?<team>[^/]+)",
        r"ctry/(?<country>[^/]+)",
        r"jn/(?<jerseyNumber>[^/]+)",
        r"(?<tagArguments>(?: t/[^/]+)*)$",
    ))
});

pub static TEAM_DATA_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?<name>[^/]+)",
        r"c/(?<country>[^/]+)",
        r"s/(?<sponsor>[^/]+)",
        r"(?<tagArguments>(?: t/[^/]+)*)$",
    ))
});

pub static TEAM_EDIT_DATA_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?<targetIndex>\d+)",
        r"(?: n/(?<name>[^/]+))?",
        r"(?: c/(?<country>[^/]+))?",
        r"(?: s/(?<sponsor>[^/]+))?",
        r"(?<tagArguments>(?: t/[^/]+)*)$",
    ))
});

/// An `editteam` argument string holding nothing but the index.
pub static TEAM_EDIT_NO_ARGS: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?<targetIndex>\d+)$"));

pub static MATCH_DATA_ARGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?<date>[^/]+)",
        r"h/(?<home>[^/]+)",
        r"a/(?<away>[^/]+)",
        r"(?<tagArguments>(?: t/[^/]+)*)$",
    ))
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}
