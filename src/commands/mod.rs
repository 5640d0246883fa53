//! Command parsing.
//!
//! This module turns a single line typed by the user into one of a fixed set of
//! typed [`Command`] values. Parsing never fails: a malformed line is returned
//! as [`Command::Incorrect`] carrying the feedback to display, so the caller has
//! one code path for success and failure alike.
//!
//! # Architecture
//!
//! ```text
//! Input line
//!      │
//!      ▼
//! ┌───────────────┐
//! │ CommandParser │  ← keyword / arguments split + static route table
//! └───────────────┘
//!      │
//!      ▼
//! ┌─────────────────────┐      ┌──────────────────┐
//! │ Field extractors    │ ───▶ │ grammar registry │
//! │  - player           │      └──────────────────┘
//! │  - team             │      ┌──────────────────┐
//! │  - fixture          │ ───▶ │ index / keywords │
//! │  - indexed          │      └──────────────────┘
//! │  - search           │      ┌──────────────────┐
//! └─────────────────────┘ ───▶ │ tag extractor    │
//!      │                       └──────────────────┘
//!      ▼
//!   Command
//! ```
//!
//! # Command Structure
//!
//! All commands follow the format `<keyword> <arguments>`. Required free-form
//! fields come first, then the prefixed fields in a fixed order, then any
//! number of ` t/TAG` groups.
//!
//! | Command | Arguments |
//! |---------|-----------|
//! | `add` | `NAME p/ a/ sal/ gs/ ga/ tm/ ctry/ jn/ app/ hs/ [t/]...` |
//! | `addfast` | `NAME p/ a/ sal/ tm/ ctry/ jn/ [t/]...` |
//! | `addteam` | `NAME c/ s/ [t/]...` |
//! | `editteam` | `INDEX [n/] [c/] [s/] [t/]...` |
//! | `addmatch` | `DATE h/ a/ [t/]...` |
//! | `delete`, `delteam`, `deletematch`, `viewall`, `finance` | `INDEX` |
//! | `find`, `findteam`, `findmatch` | `KEYWORD...` |
//! | `list`, `listteam`, `listmatch`, `listfinance`, `clear`, `clearteam`, `clearmatch`, `sort`, `help`, `exit` | none |
//!
//! # Error Handling
//!
//! - **Unknown keyword**: routed to [`Command::Help`] by default, see [`UnknownKeyword`]
//! - **Structural mismatch**: `Invalid command format!` followed by the command's usage
//! - **Rejected tag**: the tag validator's message, unmodified
//! - **`editteam` with only an index**: a dedicated "no fields to edit" message
//!
//! # Module Organization
//!
//! - [`parser`] - Command dispatcher
//! - [`command`] - Command values
//! - [`extractors`] - Per-command field extraction
//! - [`grammar`] - Structural patterns
//! - [`index`] - Display index parsing
//! - [`keywords`] - Keyword set parsing
//! - [`usage`] - Keywords, usage texts and feedback formatting

pub mod command;
pub mod extractors;
pub mod grammar;
pub mod index;
pub mod keywords;
pub mod parser;
pub mod usage;

pub use crate::commands::{
    command::{Command, Entity, NewMatch, NewPlayer, NewPlayerFast, NewTeam, TeamEdit},
    parser::{CommandParser, UnknownKeyword},
};
