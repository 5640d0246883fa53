//! Roster - command parsing for a football league tracker.
//!
//! The tracker manages players, teams, matches and team finances from a
//! line-oriented command interface. This crate is the part turning each typed
//! line into a typed [`Command`](commands::Command), ready to be applied to the
//! roster by the caller.
//!
//! # Overview
//!
//! - Every line yields exactly one command, never an error: malformed input
//!   becomes [`Command::Incorrect`](commands::Command::Incorrect) carrying the
//!   feedback to display.
//! - Grammars are compiled once and shared read-only, so a single
//!   [`CommandParser`](commands::CommandParser) can serve many threads.
//! - Tag validation sits behind the [`TagValidator`](tags::TagValidator) trait.
//!
//! # Example
//!
//! ```
//! use roster::commands::{Command, CommandParser};
//!
//! let parser = CommandParser::new();
//! match parser.parse("addteam Arsenal c/England s/Emirates t/rich t/rich") {
//!     Command::AddTeam(team) => {
//!         assert_eq!(team.name, "Arsenal");
//!         assert_eq!(team.tags.len(), 1);
//!     }
//!     other => panic!("unexpected command: {:?}", other),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`commands`] - Command values, grammars, extractors and the dispatcher
//! - [`tags`] - Tag value object, validation seam and tag extraction
//! - [`config`] - YAML configuration with environment variable overrides

pub mod commands;
pub mod config;
pub mod tags;
