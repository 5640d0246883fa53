//! Roster line checker.
//!
//! Parses roster commands and prints what the tracker would receive: the
//! feedback of an incorrect command, the help listing, or the parsed command.
//!
//! # Usage
//!
//! ```bash
//! roster --line "addteam Arsenal c/England s/Emirates t/rich"
//! roster --config roster.yaml < commands.txt
//! ```
//!
//! Reading from standard input stops at the end of input or at `exit`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `ROSTER_*` - Configuration overrides, see [`roster::config`]

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use roster::{
    commands::{Command, CommandParser, usage::format_help},
    config::Config,
};

/// Command-line arguments of the line checker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Optional: without it only defaults and `ROSTER_*` variables apply.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Line to parse, may be repeated.
    ///
    /// When absent, lines are read from standard input.
    #[arg(short, long)]
    line: Vec<String>,
}

/// Renders the outcome of a parsed line.
fn render(command: &Command) -> String {
    match command {
        Command::Incorrect(feedback) => feedback.clone(),
        Command::Help => format_help(),
        other => format!("{:?}", other),
    }
}

/// Parses a line and prints its outcome. Returns `false` once `exit` is seen.
fn check(parser: &CommandParser, line: &str) -> bool {
    let command = parser.parse(line);
    println!("{}", render(&command));
    command != Command::Exit
}

fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting roster {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };
    let parser = config.command_parser();

    if !args.line.is_empty() {
        for line in &args.line {
            if !check(&parser, line) {
                break;
            }
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read standard input: {}", e);
                return;
            }
        };

        if !check(&parser, &line) {
            break;
        }
    }
}
