// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line entry point wiring clap arguments to the validation and
//! formatting helpers.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde_json::Value;

use crate::logic::validation::validate_id;
use crate::models::schemas::SchemaId;
use crate::utils::{
    capitalize, format_date, format_file_size, format_relative_time, format_time, sanitize,
    to_title_case, truncate_string,
};

/// Validate form records and format values from the shell.
#[derive(Debug, Parser)]
#[command(name = "creator-input", version, about)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true, env = "CREATOR_INPUT_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a JSON record against a built-in schema
    Validate {
        /// Schema name: message, project, email, or contact
        schema: SchemaId,

        /// JSON file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Strip angle brackets and bound the length of a string
    Sanitize { text: String },
    /// Format a byte count, e.g. 1536 -> "1.5 KB"
    FileSize { bytes: u64 },
    /// Describe how long ago an RFC 3339 timestamp was
    RelativeTime { timestamp: String },
    /// Format the clock time of an RFC 3339 timestamp
    Time {
        timestamp: String,

        /// Render in UTC instead of the local zone
        #[arg(long, env = "CREATOR_INPUT_UTC")]
        utc: bool,
    },
    /// Format the date of an RFC 3339 timestamp
    Date {
        timestamp: String,

        /// Render in UTC instead of the local zone
        #[arg(long, env = "CREATOR_INPUT_UTC")]
        utc: bool,
    },
    /// Shorten text to a maximum length with an ellipsis
    Truncate { text: String, max: usize },
    /// Upper-case the first letter, lower-case the rest
    Capitalize { text: String },
    /// Capitalize every space-separated word
    TitleCase { text: String },
}

/// Text to print plus whether the command succeeded.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Initialize logging, run the parsed command, and print its output.
pub fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose);

    let outcome = execute(cli.command, &mut io::stdin().lock())?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // A logger may already be installed when embedded; keep it.
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Execute a command, reading record input from `stdin` when no file is given.
pub fn execute(command: Command, stdin: &mut impl Read) -> Result<Outcome> {
    match command {
        Command::Validate { schema, input } => {
            let raw = match &input {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read record file: {:?}", path))?,
                None => {
                    let mut buf = String::new();
                    stdin
                        .read_to_string(&mut buf)
                        .context("Failed to read record from stdin")?;
                    buf
                }
            };
            let candidate: Value =
                serde_json::from_str(&raw).context("Record input is not valid JSON")?;

            let result = validate_id(schema, &candidate);
            info!(
                "Record checked against '{schema}' schema: {}",
                if result.is_valid() { "valid" } else { "invalid" }
            );
            let output = serde_json::to_string_pretty(&result)
                .context("Failed to serialize validation result")?;
            Ok(Outcome {
                output,
                success: result.is_valid(),
            })
        }
        Command::Sanitize { text } => Ok(Outcome::ok(sanitize(&text))),
        Command::FileSize { bytes } => Ok(Outcome::ok(format_file_size(bytes))),
        Command::RelativeTime { timestamp } => {
            let instant = parse_timestamp(&timestamp)?;
            Ok(Outcome::ok(format_relative_time(&instant)))
        }
        Command::Time { timestamp, utc } => {
            let instant = parse_timestamp(&timestamp)?;
            let output = if utc {
                format_time(&instant.with_timezone(&Utc))
            } else {
                format_time(&instant.with_timezone(&Local))
            };
            Ok(Outcome::ok(output))
        }
        Command::Date { timestamp, utc } => {
            let instant = parse_timestamp(&timestamp)?;
            let output = if utc {
                format_date(&instant.with_timezone(&Utc))
            } else {
                format_date(&instant.with_timezone(&Local))
            };
            Ok(Outcome::ok(output))
        }
        Command::Truncate { text, max } => Ok(Outcome::ok(truncate_string(&text, max))),
        Command::Capitalize { text } => Ok(Outcome::ok(capitalize(&text))),
        Command::TitleCase { text } => Ok(Outcome::ok(to_title_case(&text))),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    debug!("Parsing timestamp {raw:?}");
    DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("Invalid RFC 3339 timestamp: {raw}"))
}
