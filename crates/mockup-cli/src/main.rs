// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `mockup`: render device mockups from the command line.
//!
//! # Usage
//! ```text
//! mockup compose --app chat.json --size lg --rotation landscape
//! mockup dimensions --size xs
//! mockup tiers
//! mockup apps
//! mockup prefs save --color-mode dark
//! ```
//!
//! Device settings resolve in order: flags, then `--device` file, then saved
//! prefs, then built-in defaults. Logs go to stderr (`RUST_LOG`, default `warn`).

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod settings;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let out = commands::run(cli)?;
    print!("{out}");
    Ok(())
}
