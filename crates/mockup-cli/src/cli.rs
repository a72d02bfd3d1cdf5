// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "mockup",
    version,
    about = "Compose device mockups with embedded chat apps",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    /// Directory holding saved prefs (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compose a device (and optional app) into a render descriptor.
    Compose(ComposeArgs),
    /// Print the scaled device dimensions.
    Dimensions(DeviceArgs),
    /// List size tiers and their multipliers.
    Tiers,
    /// List registered apps.
    Apps,
    /// Show or save default device prefs.
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

#[derive(Subcommand)]
pub(crate) enum PrefsCommand {
    /// Print the saved prefs (or defaults) as JSON.
    Show,
    /// Merge flags into the saved prefs and write them back.
    Save(SaveArgs),
}

/// Device selection shared by every command that renders.
#[derive(Args, Clone, Default)]
pub(crate) struct DeviceArgs {
    /// JSON file with a (partial) device config.
    #[arg(long, value_name = "FILE")]
    pub(crate) device: Option<PathBuf>,

    /// Size tier: xs, sm, md, lg, xl (unknown names mean md).
    #[arg(long, value_name = "TIER")]
    pub(crate) size: Option<String>,

    /// Orientation: portrait or landscape.
    #[arg(long, value_name = "MODE")]
    pub(crate) rotation: Option<String>,

    /// Palette: light or dark.
    #[arg(long, value_name = "MODE")]
    pub(crate) color_mode: Option<String>,

    /// Disable the frame's drop shadow.
    #[arg(long)]
    pub(crate) no_shadow: bool,
}

#[derive(Args)]
pub(crate) struct ComposeArgs {
    #[command(flatten)]
    pub(crate) device: DeviceArgs,

    /// JSON file with an app config (`{ "name": ..., "options": ... }`).
    #[arg(long, value_name = "FILE")]
    pub(crate) app: Option<PathBuf>,

    /// Render the bare device even if prefs name an app.
    #[arg(long, conflicts_with = "app")]
    pub(crate) no_app: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub(crate) format: Format,
}

#[derive(Args)]
pub(crate) struct SaveArgs {
    #[command(flatten)]
    pub(crate) device: DeviceArgs,

    /// JSON file with the default app config.
    #[arg(long, value_name = "FILE")]
    pub(crate) app: Option<PathBuf>,

    /// Forget the saved default app.
    #[arg(long, conflicts_with = "app")]
    pub(crate) clear_app: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Render descriptor as pretty JSON.
    Json,
    /// Indented node outline of the composed tree.
    Outline,
}
