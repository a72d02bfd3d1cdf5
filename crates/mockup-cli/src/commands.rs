// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand handlers. Each returns the text destined for stdout.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;
use mockup_apps::builtin_registry;
use mockup_composer::{DeviceComposer, RenderDescriptor};
use mockup_geom::{compute, CANONICAL_MULTIPLIERS};
use mockup_scene::render_outline;
use mockup_settings::PREFS_KEY;
use tracing::info;

use crate::cli::{Cli, Commands, ComposeArgs, DeviceArgs, Format, PrefsCommand, SaveArgs};
use crate::settings::{load_prefs_or_default, merge_device, read_app, service};

pub(crate) fn run(cli: Cli) -> Result<String> {
    let dir = cli.config_dir.as_deref();
    match cli.command {
        Commands::Compose(args) => compose(&args, dir),
        Commands::Dimensions(args) => dimensions(&args, dir),
        Commands::Tiers => Ok(tiers()),
        Commands::Apps => Ok(apps()),
        Commands::Prefs(PrefsCommand::Show) => prefs_show(dir),
        Commands::Prefs(PrefsCommand::Save(args)) => prefs_save(&args, dir),
    }
}

fn compose(args: &ComposeArgs, dir: Option<&Path>) -> Result<String> {
    let prefs = load_prefs_or_default(dir);
    let device = merge_device(prefs.device, &args.device)?;
    let app = match (&args.app, args.no_app) {
        (Some(path), _) => Some(read_app(path)?),
        (None, true) => None,
        (None, false) => prefs.app,
    };

    let composer = DeviceComposer::new(prefs.base_spec, Arc::new(builtin_registry()));
    let descriptor = composer.compose(&device, app.as_ref());
    render(&descriptor, args.format)
}

fn render(descriptor: &RenderDescriptor, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(descriptor)?;
            json.push('\n');
            Ok(json)
        }
        Format::Outline => Ok(render_outline(&descriptor.tree())),
    }
}

fn dimensions(args: &DeviceArgs, dir: Option<&Path>) -> Result<String> {
    let prefs = load_prefs_or_default(dir);
    let device = merge_device(prefs.device, args)?;
    let dims = compute(prefs.base_spec, device.size_tier, device.rotation);

    let mut table = Table::new();
    table.set_header(vec!["field", "value"]);
    let rows = [
        ("height", dims.height),
        ("width", dims.width),
        ("cornerRadius", dims.corner_radius),
        ("outerPadding", dims.outer_padding),
        ("innerPadding", dims.inner_padding),
        ("innerBorderRadius", dims.inner_border_radius),
    ];
    for (field, value) in rows {
        table.add_row(vec![field.to_owned(), format_len(value)]);
    }
    Ok(format!(
        "{} {} ({}x)\n{table}\n",
        device.size_tier,
        device.rotation,
        device.size_tier.multiplier()
    ))
}

fn tiers() -> String {
    let mut table = Table::new();
    table.set_header(vec!["tier", "multiplier"]);
    for (tier, multiplier) in CANONICAL_MULTIPLIERS.entries() {
        table.add_row(vec![tier.to_string(), multiplier.to_string()]);
    }
    format!("{table}\n")
}

fn apps() -> String {
    let mut table = Table::new();
    table.set_header(vec!["app"]);
    for name in builtin_registry().names() {
        table.add_row(vec![name]);
    }
    format!("{table}\n")
}

fn prefs_show(dir: Option<&Path>) -> Result<String> {
    let prefs = service(dir)?
        .load_prefs()
        .context("loading saved prefs")?
        .unwrap_or_default();
    let mut json = serde_json::to_string_pretty(&prefs)?;
    json.push('\n');
    Ok(json)
}

fn prefs_save(args: &SaveArgs, dir: Option<&Path>) -> Result<String> {
    let service = service(dir)?;
    let mut prefs = service
        .load_prefs()
        .context("loading saved prefs")?
        .unwrap_or_default();
    prefs.device = merge_device(prefs.device, &args.device)?;
    if let Some(path) = &args.app {
        prefs.app = Some(read_app(path)?);
    } else if args.clear_app {
        prefs.app = None;
    }
    service.save_prefs(&prefs).context("saving prefs")?;
    let path = service.store().path_for(PREFS_KEY);
    info!(path = %path.display(), "saved prefs");
    Ok(format!("saved {}\n", path.display()))
}

/// Trims float noise (`50.837500000000006` prints as `50.8375`).
fn format_len(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_drop_float_noise() {
        assert_eq!(format_len(29.05 * 1.75), "50.8375");
        assert_eq!(format_len(0.5), "0.5");
        assert_eq!(format_len(3.0), "3");
    }

    #[test]
    fn tier_table_lists_every_multiplier() {
        let out = tiers();
        for needle in ["xs", "0.5", "sm", "0.75", "md", "lg", "1.75", "xl", "3"] {
            assert!(out.contains(needle), "{needle} missing from\n{out}");
        }
    }
}
