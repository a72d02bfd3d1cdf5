// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Merging saved prefs, device files and flags into one device config.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mockup_composer::DeviceConfig;
use mockup_geom::{RotationMode, SizeTier};
use mockup_registry::{AppConfig, ColorMode};
use mockup_settings::{ConfigService, DevicePrefs};
use mockup_settings_fs::FsConfigStore;
use serde_json::Value;
use tracing::warn;

use crate::cli::DeviceArgs;

pub(crate) fn service(config_dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir)
            .with_context(|| format!("opening config dir {}", dir.display()))?,
        None => FsConfigStore::new().context("resolving platform config dir")?,
    };
    Ok(ConfigService::new(store))
}

/// Saved prefs; unreadable prefs are logged and replaced by defaults.
pub(crate) fn load_prefs_or_default(config_dir: Option<&Path>) -> DevicePrefs {
    let loaded = service(config_dir).and_then(|svc| svc.load_prefs().map_err(Into::into));
    match loaded {
        Ok(Some(prefs)) => prefs,
        Ok(None) => DevicePrefs::default(),
        Err(err) => {
            warn!(error = %err, "ignoring saved prefs");
            DevicePrefs::default()
        }
    }
}

/// Applies the `--device` file, then individual flags, over `base`.
pub(crate) fn merge_device(base: DeviceConfig, args: &DeviceArgs) -> Result<DeviceConfig> {
    let mut device = match &args.device {
        Some(path) => overlay(base, &read_json(path)?)
            .with_context(|| format!("parsing device config {}", path.display()))?,
        None => base,
    };
    if let Some(size) = &args.size {
        device.size_tier = SizeTier::from_name(size);
    }
    if let Some(rotation) = &args.rotation {
        device.rotation = RotationMode::from_name(rotation);
    }
    if let Some(mode) = &args.color_mode {
        device.color_mode = ColorMode::from_name(mode);
    }
    if args.no_shadow {
        device.box_shadow_enabled = false;
    }
    Ok(device)
}

/// Fields present in `patch` replace those of `base`.
fn overlay(base: DeviceConfig, patch: &Value) -> Result<DeviceConfig> {
    let mut merged = serde_json::to_value(base)?;
    if let (Some(target), Some(source)) = (merged.as_object_mut(), patch.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    Ok(serde_json::from_value(merged)?)
}

pub(crate) fn read_app(path: &Path) -> Result<AppConfig> {
    let value = read_json(path)?;
    serde_json::from_value(value).with_context(|| format!("parsing app config {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_keeps_unmentioned_fields() {
        let base = DeviceConfig {
            color_mode: ColorMode::Dark,
            box_shadow_enabled: false,
            ..DeviceConfig::default()
        };
        let merged = overlay(base, &json!({ "sizeTier": "xl" })).unwrap();
        assert_eq!(merged.size_tier, SizeTier::Xl);
        assert_eq!(merged.color_mode, ColorMode::Dark);
        assert!(!merged.box_shadow_enabled);
    }

    #[test]
    fn flags_beat_the_base() {
        let args = DeviceArgs {
            size: Some("LG".into()),
            rotation: Some("landscape".into()),
            color_mode: Some("dark".into()),
            no_shadow: true,
            ..DeviceArgs::default()
        };
        let merged = merge_device(DeviceConfig::default(), &args).unwrap();
        assert_eq!(merged.size_tier, SizeTier::Lg);
        assert_eq!(merged.rotation, RotationMode::Landscape);
        assert_eq!(merged.color_mode, ColorMode::Dark);
        assert!(!merged.box_shadow_enabled);
    }

    #[test]
    fn unknown_flag_values_fall_back() {
        let args = DeviceArgs {
            size: Some("huge".into()),
            ..DeviceArgs::default()
        };
        let base = DeviceConfig {
            size_tier: SizeTier::Xs,
            ..DeviceConfig::default()
        };
        assert_eq!(merge_device(base, &args).unwrap().size_tier, SizeTier::Md);
    }
}
