// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use mockup_geom::{RotationMode, SizeTier};
use mockup_registry::{ColorMode, DeviceContext};
use serde::{Deserialize, Serialize};

/// Per-render device settings.
///
/// Missing fields deserialize to light, md, portrait, box shadow on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceConfig {
    /// Palette.
    pub color_mode: ColorMode,
    /// Size tier.
    pub size_tier: SizeTier,
    /// Orientation.
    pub rotation: RotationMode,
    /// Drop shadow around the frame (drawn in light mode only).
    pub box_shadow_enabled: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Light,
            size_tier: SizeTier::Md,
            rotation: RotationMode::Portrait,
            box_shadow_enabled: true,
        }
    }
}

impl DeviceConfig {
    /// Context handed to apps.
    pub const fn context(&self) -> DeviceContext {
        DeviceContext {
            color_mode: self.color_mode,
            size_tier: self.size_tier,
            rotation: self.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_takes_defaults() {
        let cfg: DeviceConfig =
            serde_json::from_str(r#"{ "sizeTier": "XS", "rotation": "landscape", "colorMode": "dark" }"#)
                .unwrap();
        assert_eq!(cfg.size_tier, SizeTier::Xs);
        assert_eq!(cfg.rotation, RotationMode::Landscape);
        assert_eq!(cfg.color_mode, ColorMode::Dark);
        assert!(cfg.box_shadow_enabled);
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let cfg: DeviceConfig =
            serde_json::from_str(r#"{ "sizeTier": "jumbo", "rotation": "upside-down", "colorMode": "neon" }"#)
                .unwrap();
        assert_eq!(cfg, DeviceConfig::default());
    }

    #[test]
    fn non_string_enum_values_fall_back() {
        let cfg: DeviceConfig = serde_json::from_str(
            r#"{ "sizeTier": null, "rotation": 3, "colorMode": { "dark": true }, "boxShadowEnabled": false }"#,
        )
        .unwrap();
        assert_eq!(cfg.size_tier, SizeTier::Md);
        assert_eq!(cfg.rotation, RotationMode::Portrait);
        assert_eq!(cfg.color_mode, ColorMode::Light);
        assert!(!cfg.box_shadow_enabled);
    }
}
