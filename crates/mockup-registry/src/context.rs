// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use mockup_geom::{scale, RotationMode, SizeTier, WireName};
use serde::{Deserialize, Serialize};

/// Light or dark palette. Unknown names parse as light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "WireName", into = "&'static str")]
pub enum ColorMode {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ColorMode {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Case-insensitive lookup; anything other than `dark` is light.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Picks the value for this mode.
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WireName> for ColorMode {
    fn from(value: WireName) -> Self {
        value.as_deref().map_or_else(Self::default, Self::from_name)
    }
}

impl From<String> for ColorMode {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ColorMode> for &'static str {
    fn from(value: ColorMode) -> Self {
        value.as_str()
    }
}

/// Device settings handed to every app so its scaling matches the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceContext {
    /// Palette.
    pub color_mode: ColorMode,
    /// Size tier shared with the chrome.
    pub size_tier: SizeTier,
    /// Orientation shared with the chrome.
    pub rotation: RotationMode,
}

impl DeviceContext {
    /// Scales `value` by this context's tier through the shared table.
    pub fn scale(&self, value: f64) -> f64 {
        scale(value, self.size_tier)
    }

    /// Returns `true` in portrait orientation.
    pub const fn is_portrait(&self) -> bool {
        self.rotation.is_portrait()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_scale_matches_shared_utility() {
        let ctx = DeviceContext {
            color_mode: ColorMode::Dark,
            size_tier: SizeTier::Xl,
            rotation: RotationMode::Portrait,
        };
        assert_eq!(ctx.scale(0.25), scale(0.25, SizeTier::Xl));
    }

    #[test]
    fn color_mode_falls_back_to_light() {
        assert_eq!(ColorMode::from_name("DARK"), ColorMode::Dark);
        assert_eq!(ColorMode::from_name("sepia"), ColorMode::Light);
        assert_eq!(ColorMode::Dark.pick(1, 2), 2);
    }
}
