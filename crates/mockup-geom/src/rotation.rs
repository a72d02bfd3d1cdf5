// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wire::WireName;

/// Device orientation. Landscape swaps the base height and width before scaling.
///
/// Parsing is case-insensitive; anything other than `landscape` is portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(from = "WireName", into = "&'static str")]
pub enum RotationMode {
    /// Taller than wide.
    #[default]
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl RotationMode {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// Case-insensitive lookup; unknown names fall back to portrait.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("landscape") {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Returns `true` for [`RotationMode::Portrait`].
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<WireName> for RotationMode {
    fn from(value: WireName) -> Self {
        value.as_deref().map_or_else(Self::default, Self::from_name)
    }
}

impl From<String> for RotationMode {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<RotationMode> for &'static str {
    fn from(value: RotationMode) -> Self {
        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_landscape_is_landscape() {
        assert_eq!(RotationMode::from_name("LANDSCAPE"), RotationMode::Landscape);
        assert_eq!(RotationMode::from_name("sideways"), RotationMode::Portrait);
        assert!(RotationMode::default().is_portrait());
    }
}
