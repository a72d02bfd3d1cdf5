// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{Deserialize, Serialize};

use crate::rotation::RotationMode;

/// Chrome dimensions of a device mockup, in abstract length units.
///
/// Invariants:
/// - All fields are finite and non-negative.
/// - Fields are mutually consistent; scaling multiplies every field by the
///   same factor so proportions are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpec {
    /// Outer frame height.
    pub height: f64,
    /// Outer frame width.
    pub width: f64,
    /// Corner radius of the frame and bezel.
    pub corner_radius: f64,
    /// Padding between frame edge and bezel.
    pub outer_padding: f64,
    /// Margin between bezel and screen; also drives notch thickness.
    pub inner_padding: f64,
    /// Corner radius of the screen.
    pub inner_border_radius: f64,
}

impl DeviceSpec {
    /// Base (md, portrait) dimensions of the Apple iPhone mockup.
    pub const APPLE_IPHONE: Self = Self {
        height: 29.05,
        width: 14.05,
        corner_radius: 2.1,
        outer_padding: 0.075,
        inner_padding: 0.5,
        inner_border_radius: 1.75,
    };

    /// Fields in declaration order.
    pub const fn fields(&self) -> [f64; 6] {
        [
            self.height,
            self.width,
            self.corner_radius,
            self.outer_padding,
            self.inner_padding,
            self.inner_border_radius,
        ]
    }

    /// Applies `f` to every field.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            height: f(self.height),
            width: f(self.width),
            corner_radius: f(self.corner_radius),
            outer_padding: f(self.outer_padding),
            inner_padding: f(self.inner_padding),
            inner_border_radius: f(self.inner_border_radius),
        }
    }

    /// Returns the spec oriented for `rotation` (height and width swapped in landscape).
    #[must_use]
    pub const fn oriented(self, rotation: RotationMode) -> Self {
        match rotation {
            RotationMode::Portrait => self,
            RotationMode::Landscape => Self {
                height: self.width,
                width: self.height,
                ..self
            },
        }
    }

    /// Returns `true` when every field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for DeviceSpec {
    fn default() -> Self {
        Self::APPLE_IPHONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_swaps_only_height_and_width() {
        let spec = DeviceSpec::APPLE_IPHONE.oriented(RotationMode::Landscape);
        assert_eq!(spec.height, 14.05);
        assert_eq!(spec.width, 29.05);
        assert_eq!(spec.corner_radius, 2.1);
        assert_eq!(spec.inner_border_radius, 1.75);
    }

    #[test]
    fn camel_case_wire_names() {
        let json = serde_json::to_value(DeviceSpec::APPLE_IPHONE).unwrap();
        assert_eq!(json["cornerRadius"], 2.1);
        assert_eq!(json["innerBorderRadius"], 1.75);
    }

    #[test]
    fn negative_fields_are_invalid() {
        let spec = DeviceSpec {
            height: -1.0,
            ..DeviceSpec::APPLE_IPHONE
        };
        assert!(!spec.is_valid());
        assert!(DeviceSpec::APPLE_IPHONE.is_valid());
    }
}
