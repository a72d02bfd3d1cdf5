// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Device chrome: frame, bezel, screen and sensor notch.
//!
//! Nesting: `Frame > Bezel > Screen > [AppSlot, SensorNotch]`. All lengths
//! come from the scaled [`DeviceSpec`]; only percentages are fixed.

use mockup_geom::{scale, DeviceSpec, RotationMode};
use mockup_registry::ColorMode;
use mockup_scene::{
    Align, ColorRgba8, Flow, Insets, LayoutNode, Length, NodeRole, Position, Rounding, Shadow,
};

use crate::device::DeviceConfig;

const FRAME_LIGHT: ColorRgba8 = ColorRgba8::hex(0xebebeb);
const BEZEL_DARK: ColorRgba8 = ColorRgba8::hex(0x1a1a1a);
const SCREEN_LIGHT: ColorRgba8 = ColorRgba8::hex(0x191919);
const SCREEN_DARK: ColorRgba8 = ColorRgba8::hex(0x404040);
const SHADOW_BLUR: f64 = 1.5;

/// Placement of the sensor notch inside the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchGeometry {
    /// Offset from the screen's top edge.
    pub top: Length,
    /// Offset from the screen's left edge.
    pub left: Length,
    /// Notch width.
    pub width: Length,
    /// Notch height.
    pub height: Length,
    /// Extra top margin (portrait only).
    pub margin_top: f64,
}

impl NotchGeometry {
    /// Notch for scaled `dims` in `rotation`.
    ///
    /// Portrait: a bar across the top, 30% wide, `2 * inner_padding` tall.
    /// Landscape: a bar down the left side, 30% tall, `2 * inner_padding` wide.
    pub fn for_device(dims: &DeviceSpec, rotation: RotationMode) -> Self {
        let thickness = Length::Units(dims.inner_padding * 2.0);
        match rotation {
            RotationMode::Portrait => Self {
                top: Length::Units(0.0),
                left: Length::Percent(35.0),
                width: Length::Percent(30.0),
                height: thickness,
                margin_top: dims.inner_padding,
            },
            RotationMode::Landscape => Self {
                top: Length::Percent(35.0),
                left: Length::Units(dims.inner_padding),
                width: thickness,
                height: Length::Percent(30.0),
                margin_top: 0.0,
            },
        }
    }
}

/// Builds the chrome tree for scaled `dims`. The screen holds an empty
/// [`NodeRole::AppSlot`] ahead of the notch.
pub fn build(dims: &DeviceSpec, device: &DeviceConfig) -> LayoutNode {
    let mode = device.color_mode;
    let bezel_fill = mode.pick(ColorRgba8::BLACK, BEZEL_DARK);

    let notch = NotchGeometry::for_device(dims, device.rotation);
    let notch = LayoutNode::new(NodeRole::SensorNotch)
        .size(notch.width, notch.height)
        .position(Position::Absolute {
            top: notch.top,
            left: notch.left,
        })
        .margin(Insets::ZERO.with_top(notch.margin_top))
        .rounding(Rounding::Pill)
        .fill(bezel_fill);

    let slot = LayoutNode::new(NodeRole::AppSlot)
        .size(Length::FULL, Length::FULL)
        .flow(Flow::Column, Align::Start, Align::Start);

    let mut screen = LayoutNode::new(NodeRole::Screen)
        .size(Length::FULL, Length::Auto)
        .margin(Insets::all(dims.inner_padding))
        .rounding(Rounding::Uniform(dims.inner_border_radius))
        .fill(mode.pick(SCREEN_LIGHT, SCREEN_DARK))
        .flow(Flow::Column, Align::SpaceBetween, Align::Start)
        .child(slot)
        .child(notch);
    screen.clip = true;

    let bezel = LayoutNode::new(NodeRole::Bezel)
        .size(Length::FULL, Length::FULL)
        .rounding(Rounding::Uniform(dims.corner_radius))
        .fill(bezel_fill)
        .child(screen);

    let mut frame = LayoutNode::new(NodeRole::Frame)
        .size(Length::Units(dims.width), Length::Units(dims.height))
        .padding(Insets::all(dims.outer_padding))
        .rounding(Rounding::Uniform(dims.corner_radius))
        .fill(mode.pick(FRAME_LIGHT, ColorRgba8::WHITE))
        .flow(Flow::Row, Align::Center, Align::Center)
        .child(bezel);
    if device.box_shadow_enabled && mode == ColorMode::Light {
        frame.shadow = Some(Shadow {
            blur: scale(SHADOW_BLUR, device.size_tier),
            color: ColorRgba8::BLACK.with_alpha(128),
        });
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_geom::{compute, SizeTier};

    #[test]
    fn landscape_notch_runs_down_the_left_side() {
        let dims = compute(DeviceSpec::APPLE_IPHONE, SizeTier::Md, RotationMode::Landscape);
        let notch = NotchGeometry::for_device(&dims, RotationMode::Landscape);
        assert_eq!(notch.width, Length::Units(1.0));
        assert_eq!(notch.height, Length::Percent(30.0));
        assert_eq!(notch.left, Length::Units(0.5));
        assert_eq!(notch.margin_top, 0.0);
    }

    #[test]
    fn shadow_only_in_light_mode_when_enabled() {
        let dims = DeviceSpec::APPLE_IPHONE;
        let light = build(&dims, &DeviceConfig::default());
        assert!(light.shadow.is_some());

        let dark = build(
            &dims,
            &DeviceConfig {
                color_mode: ColorMode::Dark,
                ..DeviceConfig::default()
            },
        );
        assert!(dark.shadow.is_none());

        let disabled = build(
            &dims,
            &DeviceConfig {
                box_shadow_enabled: false,
                ..DeviceConfig::default()
            },
        );
        assert!(disabled.shadow.is_none());
    }

    #[test]
    fn screen_holds_slot_then_notch() {
        let frame = build(&DeviceSpec::APPLE_IPHONE, &DeviceConfig::default());
        let screen = frame.find(NodeRole::Screen).unwrap();
        let roles: Vec<NodeRole> = screen.children.iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![NodeRole::AppSlot, NodeRole::SensorNotch]);
        assert!(screen.clip);
    }
}
