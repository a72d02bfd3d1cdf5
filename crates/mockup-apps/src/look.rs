// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalable look parameters of the chat screen.

use mockup_registry::DeviceContext;

/// Lengths used by the chat layout, in abstract units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatLook {
    /// Gap between consecutive messages.
    pub messages_gap: f64,
    /// Bubble font size.
    pub font_size: f64,
    /// Bubble height cap; taller bubbles scroll.
    pub message_max_height: f64,
    /// Horizontal bubble padding.
    pub bubble_padding_x: f64,
    /// Vertical bubble padding.
    pub bubble_padding_y: f64,
    /// Bubble corner radius.
    pub bubble_radius: f64,
    /// Message list padding.
    pub list_padding: f64,
    /// Message list left padding in landscape (clears the side notch).
    pub list_padding_landscape_left: f64,
    /// Vertical padding of the composer bar.
    pub bar_padding: f64,
    /// Composer field left margin in landscape.
    pub field_margin_landscape_left: f64,
    /// Outline width of an outlined composer field.
    pub field_stroke: f64,
}

impl ChatLook {
    /// Unscaled (md) values.
    pub const BASE: Self = Self {
        messages_gap: 0.5,
        font_size: 0.8,
        message_max_height: 5.0,
        bubble_padding_x: 0.5,
        bubble_padding_y: 0.25,
        bubble_radius: 1.0,
        list_padding: 1.0,
        list_padding_landscape_left: 2.0,
        bar_padding: 0.5,
        field_margin_landscape_left: 2.0,
        field_stroke: 0.1,
    };

    /// Media corner radius relative to the bubble radius.
    pub const MEDIA_RADIUS_FACTOR: f64 = 0.8;

    /// [`ChatLook::BASE`] scaled for `ctx`.
    pub fn for_context(ctx: &DeviceContext) -> Self {
        let s = |v: f64| ctx.scale(v);
        let base = Self::BASE;
        Self {
            messages_gap: s(base.messages_gap),
            font_size: s(base.font_size),
            message_max_height: s(base.message_max_height),
            bubble_padding_x: s(base.bubble_padding_x),
            bubble_padding_y: s(base.bubble_padding_y),
            bubble_radius: s(base.bubble_radius),
            list_padding: s(base.list_padding),
            list_padding_landscape_left: s(base.list_padding_landscape_left),
            bar_padding: s(base.bar_padding),
            field_margin_landscape_left: s(base.field_margin_landscape_left),
            field_stroke: s(base.field_stroke),
        }
    }

    /// Corner radius for media inside a bubble.
    pub fn media_radius(&self) -> f64 {
        self.bubble_radius * Self::MEDIA_RADIUS_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockup_geom::{RotationMode, SizeTier};
    use mockup_registry::ColorMode;

    fn ctx(tier: SizeTier) -> DeviceContext {
        DeviceContext {
            color_mode: ColorMode::Light,
            size_tier: tier,
            rotation: RotationMode::Portrait,
        }
    }

    #[test]
    fn md_is_base() {
        assert_eq!(ChatLook::for_context(&ctx(SizeTier::Md)), ChatLook::BASE);
    }

    #[test]
    fn xl_triples_horizontal_padding_independently_of_vertical() {
        let look = ChatLook::for_context(&ctx(SizeTier::Xl));
        assert_eq!(look.bubble_padding_x, 1.5);
        assert_eq!(look.bubble_padding_y, 0.75);
    }
}
