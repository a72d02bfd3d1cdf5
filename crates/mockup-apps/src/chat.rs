// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chat screen layout shared by the built-in apps.
//!
//! Structure, top to bottom:
//! - header bar (portrait only, 15%)
//! - message list (80%, newest at the bottom via column-reverse flow)
//! - composer bar (7% portrait, 10% landscape)
//! - footer strip (portrait only, 5%, when the theme asks for it)

use mockup_registry::{ColorMode, DeviceContext};
use mockup_scene::{Align, ColorRgba8, Flow, Insets, LayoutNode, Length, NodeRole, Rounding, Stroke};

use crate::look::ChatLook;
use crate::message::{Media, MediaType, Message};

const CHROME_LIGHT: ColorRgba8 = ColorRgba8::hex(0xc0c0c0);
const CHROME_DARK: ColorRgba8 = ColorRgba8::hex(0x4e4e4e);
const INCOMING_FILL: ColorRgba8 = ColorRgba8::hex(0xe5e5ea);

/// Bubble corner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleShape {
    /// Same radius on all four corners.
    Round,
    /// Square corner on the sender's bottom side.
    Tailed,
}

/// How the composer field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerStyle {
    /// Bar in the list color; field outlined in the chrome color.
    Outlined,
    /// Bar in the chrome color; field filled in the list color.
    Filled,
}

/// Per-app styling of the shared chat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatTheme {
    /// Outgoing bubble fill.
    pub outgoing_fill: ColorRgba8,
    /// Bubble corners.
    pub bubble_shape: BubbleShape,
    /// Composer treatment.
    pub composer: ComposerStyle,
    /// Draw a footer strip under the composer in portrait.
    pub footer: bool,
}

/// Builds the full chat subtree for `messages`.
pub fn chat_screen(messages: &[Message<'_>], ctx: &DeviceContext, theme: &ChatTheme) -> LayoutNode {
    let look = ChatLook::for_context(ctx);
    let mode = ctx.color_mode;
    let mut root = LayoutNode::new(NodeRole::AppRoot)
        .size(Length::FULL, Length::FULL)
        .flow(Flow::Column, Align::Start, Align::Start);

    if ctx.is_portrait() {
        root = root.child(bar(NodeRole::Header, 15.0, chrome(mode)));
    }
    root = root
        .child(message_list(messages, ctx, &look, theme))
        .child(composer_bar(ctx, &look, theme));
    if theme.footer && ctx.is_portrait() {
        root = root.child(bar(NodeRole::Footer, 5.0, chrome(mode)));
    }
    root
}

fn chrome(mode: ColorMode) -> ColorRgba8 {
    mode.pick(CHROME_LIGHT, CHROME_DARK)
}

fn surface(mode: ColorMode) -> ColorRgba8 {
    mode.pick(ColorRgba8::WHITE, ColorRgba8::BLACK)
}

fn bar(role: NodeRole, height_percent: f64, fill: ColorRgba8) -> LayoutNode {
    LayoutNode::new(role)
        .size(Length::FULL, Length::Percent(height_percent))
        .fill(fill)
}

fn message_list(
    messages: &[Message<'_>],
    ctx: &DeviceContext,
    look: &ChatLook,
    theme: &ChatTheme,
) -> LayoutNode {
    let left = if ctx.is_portrait() {
        look.list_padding
    } else {
        look.list_padding_landscape_left
    };
    let mut list = LayoutNode::new(NodeRole::MessageList)
        .height(Length::Percent(80.0))
        .fill(surface(ctx.color_mode))
        .padding(Insets::all(look.list_padding).with_left(left))
        .flow(Flow::ColumnReverse, Align::Start, Align::Start)
        .children(messages.iter().map(|m| message_row(m, look, theme)));
    list.gap = look.messages_gap;
    list.scroll = true;
    list
}

fn message_row(message: &Message<'_>, look: &ChatLook, theme: &ChatTheme) -> LayoutNode {
    let justify = if message.is_outgoing {
        Align::End
    } else {
        Align::Start
    };
    LayoutNode::new(NodeRole::MessageRow)
        .flow(Flow::Row, justify, Align::Start)
        .child(bubble(message, look, theme))
}

fn bubble(message: &Message<'_>, look: &ChatLook, theme: &ChatTheme) -> LayoutNode {
    let (fill, fg) = if message.is_outgoing {
        (theme.outgoing_fill, ColorRgba8::WHITE)
    } else {
        (INCOMING_FILL, ColorRgba8::BLACK)
    };
    let mut node = LayoutNode::new(NodeRole::Bubble)
        .fill(fill)
        .foreground(fg)
        .rounding(bubble_rounding(theme.bubble_shape, message.is_outgoing, look.bubble_radius))
        .padding(Insets::symmetric(look.bubble_padding_x, look.bubble_padding_y))
        .flow(Flow::Column, Align::Start, Align::Start);
    node.max_width = Some(Length::Percent(75.0));
    node.max_height = Some(Length::Units(look.message_max_height));
    node.font_size = Some(look.font_size);
    node.scroll = true;
    if let Some(media) = &message.media {
        node = node.child(attachment(media, look));
    }
    node.child(LayoutNode::new(NodeRole::Text).text(message.text))
}

fn bubble_rounding(shape: BubbleShape, outgoing: bool, r: f64) -> Rounding {
    match shape {
        BubbleShape::Round => Rounding::Uniform(r),
        BubbleShape::Tailed => Rounding::Corners {
            top_left: r,
            top_right: r,
            bottom_right: if outgoing { 0.0 } else { r },
            bottom_left: if outgoing { r } else { 0.0 },
        },
    }
}

fn attachment(media: &Media, look: &ChatLook) -> LayoutNode {
    let role = match media.kind {
        MediaType::Image => NodeRole::Image,
        MediaType::Video => NodeRole::Video,
        MediaType::Audio => NodeRole::Audio,
        MediaType::Pdf => {
            return LayoutNode::new(NodeRole::Link)
                .source(media.url.as_str())
                .text("PDF attachment");
        }
    };
    let mut node = LayoutNode::new(role)
        .rounding(Rounding::Uniform(look.media_radius()))
        .source(media.url.as_str());
    node.max_width = Some(Length::FULL);
    node
}

fn composer_bar(ctx: &DeviceContext, look: &ChatLook, theme: &ChatTheme) -> LayoutNode {
    let mode = ctx.color_mode;
    let height = if ctx.is_portrait() { 7.0 } else { 10.0 };
    let (bar_fill, padding) = match theme.composer {
        ComposerStyle::Outlined => (
            surface(mode),
            Insets {
                bottom: look.bar_padding,
                ..Insets::ZERO
            },
        ),
        ComposerStyle::Filled => (chrome(mode), Insets::symmetric(0.0, look.bar_padding)),
    };
    let (justify, margin) = if ctx.is_portrait() {
        (Align::Center, Insets::ZERO)
    } else {
        (
            Align::Start,
            Insets::ZERO.with_left(look.field_margin_landscape_left),
        )
    };

    let mut field = LayoutNode::new(NodeRole::ComposerField)
        .size(Length::Percent(90.0), Length::Percent(80.0))
        .rounding(Rounding::Pill)
        .margin(margin);
    match theme.composer {
        ComposerStyle::Outlined => {
            field.stroke = Some(Stroke {
                width: look.field_stroke,
                color: chrome(mode),
            });
        }
        ComposerStyle::Filled => field = field.fill(surface(mode)),
    }

    bar(NodeRole::ComposerBar, height, bar_fill)
        .padding(padding)
        .flow(Flow::Row, justify, Align::Start)
        .child(field)
}
