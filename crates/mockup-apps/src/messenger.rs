// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The stock messaging app: blue bubbles, outlined composer, footer strip.

use mockup_registry::{App, AppConfig, DeviceContext, FactoryError, ValidationReport};
use mockup_scene::{ColorRgba8, LayoutNode};

use crate::chat::{chat_screen, BubbleShape, ChatTheme, ComposerStyle};
use crate::message::{parse_messages, validate_chat_config, MediaSupport};

/// Text-only chat app with the platform's own look.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInMessenger;

impl BuiltInMessenger {
    /// Registered name.
    pub const NAME: &'static str = "BuiltInMessenger";

    /// Styling applied to the shared chat layout.
    pub const THEME: ChatTheme = ChatTheme {
        outgoing_fill: ColorRgba8::hex(0x007aff),
        bubble_shape: BubbleShape::Round,
        composer: ComposerStyle::Outlined,
        footer: true,
    };
}

impl App for BuiltInMessenger {
    fn validate(&self, config: &AppConfig, key: &str) -> ValidationReport {
        validate_chat_config(config, key, MediaSupport::TextOnly)
    }

    fn render(&self, config: &AppConfig, ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        let messages = parse_messages(config, MediaSupport::TextOnly)?;
        Ok(chat_screen(&messages, ctx, &Self::THEME))
    }
}
