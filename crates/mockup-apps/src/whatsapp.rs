// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! WhatsApp-style chat: green tailed bubbles, filled composer, media attachments.

use mockup_registry::{App, AppConfig, DeviceContext, FactoryError, ValidationReport};
use mockup_scene::{ColorRgba8, LayoutNode};

use crate::chat::{chat_screen, BubbleShape, ChatTheme, ComposerStyle};
use crate::message::{parse_messages, validate_chat_config, MediaSupport};

/// Chat app supporting image, video, audio and PDF attachments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whatsapp;

impl Whatsapp {
    /// Registered name.
    pub const NAME: &'static str = "Whatsapp";

    /// Styling applied to the shared chat layout.
    pub const THEME: ChatTheme = ChatTheme {
        outgoing_fill: ColorRgba8::hex(0x25d366),
        bubble_shape: BubbleShape::Tailed,
        composer: ComposerStyle::Filled,
        footer: false,
    };
}

impl App for Whatsapp {
    fn validate(&self, config: &AppConfig, key: &str) -> ValidationReport {
        validate_chat_config(config, key, MediaSupport::Attachments)
    }

    fn render(&self, config: &AppConfig, ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        let messages = parse_messages(config, MediaSupport::Attachments)?;
        Ok(chat_screen(&messages, ctx, &Self::THEME))
    }
}
