// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ready-made inputs: device contexts, chat payloads and registries.

use std::sync::Arc;

use mockup_geom::{DeviceSpec, RotationMode, SizeTier};
use mockup_registry::{AppConfig, AppRegistry, ColorMode, DeviceContext};
use serde_json::{json, Value};

/// The built-in phone geometry.
pub fn iphone_spec() -> DeviceSpec {
    DeviceSpec::APPLE_IPHONE
}

/// Context from its three parts.
pub fn context(color_mode: ColorMode, size_tier: SizeTier, rotation: RotationMode) -> DeviceContext {
    DeviceContext {
        color_mode,
        size_tier,
        rotation,
    }
}

/// Light, md, portrait.
pub fn light_portrait() -> DeviceContext {
    context(ColorMode::Light, SizeTier::Md, RotationMode::Portrait)
}

/// Dark, md, landscape.
pub fn dark_landscape() -> DeviceContext {
    context(ColorMode::Dark, SizeTier::Md, RotationMode::Landscape)
}

/// A text-only chat message.
pub fn text_message(text: &str, is_outgoing: bool) -> Value {
    json!({ "isOutgoing": is_outgoing, "text": text })
}

/// A chat message with an attachment.
pub fn media_message(text: &str, is_outgoing: bool, url: &str, media_type: &str) -> Value {
    json!({
        "isOutgoing": is_outgoing,
        "text": text,
        "mediaUrl": url,
        "mediaType": media_type,
    })
}

/// Three-message conversation, newest first.
pub fn sample_messages() -> Value {
    json!([
        text_message("See you at eight", true),
        text_message("Dinner tonight?", false),
        text_message("hey", false),
    ])
}

/// Chat app config for `name` holding `messages`.
pub fn chat_config(name: &str, messages: Value) -> AppConfig {
    AppConfig::new(name, json!({ "messages": messages }))
}

/// Registry with the built-in chat apps.
pub fn builtin_registry() -> Arc<AppRegistry> {
    Arc::new(mockup_apps::builtin_registry())
}
