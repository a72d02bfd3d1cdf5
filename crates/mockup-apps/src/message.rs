// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chat message schema shared by the built-in apps.
//!
//! Wire shape: `options.messages` is an array of
//! `{ isOutgoing: bool, text: string, mediaUrl?: string, mediaType?: "image"|"video"|"audio"|"pdf" }`.

use mockup_registry::{AppConfig, FactoryError, ValidationReport};
use serde_json::Value;

/// Accepted `mediaType` values.
pub const MEDIA_TYPES: &[&str] = &["image", "video", "audio", "pdf"];

/// Kind of attachment carried by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Inline image.
    Image,
    /// Inline video with controls.
    Video,
    /// Inline audio with controls.
    Audio,
    /// Downloadable PDF link.
    Pdf,
}

impl MediaType {
    /// Exact lookup of a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Attachment: a URL and how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Attachment URL, passed through untouched.
    pub url: String,
    /// Presentation kind.
    pub kind: MediaType,
}

/// One chat message, borrowed from the caller's config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    /// Sent by the device owner.
    pub is_outgoing: bool,
    /// Message body.
    pub text: &'a str,
    /// Attachment, when the app supports media and both fields are set.
    pub media: Option<Media>,
}

/// Whether an app accepts attachment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSupport {
    /// `mediaUrl`/`mediaType` are ignored.
    TextOnly,
    /// `mediaUrl`/`mediaType` are validated and rendered.
    Attachments,
}

/// Structural check of a chat app config resolved under the registered `key`.
pub fn validate_chat_config(
    config: &AppConfig,
    key: &str,
    media: MediaSupport,
) -> ValidationReport {
    let mut report = ValidationReport::ok();
    report.check_name(config, key);
    let Some(options) = report.require_object("options", config.options.as_ref()) else {
        return report;
    };
    let Some(messages) = report.require_array("options.messages", options.get("messages")) else {
        return report;
    };
    for (i, message) in messages.iter().enumerate() {
        let path = format!("options.messages[{i}]");
        let Some(fields) = report.require_object(&path, Some(message)) else {
            continue;
        };
        report.require_bool(&format!("{path}.isOutgoing"), fields.get("isOutgoing"));
        report.require_string(&format!("{path}.text"), fields.get("text"));
        if media == MediaSupport::Attachments {
            report.optional_string(&format!("{path}.mediaUrl"), fields.get("mediaUrl"));
            report.optional_one_of(&format!("{path}.mediaType"), fields.get("mediaType"), MEDIA_TYPES);
        }
    }
    report
}

/// Reads the messages of a validated chat config.
pub fn parse_messages(config: &AppConfig, media: MediaSupport) -> Result<Vec<Message<'_>>, FactoryError> {
    let messages = config
        .option("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| FactoryError::new("options.messages is not an array"))?;
    messages
        .iter()
        .enumerate()
        .map(|(i, value)| parse_message(i, value, media))
        .collect()
}

fn parse_message(index: usize, value: &Value, media: MediaSupport) -> Result<Message<'_>, FactoryError> {
    let is_outgoing = value
        .get("isOutgoing")
        .and_then(Value::as_bool)
        .ok_or_else(|| FactoryError::new(format!("message {index}: isOutgoing is not a boolean")))?;
    let text = value
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| FactoryError::new(format!("message {index}: text is not a string")))?;
    let media = match media {
        MediaSupport::TextOnly => None,
        MediaSupport::Attachments => {
            let url = value.get("mediaUrl").and_then(Value::as_str).filter(|u| !u.is_empty());
            let kind = value
                .get("mediaType")
                .and_then(Value::as_str)
                .and_then(MediaType::from_name);
            url.zip(kind).map(|(url, kind)| Media {
                url: url.to_owned(),
                kind,
            })
        }
    };
    Ok(Message {
        is_outgoing,
        text,
        media,
    })
}
