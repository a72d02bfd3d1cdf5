// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Selects a pluggable app and carries its opaque per-app options.
///
/// Both fields are optional on the wire so that a malformed payload still
/// deserializes and can be reported with a typed error instead of a parse
/// failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Registered app name, e.g. `"Whatsapp"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// App-specific payload; validated by the app before use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl AppConfig {
    /// Config for `name` with `options`.
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: Some(name.into()),
            options: Some(options),
        }
    }

    /// Trimmed app name, or `None` when absent or blank.
    pub fn app_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Option value at `key`, when `options` is an object holding it.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref()?.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_counts_as_missing() {
        let config = AppConfig {
            name: Some("   ".into()),
            options: None,
        };
        assert_eq!(config.app_name(), None);
        assert_eq!(AppConfig::default().app_name(), None);
    }

    #[test]
    fn deserializes_without_options() {
        let config: AppConfig = serde_json::from_value(json!({ "name": "Whatsapp" })).unwrap();
        assert_eq!(config.app_name(), Some("Whatsapp"));
        assert!(config.options.is_none());
        assert!(config.option("messages").is_none());
    }
}
