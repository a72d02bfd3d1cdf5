// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persistent settings for mockup tools.
//!
//! [`config::ConfigService`] serializes values as JSON and delegates bytes to a
//! [`config::ConfigStore`]. Adapters (filesystem, in-memory) live in other crates.

pub mod config;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use prefs::{DevicePrefs, PREFS_KEY};
