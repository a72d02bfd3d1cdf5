// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for mockup crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`apps`] - Scripted apps that fail, panic, or count their calls
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Device contexts, chat messages and registries

pub mod apps;
pub mod config;
pub mod fixtures;

pub use apps::{CallCounts, CountingApp, FailingApp, PanickingApp};
pub use config::InMemoryConfigStore;
pub use fixtures::{
    builtin_registry, chat_config, context, dark_landscape, iphone_spec, light_portrait,
    media_message, sample_messages, text_message,
};
