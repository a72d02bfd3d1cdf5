// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Built-in chat apps for device mockups.
//!
//! Both apps share one chat screen layout ([`chat`]) and one message schema
//! ([`message`]); they differ only in their [`chat::ChatTheme`]. All lengths
//! scale through [`mockup_geom::scale`] so the apps track the device chrome.

pub mod chat;
pub mod look;
pub mod message;
pub mod messenger;
pub mod whatsapp;

use mockup_registry::AppRegistry;

pub use messenger::BuiltInMessenger;
pub use whatsapp::Whatsapp;

/// Registers every built-in app on `registry`.
pub fn register_builtin_apps(registry: &AppRegistry) {
    registry.register_app(BuiltInMessenger::NAME, BuiltInMessenger);
    registry.register_app(Whatsapp::NAME, Whatsapp);
}

/// A fresh registry holding the built-in apps.
pub fn builtin_registry() -> AppRegistry {
    let registry = AppRegistry::new();
    register_builtin_apps(&registry);
    registry
}
