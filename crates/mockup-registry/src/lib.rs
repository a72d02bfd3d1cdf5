// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Registry of pluggable mockup apps.
//!
//! An app is registered under a unique name as a validator/factory pair.
//! Resolution looks the name up, validates the supplied [`AppConfig`]
//! structurally and asks the factory for a layout subtree. Every failure is
//! returned as a typed [`ResolveError`]; a panicking factory is caught at the
//! registry boundary.
//!
//! Apps hold no state across calls. Configs are borrowed for the duration of
//! a call and never mutated.

use serde::Serialize;
use thiserror::Error;

mod config;
mod context;
mod descriptor;
mod registry;
mod validation;

pub use config::AppConfig;
pub use context::{ColorMode, DeviceContext};
pub use descriptor::{App, AppDescriptor, AppInstance, FactoryError};
pub use registry::AppRegistry;
pub use validation::{Problem, ValidationReport, Violation};

/// Error returned by [`AppRegistry::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolveError {
    /// The config carries no (or a blank) `name`.
    #[error("app config has no name")]
    ConfigMissing,
    /// No app is registered under the requested name.
    #[error("app not found: {name}")]
    AppNotFound {
        /// Requested app name.
        name: String,
    },
    /// The config does not match the app's schema.
    #[error("invalid config for {app}: {report}")]
    Validation {
        /// App whose validator rejected the config.
        app: String,
        /// Every violated field.
        report: ValidationReport,
    },
    /// The factory failed after validation passed.
    #[error("app {app} failed to render: {reason}")]
    AppRender {
        /// App whose factory failed.
        app: String,
        /// Failure reported by the factory (or its panic message).
        reason: String,
    },
}
