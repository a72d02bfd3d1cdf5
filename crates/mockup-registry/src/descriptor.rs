// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! App capability interface and the type-erased descriptor stored in the registry.

use std::fmt;
use std::sync::Arc;

use mockup_scene::LayoutNode;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::context::DeviceContext;
use crate::validation::ValidationReport;

/// Failure raised by an app factory after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FactoryError {
    reason: String,
}

impl FactoryError {
    /// Factory failure with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason given by the factory.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A resolved app: its registered name and rendered subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInstance {
    /// Name the app was resolved under.
    pub name: String,
    /// Root of the app's layout subtree.
    pub root: LayoutNode,
}

/// Capability interface implemented by pluggable apps.
///
/// Implementations must be stateless: identical inputs yield identical trees.
pub trait App: Send + Sync {
    /// Structural check of `config`, resolved under the registered name `key`.
    fn validate(&self, config: &AppConfig, key: &str) -> ValidationReport;

    /// Builds the app subtree. Only called after `validate` returned ok.
    fn render(&self, config: &AppConfig, ctx: &DeviceContext) -> Result<LayoutNode, FactoryError>;
}

type ValidatorFn = dyn Fn(&AppConfig, &str) -> ValidationReport + Send + Sync;
type FactoryFn = dyn Fn(&AppConfig, &DeviceContext) -> Result<LayoutNode, FactoryError> + Send + Sync;

/// Validator/factory pair stored under an app name.
#[derive(Clone)]
pub struct AppDescriptor {
    validator: Arc<ValidatorFn>,
    factory: Arc<FactoryFn>,
}

impl AppDescriptor {
    /// Descriptor from a validator and a factory.
    ///
    /// The validator receives the key the descriptor is registered under.
    pub fn new<V, F>(validator: V, factory: F) -> Self
    where
        V: Fn(&AppConfig, &str) -> ValidationReport + Send + Sync + 'static,
        F: Fn(&AppConfig, &DeviceContext) -> Result<LayoutNode, FactoryError> + Send + Sync + 'static,
    {
        Self {
            validator: Arc::new(validator),
            factory: Arc::new(factory),
        }
    }

    /// Descriptor backed by an [`App`] implementation.
    pub fn from_app<A: App + 'static>(app: A) -> Self {
        let app = Arc::new(app);
        let for_factory = Arc::clone(&app);
        Self::new(
            move |config, key| app.validate(config, key),
            move |config, ctx| for_factory.render(config, ctx),
        )
    }

    /// Runs the validator for an entry registered under `key`.
    pub fn validate(&self, config: &AppConfig, key: &str) -> ValidationReport {
        (self.validator)(config, key)
    }

    /// Runs the factory.
    pub fn build(&self, config: &AppConfig, ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        (self.factory)(config, ctx)
    }
}

impl fmt::Debug for AppDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppDescriptor").finish_non_exhaustive()
    }
}
