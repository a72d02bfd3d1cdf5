// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name-keyed app table and resolution.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use mockup_scene::LayoutNode;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::context::DeviceContext;
use crate::descriptor::{App, AppDescriptor, AppInstance, FactoryError};
use crate::validation::ValidationReport;
use crate::ResolveError;

/// Name-keyed table of app descriptors.
///
/// Registration is last-write-wins. A single `RwLock` excludes registration
/// from resolution, so a reader never observes a half-written entry; reads
/// run concurrently. Validators and factories execute outside the lock.
#[derive(Debug, Default)]
pub struct AppRegistry {
    apps: RwLock<BTreeMap<String, Arc<AppDescriptor>>>,
}

impl AppRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `validator` and `factory` under `name`.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn register<V, F>(&self, name: impl Into<String>, validator: V, factory: F) -> bool
    where
        V: Fn(&AppConfig, &str) -> ValidationReport + Send + Sync + 'static,
        F: Fn(&AppConfig, &DeviceContext) -> Result<LayoutNode, FactoryError> + Send + Sync + 'static,
    {
        self.insert(name, AppDescriptor::new(validator, factory))
    }

    /// Registers an [`App`] implementation under `name`.
    pub fn register_app<A: App + 'static>(&self, name: impl Into<String>, app: A) -> bool {
        self.insert(name, AppDescriptor::from_app(app))
    }

    /// Stores `descriptor` under `name`, replacing any previous entry.
    ///
    /// Keys are trimmed the same way [`AppConfig::app_name`] trims lookups. A
    /// blank name could never be resolved, so it is not stored and `false` is
    /// returned.
    pub fn insert(&self, name: impl Into<String>, descriptor: AppDescriptor) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            warn!("ignored app registration with a blank name");
            return false;
        }
        let mut apps = self.apps.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = apps.insert(name.to_owned(), Arc::new(descriptor)).is_some();
        drop(apps);
        if replaced {
            debug!(app = %name, "replaced registered app");
        } else {
            debug!(app = %name, "registered app");
        }
        replaced
    }

    /// Returns `true` if `name` (trimmed) is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name.trim())
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of registered apps.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Resolves `config` into a rendered app.
    ///
    /// # Errors
    /// - [`ResolveError::ConfigMissing`] when `config` has no name.
    /// - [`ResolveError::AppNotFound`] when the name is not registered.
    /// - [`ResolveError::Validation`] when the validator reports violations.
    /// - [`ResolveError::AppRender`] when the factory fails or panics.
    pub fn resolve(&self, config: &AppConfig, ctx: &DeviceContext) -> Result<AppInstance, ResolveError> {
        let name = config.app_name().ok_or(ResolveError::ConfigMissing)?;
        let descriptor = self
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::AppNotFound {
                name: name.to_owned(),
            })?;

        let report = descriptor.validate(config, name);
        if !report.is_ok() {
            return Err(ResolveError::Validation {
                app: name.to_owned(),
                report,
            });
        }

        let root = match catch_unwind(AssertUnwindSafe(|| descriptor.build(config, ctx))) {
            Ok(Ok(root)) => root,
            Ok(Err(err)) => {
                return Err(ResolveError::AppRender {
                    app: name.to_owned(),
                    reason: err.to_string(),
                })
            }
            Err(payload) => {
                return Err(ResolveError::AppRender {
                    app: name.to_owned(),
                    reason: panic_reason(payload.as_ref()),
                })
            }
        };

        debug!(app = %name, tier = %ctx.size_tier, rotation = %ctx.rotation, "resolved app");
        Ok(AppInstance {
            name: name.to_owned(),
            root,
        })
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, Arc<AppDescriptor>>> {
        self.apps.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("factory panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("factory panicked: {msg}")
    } else {
        "factory panicked".to_owned()
    }
}
