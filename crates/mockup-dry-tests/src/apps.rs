// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted [`App`] implementations for exercising the registry and composer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mockup_registry::{App, AppConfig, DeviceContext, FactoryError, ValidationReport};
use mockup_scene::{LayoutNode, NodeRole};

/// Accepts any config, then fails in the factory.
#[derive(Debug, Clone)]
pub struct FailingApp {
    /// Reason carried by the [`FactoryError`].
    pub reason: String,
}

impl FailingApp {
    /// App failing with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl App for FailingApp {
    fn validate(&self, _config: &AppConfig, _key: &str) -> ValidationReport {
        ValidationReport::ok()
    }

    fn render(&self, _config: &AppConfig, _ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        Err(FactoryError::new(self.reason.clone()))
    }
}

/// Accepts any config, then panics in the factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingApp;

impl PanickingApp {
    /// Panic payload.
    pub const MESSAGE: &'static str = "factory blew up";
}

impl App for PanickingApp {
    fn validate(&self, _config: &AppConfig, _key: &str) -> ValidationReport {
        ValidationReport::ok()
    }

    #[allow(clippy::panic)]
    fn render(&self, _config: &AppConfig, _ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        panic!("{}", Self::MESSAGE)
    }
}

/// Shared validate/render call counters.
#[derive(Debug, Clone, Default)]
pub struct CallCounts {
    validated: Arc<AtomicUsize>,
    rendered: Arc<AtomicUsize>,
}

impl CallCounts {
    /// Validator invocations.
    pub fn validated(&self) -> usize {
        self.validated.load(Ordering::SeqCst)
    }

    /// Factory invocations.
    pub fn rendered(&self) -> usize {
        self.rendered.load(Ordering::SeqCst)
    }
}

/// Requires a boolean `options.ok`, renders a single text node labelled with
/// the device context, and counts every call.
#[derive(Debug, Clone, Default)]
pub struct CountingApp {
    counts: CallCounts,
}

impl CountingApp {
    /// Fresh app with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to this app's counters; stays valid after the app is registered.
    pub fn counts(&self) -> CallCounts {
        self.counts.clone()
    }
}

impl App for CountingApp {
    fn validate(&self, config: &AppConfig, _key: &str) -> ValidationReport {
        self.counts.validated.fetch_add(1, Ordering::SeqCst);
        let mut report = ValidationReport::ok();
        report.require_bool("options.ok", config.option("ok"));
        report
    }

    fn render(&self, _config: &AppConfig, ctx: &DeviceContext) -> Result<LayoutNode, FactoryError> {
        self.counts.rendered.fetch_add(1, Ordering::SeqCst);
        let label = format!(
            "{}/{}/{}",
            ctx.color_mode.as_str(),
            ctx.size_tier.as_str(),
            ctx.rotation.as_str()
        );
        Ok(LayoutNode::new(NodeRole::AppRoot).child(LayoutNode::new(NodeRole::Text).text(label)))
    }
}
