// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::sync::Arc;

use mockup_geom::{compute, DeviceSpec};
use mockup_registry::{AppConfig, AppRegistry};
use tracing::{debug, warn};

use crate::chrome;
use crate::descriptor::RenderDescriptor;
use crate::device::DeviceConfig;

/// Combines a base device spec with apps from a shared registry.
#[derive(Debug, Clone)]
pub struct DeviceComposer {
    base: DeviceSpec,
    registry: Arc<AppRegistry>,
}

impl DeviceComposer {
    /// Composer over `base` geometry and `registry`.
    pub fn new(base: DeviceSpec, registry: Arc<AppRegistry>) -> Self {
        Self { base, registry }
    }

    /// Base (unscaled, portrait) geometry.
    pub fn base(&self) -> &DeviceSpec {
        &self.base
    }

    /// Registry apps are resolved from.
    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Builds the render descriptor for `device` and an optional app.
    ///
    /// Never fails. A resolution error is logged at `warn`, stored in
    /// [`RenderDescriptor::error`], and the device renders without an app.
    pub fn compose(&self, device: &DeviceConfig, app: Option<&AppConfig>) -> RenderDescriptor {
        let dimensions = compute(self.base, device.size_tier, device.rotation);
        let chrome = chrome::build(&dimensions, device);

        let (app, error) = match app {
            None => (None, None),
            Some(config) => match self.registry.resolve(config, &device.context()) {
                Ok(instance) => (Some(instance), None),
                Err(err) => {
                    warn!(
                        app = config.app_name().unwrap_or("<none>"),
                        error = %err,
                        "app dropped from mockup"
                    );
                    (None, Some(err))
                }
            },
        };

        debug!(
            size_tier = device.size_tier.as_str(),
            rotation = device.rotation.as_str(),
            color_mode = device.color_mode.as_str(),
            has_app = app.is_some(),
            "composed device"
        );

        RenderDescriptor {
            dimensions,
            color_mode: device.color_mode,
            size_tier: device.size_tier,
            rotation: device.rotation,
            chrome,
            app,
            error,
        }
    }
}
