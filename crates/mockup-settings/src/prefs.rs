// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved defaults for rendering a device mockup.

use mockup_composer::DeviceConfig;
use mockup_geom::DeviceSpec;
use mockup_registry::AppConfig;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Store key for [`DevicePrefs`].
pub const PREFS_KEY: &str = "device_prefs";

/// Defaults applied when a render request leaves settings out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevicePrefs {
    /// Device settings.
    pub device: DeviceConfig,
    /// Unscaled portrait geometry.
    pub base_spec: DeviceSpec,
    /// App rendered when none is named explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppConfig>,
}

impl DevicePrefs {
    /// Rejects a base spec with non-finite or negative lengths.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.base_spec.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(
                "baseSpec lengths must be finite and non-negative".into(),
            ))
        }
    }
}
