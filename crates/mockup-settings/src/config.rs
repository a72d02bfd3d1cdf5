// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port and JSON service for settings blobs.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::prefs::{DevicePrefs, PREFS_KEY};

/// Byte storage keyed by logical name.
pub trait ConfigStore {
    /// Raw blob for `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Writes `data` under `key`, replacing any previous blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failures while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No blob stored under the key.
    #[error("not found")]
    NotFound,
    /// Storage I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Blob is not valid JSON for the requested type.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Decoded value violates a domain rule.
    #[error("invalid settings: {0}")]
    Invalid(String),
    /// Adapter-specific failure.
    #[error("other: {0}")]
    Other(String),
}

/// Typed JSON access over a [`ConfigStore`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ConfigStore> ConfigService<S> {
    /// Decodes the value under `key`. Missing or empty blobs are `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Encodes `value` as pretty JSON under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Saved device preferences, rejecting an invalid base spec.
    pub fn load_prefs(&self) -> Result<Option<DevicePrefs>, ConfigError> {
        let prefs: Option<DevicePrefs> = self.load(PREFS_KEY)?;
        if let Some(prefs) = &prefs {
            prefs.check()?;
        }
        Ok(prefs)
    }

    /// Persists device preferences under [`PREFS_KEY`].
    pub fn save_prefs(&self, prefs: &DevicePrefs) -> Result<(), ConfigError> {
        prefs.check()?;
        self.save(PREFS_KEY, prefs)
    }
}
