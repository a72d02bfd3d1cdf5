// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use mockup_composer::{DeviceComposer, DeviceConfig, RenderDescriptor};
use mockup_dry_tests::{builtin_registry, chat_config, iphone_spec, text_message};
use mockup_registry::AppConfig;
use serde_json::json;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Composes with a warn-level fmt subscriber installed; returns the output and the log.
fn compose_logged(app: Option<&AppConfig>) -> (RenderDescriptor, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    let composer = DeviceComposer::new(iphone_spec(), builtin_registry());
    let out = tracing::subscriber::with_default(subscriber, || {
        composer.compose(&DeviceConfig::default(), app)
    });
    (out, captured.text())
}

#[test]
fn dropped_app_is_logged_at_warn() {
    let (out, log) = compose_logged(Some(&chat_config("Telegram", json!([]))));
    assert!(out.error.is_some());
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("app dropped from mockup"), "{log}");
    assert!(log.contains("Telegram"), "{log}");
    assert!(log.contains("app not found"), "{log}");
}

#[test]
fn successful_compositions_stay_quiet_at_warn() {
    let config = chat_config("Whatsapp", json!([text_message("hi", true)]));
    let (out, log) = compose_logged(Some(&config));
    assert!(out.app.is_some());
    assert!(log.is_empty(), "{log}");

    let (_, log) = compose_logged(None);
    assert!(log.is_empty(), "{log}");
}
