// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use mockup_composer::DeviceConfig;
use mockup_geom::SizeTier;
use mockup_settings::{ConfigError, ConfigService, ConfigStore, DevicePrefs, PREFS_KEY};
use mockup_settings_fs::FsConfigStore;

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("nothing"), Err(ConfigError::NotFound)));
}

#[test]
fn creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsConfigStore::at(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested.as_path());
}

#[test]
fn prefs_are_written_as_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let service = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    let prefs = DevicePrefs {
        device: DeviceConfig {
            size_tier: SizeTier::Sm,
            ..DeviceConfig::default()
        },
        ..DevicePrefs::default()
    };
    service.save_prefs(&prefs).unwrap();

    let path = service.store().path_for(PREFS_KEY);
    assert_eq!(path, dir.path().join("device_prefs.json"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"sizeTier\": \"sm\""), "{text}");

    let reopened = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    assert_eq!(reopened.load_prefs().unwrap(), Some(prefs));
}
