use std::fs;

use chargingled::prefs::{FilePreferences, PreferenceStore, KEY_CHARGING_LED};
use chargingled::settings::ChargingLedSetting;
use chargingled::sysfs;
use tempfile::tempdir;

#[test]
fn toggle_then_restore_after_reboot() {
    let dir = tempdir().unwrap();
    let node = dir.path().join("gpio168").join("value");
    fs::create_dir_all(node.parent().unwrap()).unwrap();
    fs::write(&node, "0").unwrap();
    let prefs_path = dir.path().join("prefs.toml");

    let mut prefs = FilePreferences::load(&prefs_path);
    prefs.set_bool(KEY_CHARGING_LED, true).unwrap();

    let mut setting = ChargingLedSetting::new(prefs, &node);
    assert!(setting.is_enabled());
    assert!(setting.is_checked());

    assert!(setting.toggle(false));
    assert_eq!(fs::read_to_string(&node).unwrap(), "1");

    // the kernel resets the line on power-up
    fs::write(&node, "0").unwrap();

    let prefs = FilePreferences::load(&prefs_path);
    assert!(!prefs.get_bool(KEY_CHARGING_LED, true));
    assert!(ChargingLedSetting::restore(&prefs, &node).unwrap());
    assert_eq!(fs::read_to_string(&node).unwrap(), "1");
    assert_eq!(sysfs::read_line(&node).as_deref(), Some("1"));

    assert!(ChargingLedSetting::restore(&prefs, &node).unwrap());
    assert_eq!(fs::read_to_string(&node).unwrap(), "1");
}

#[test]
fn absent_node_leaves_everything_untouched() {
    let dir = tempdir().unwrap();
    let node = dir.path().join("value");
    let prefs_path = dir.path().join("prefs.toml");

    let mut setting = ChargingLedSetting::new(FilePreferences::load(&prefs_path), &node);
    assert!(!setting.is_enabled());
    assert!(setting.toggle(true));
    assert!(!node.exists());
    assert!(!prefs_path.exists());

    let prefs = setting.into_preferences();
    assert!(!ChargingLedSetting::restore(&prefs, &node).unwrap());
    assert!(!sysfs::exists(&node));
}
