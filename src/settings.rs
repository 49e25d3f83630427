//! The charging LED checkbox and its boot-time restore.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::prefs::{PreferenceStore, KEY_CHARGING_LED};
use crate::sysfs;

pub const CHARGING_LED_NODE: &str = "/sys/class/gpio/gpio168/value";

pub struct ChargingLedSetting<P> {
    prefs: P,
    node: PathBuf,
    enabled: bool,
    checked: bool,
}

impl<P: PreferenceStore> ChargingLedSetting<P> {
    /// Binds the checkbox to the stored value. The control stays inert when the
    /// node is missing on this kernel.
    pub fn new<N: Into<PathBuf>>(prefs: P, node: N) -> Self {
        let node = node.into();
        let enabled = sysfs::exists(&node);
        let checked = prefs.get_bool(KEY_CHARGING_LED, false);
        if !enabled {
            info!("{} not present, charging led control disabled", node.display());
        }
        Self {
            prefs,
            node,
            enabled,
            checked,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn node(&self) -> &Path {
        &self.node
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    pub fn into_preferences(self) -> P {
        self.prefs
    }

    /// Click on the control named `key`, now showing `checked`. The write is
    /// fire-and-forget, so this always reports the click as handled.
    pub fn on_preference_click(&mut self, key: &str, checked: bool) -> bool {
        warn!("key: {}", key);
        if key != KEY_CHARGING_LED || !self.enabled {
            return true;
        }

        self.checked = checked;
        if let Err(err) = self.prefs.set_bool(KEY_CHARGING_LED, checked) {
            warn!("could not persist {}: {}", KEY_CHARGING_LED, err);
        }
        // failure already logged by the writer
        let _ = sysfs::write_signal(&self.node, sysfs::enabled_polarity(checked));
        true
    }

    pub fn toggle(&mut self, checked: bool) -> bool {
        self.on_preference_click(KEY_CHARGING_LED, checked)
    }

    /// Re-applies the stored value after a reboot. `Ok(false)` when the node
    /// does not exist and nothing was written.
    pub fn restore<N: AsRef<Path>>(prefs: &P, node: N) -> Result<bool> {
        let node = node.as_ref();
        if !sysfs::exists(node) {
            return Ok(false);
        }
        let enabled = prefs.get_bool(KEY_CHARGING_LED, false);
        sysfs::write_signal(node, sysfs::enabled_polarity(enabled))?;
        info!("restored charging led = {}", enabled);
        Ok(true)
    }
}
