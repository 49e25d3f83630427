use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use toml::value::{Table, Value};

use crate::error::{Error, Result};

pub const KEY_CHARGING_LED: &str = "charging_led";

/// Key-value store holding the persisted state of the settings controls.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_owned(), value);
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Entries that are not booleans are kept as-is and written back on save.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
struct PrefsFile {
    values: Table,
}

/// Preferences persisted as a flat TOML table of booleans.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    contents: PrefsFile,
    damaged: bool,
}

impl FilePreferences {
    /// Loads `path`. A missing file is an empty store. An unreadable one is
    /// logged and also treated as empty, but is never overwritten.
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let (contents, damaged) = match Self::read(&path) {
            Ok(contents) => (contents, false),
            Err(err) => {
                warn!("{}, using defaults", err);
                (PrefsFile::default(), true)
            }
        };
        Self {
            path,
            contents,
            damaged,
        }
    }

    fn read(path: &Path) -> Result<PrefsFile> {
        if !path.exists() {
            return Ok(PrefsFile::default());
        }
        let raw = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        toml::from_str(&raw).map_err(|source| Error::ParsePrefs {
            path: path.to_owned(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if self.damaged {
            return Err(Error::DamagedPrefs {
                path: self.path.clone(),
            });
        }
        // a Value emits plain keys ahead of nested tables
        let raw = toml::to_string_pretty(&Value::try_from(&self.contents)?)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }
        fs::write(&self.path, raw).map_err(|err| Error::io(&self.path, err))?;
        info!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.contents
            .values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.contents
            .values
            .insert(key.to_owned(), Value::Boolean(value));
        self.save()
    }
}
