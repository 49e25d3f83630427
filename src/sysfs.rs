//! Plain file helpers for sysfs control nodes.
//!
//! A node accepts a single short write of `"0"` or `"1"`. No locking or retry
//! is attempted; every failure is logged where it happens and handed back to
//! the caller, which usually just carries on.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, error};

use crate::error::{Error, Result};

const READ_BUFFER_SIZE: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Zero,
    One,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Zero => f.write_str("0"),
            Signal::One => f.write_str("1"),
        }
    }
}

/// Mapping used by the settings screen: a checked box writes `0`.
pub fn enabled_polarity(value: bool) -> Signal {
    if value {
        Signal::Zero
    } else {
        Signal::One
    }
}

/// Mapping used by [`write_boolean`]: `true` writes `1`.
pub fn disabled_polarity(value: bool) -> Signal {
    if value {
        Signal::One
    } else {
        Signal::Zero
    }
}

pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

fn open_truncated(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|err| Error::io(path, err))
}

fn write_bytes(path: &Path, value: &str, sync: bool) -> Result<()> {
    let mut file = open_truncated(path)?;
    file.write_all(value.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|err| Error::io(path, err))?;
    if sync {
        file.sync_all().map_err(|err| Error::io(path, err))?;
    }
    debug!("wrote {:?} to {}", value, path.display());
    Ok(())
}

/// Replaces the contents of `path` with `value`.
pub fn write_string<P: AsRef<Path>>(path: P, value: &str) -> Result<()> {
    let path = path.as_ref();
    write_bytes(path, value, false).map_err(|err| {
        error!("{}", err);
        err
    })
}

pub fn write_signal<P: AsRef<Path>>(path: P, value: Signal) -> Result<()> {
    write_string(path, &value.to_string())
}

/// Writes `1` for `true` and `0` for `false`, then syncs the file to storage
/// before closing it.
pub fn write_boolean<P: AsRef<Path>>(path: P, value: bool) -> Result<()> {
    let path = path.as_ref();
    let payload = disabled_polarity(value).to_string();
    write_bytes(path, &payload, true).map_err(|err| {
        error!("{}", err);
        err
    })
}

/// First line of `path` without its terminator. `Ok(None)` for an empty file.
pub fn try_read_line<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|err| Error::io(path, err))?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r');
    Ok(Some(trimmed.to_owned()))
}

/// Like [`try_read_line`], but any failure is logged and reads as `None`.
pub fn read_line<P: AsRef<Path>>(path: P) -> Option<String> {
    match try_read_line(path) {
        Ok(line) => line,
        Err(err) => {
            error!("reading sysfs node failed: {}", err);
            None
        }
    }
}
