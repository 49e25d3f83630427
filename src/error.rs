use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid preferences file {}: {source}", .path.display())]
    ParsePrefs {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("refusing to overwrite unreadable preferences file {}", .path.display())]
    DamagedPrefs { path: PathBuf },
    #[error("could not serialize preferences: {0}")]
    SerializePrefs(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
