pub mod error;
pub mod logs;
pub mod prefs;
pub mod settings;
pub mod sysfs;

pub use error::{Error, Result};
