use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Logs to stdout instead of syslog. `RUST_LOG` overrides the `debug` default.
pub fn init_std_log() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .try_init()
}
