use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger` as the global logger.
///
/// `verbose` lowers the default level to `debug`; `RUST_LOG` always wins.
/// Calling this more than once is harmless, so tests and demos can call it freely.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    // `try_init` only fails when a logger is already installed.
    let _ = Builder::from_env(env).try_init();
}
