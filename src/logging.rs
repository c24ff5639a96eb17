//! Logger setup

use log::LevelFilter;

/// Install the global logger at `level`.
///
/// `RUST_LOG` is applied on top, so individual modules can be tuned
/// (e.g. `RUST_LOG=controld_exporter::client=debug`).
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}
