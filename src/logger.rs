use std::io::Write;

use chrono::Local;
use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` still overrides `level` per module.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        // The graphics backend is chatty below warn.
        .filter_module("wgpu_core", LevelFilter::Warn)
        .filter_module("wgpu_hal", LevelFilter::Warn)
        .filter_module("naga", LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
