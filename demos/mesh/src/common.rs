//! Helpers shared by the demo binaries.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

use noc_core::SimConfig;

/// Mesh dimension used when no config file is given.
pub const DEFAULT_GRID_SIZE: u32 = 8;

/// Configure the logger level and formatting string.
pub fn setup_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

/// Load a `SimConfig` from a JSON file, or start from the demo defaults
/// (8x8 mesh, 200-cycle memory delay).
///
/// Fields missing from the file keep their `SimConfig::default()` values.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(SimConfig {
            grid_size: DEFAULT_GRID_SIZE,
            ..SimConfig::default()
        }),
    }
}
