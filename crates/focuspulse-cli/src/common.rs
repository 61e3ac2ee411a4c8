//! Shared helpers for CLI commands.

use std::path::PathBuf;

use clap::Args;

use focuspulse_core::{load_bundle, Config, TelemetryBundle};

/// Telemetry directory option shared by every analytics command.
#[derive(Args)]
pub struct DataDirArg {
    /// Directory holding the CSV/ICS telemetry bundle
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Resolve the telemetry directory: the explicit flag wins, otherwise the
/// config file's `data.dir` (which defaults to `./data`).
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    match flag {
        Some(dir) => dir,
        None => Config::load_or_default().data.dir,
    }
}

/// Load the telemetry bundle from the resolved directory.
pub fn load_data(flag: Option<PathBuf>) -> Result<TelemetryBundle, Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(flag);
    Ok(load_bundle(&dir)?)
}
