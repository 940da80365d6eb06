use std::fs;
use std::path::{Path, PathBuf};

use crate::params::TrackerParams;

const DATA_DIR: &str = ".semtrack";
const PARAMS_FILE: &str = "params.json";

/// The default data directory, `.semtrack` under the working directory.
pub fn default_data_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DATA_DIR)
}

pub fn load_params(dir: &Path) -> Result<Option<TrackerParams>, String> {
    let file = dir.join(PARAMS_FILE);
    if !file.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read parameters file `{}`: {e}", file.display()))?;
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("Failed to parse parameters file `{}`: {e}", file.display()))
}

pub fn save_params(dir: &Path, params: &TrackerParams) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create data directory `{}`: {e}", dir.display()))?;
    let file = dir.join(PARAMS_FILE);
    let raw = params.to_json()?;
    fs::write(&file, raw)
        .map_err(|e| format!("Failed to write parameters file `{}`: {e}", file.display()))
}
