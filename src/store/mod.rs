//! # Parameter Store
//!
//! Owns the application's current tracker parameters. The parameters form
//! and the parameter I/O panel never touch the state directly; both go
//! through the [`ParameterService`] boundary.

use std::path::PathBuf;

use crate::params::TrackerParams;
use crate::storage;

/// The collaborator contract the parameter I/O panel is written against.
pub trait ParameterService {
    /// Return the current parameter set.
    fn read(&self) -> Result<TrackerParams, String>;

    /// Replace the current parameter set.
    fn write(&mut self, params: TrackerParams) -> Result<(), String>;
}

/// Production [`ParameterService`] backed by a JSON file in its data
/// directory.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    params: TrackerParams,
    data_dir: PathBuf,
}

impl ParameterStore {
    pub fn with_defaults() -> Self {
        Self {
            params: TrackerParams::default(),
            data_dir: storage::default_data_dir(),
        }
    }

    /// Load the persisted parameter set, falling back to defaults when no
    /// file exists yet.
    pub fn load() -> Result<Self, String> {
        let data_dir = storage::default_data_dir();
        let params = storage::load_params(&data_dir)?.unwrap_or_default();
        Ok(Self { params, data_dir })
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }
}

impl ParameterService for ParameterStore {
    fn read(&self) -> Result<TrackerParams, String> {
        Ok(self.params.clone())
    }

    fn write(&mut self, params: TrackerParams) -> Result<(), String> {
        self.params = params;
        storage::save_params(&self.data_dir, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn temp_store(name: &str) -> ParameterStore {
        ParameterStore {
            params: TrackerParams::default(),
            data_dir: std::env::temp_dir().join(format!("semtrack-{name}-{}", std::process::id())),
        }
    }

    #[test]
    fn read_returns_current_params() {
        let store = temp_store("read");
        assert_eq!(store.read().unwrap(), TrackerParams::default());
    }

    #[test]
    fn write_replaces_params_and_persists() {
        let mut store = temp_store("write");
        let params = TrackerParams {
            max_terms: 3,
            ..TrackerParams::default()
        };

        store.write(params.clone()).unwrap();

        assert_eq!(store.params(), &params);
        let reloaded = storage::load_params(&store.data_dir).unwrap();
        assert_eq!(reloaded, Some(params));

        let _ = fs::remove_dir_all(&store.data_dir);
    }
}
