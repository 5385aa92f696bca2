//! Shared fixtures for the integration suites.

use scholarx_rust::store::DataStore;
use std::path::PathBuf;

/// Path to a file inside the repository `data/` fixtures.
pub fn repo_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load the repository fixtures (real timetable export plus rosters).
pub fn load_fixture_store() -> DataStore {
    DataStore::load_from_dir(repo_data_dir()).expect("repository data fixtures should load")
}
