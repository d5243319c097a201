use std::env;
use std::path::PathBuf;

/// Location of the durable key-value file that holds the current session.
///
/// - `EDUGATE_STORAGE_PATH`: default `storage/session.json`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("storage/session.json"),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let storage_path = env::var("EDUGATE_STORAGE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("storage/session.json"));

        Self { storage_path }
    }
}
