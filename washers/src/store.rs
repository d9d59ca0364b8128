use log::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use washers_common::match_snapshot::PersistedMatch;

const STATE_FILE_NAME: &str = "match-state.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not access the saved match: {0}")]
    Io(#[from] io::Error),
    #[error("Could not encode the match: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Keeps the last known scores and theme in a single JSON file
#[derive(Debug, Clone)]
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The platform data directory, or the working directory if none can be found
    pub fn default_path(app_name: &str) -> PathBuf {
        let mut path = directories::ProjectDirs::from("", "", app_name)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_default();
        path.push(STATE_FILE_NAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: anything missing or unreadable falls back to the defaults
    pub fn load(&self) -> PersistedMatch {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let saved = PersistedMatch::from_json_str(&text);
                info!("Loaded saved match {saved:?} from {:?}", self.path);
                saved
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No saved match at {:?}, starting fresh", self.path);
                PersistedMatch::default()
            }
            Err(e) => {
                warn!("Failed to read saved match from {:?}: {e}", self.path);
                PersistedMatch::default()
            }
        }
    }

    pub fn save(&self, state: &PersistedMatch) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(state)?;
        fs::write(&self.path, text)?;
        trace!("Saved match {state:?}");
        Ok(())
    }
}
