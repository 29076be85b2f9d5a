use super::{SessionResult, SessionStore, SESSION_STORAGE_KEY};
use crate::models::SessionData;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Session store backed by a JSON file named after the storage key
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the session file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SESSION_STORAGE_KEY))
    }
}

impl SessionStore for JsonFileStore {
    /// A record that cannot be parsed is discarded and treated as absent
    fn load(&self) -> SessionResult<Option<SessionData>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str::<SessionData>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to parse stored session");
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&self, session: &SessionData) -> SessionResult<()> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(session)?;
        fs::write(self.path(), content)?;
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
