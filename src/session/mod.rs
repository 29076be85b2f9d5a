//! Persistence for the single active session record

pub mod store;

pub use store::JsonFileStore;

use crate::models::{SessionData, SessionUpdate};

/// Fixed key the session record is stored under
pub const SESSION_STORAGE_KEY: &str = "lnat-session";

/// Result type for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur when persisting a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value style store holding at most one session
pub trait SessionStore {
    /// Load the stored session, if any
    fn load(&self) -> SessionResult<Option<SessionData>>;

    /// Replace the stored session
    fn save(&self, session: &SessionData) -> SessionResult<()>;

    /// Remove the stored session
    fn clear(&self) -> SessionResult<()>;

    /// Merge `update` over the stored session and save it.
    ///
    /// Returns `None` without writing when no session is stored.
    fn update(&self, update: SessionUpdate) -> SessionResult<Option<SessionData>> {
        let Some(mut session) = self.load()? else {
            return Ok(None);
        };

        update.apply(&mut session);
        self.save(&session)?;
        Ok(Some(session))
    }
}
