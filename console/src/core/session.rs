//! # Session Store
//!
//! The admin credential is a single opaque bearer token. Instead of ambient
//! global state it lives behind [`SessionStore`], which is handed to the REST
//! client, the session guard and the login handler.
//!
//! - [`MemorySession`]: process-local, used by tests and one-shot runs
//! - [`FileSession`]: persisted to a single file between CLI invocations

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::error::Result;

/// Credential storage with explicit get/set/clear capability.
pub trait SessionStore: Send + Sync {
    /// Currently stored token, if any.
    fn token(&self) -> Option<String>;

    /// Store a new token, replacing any previous one.
    fn set_token(&self, token: &str) -> Result<()>;

    /// Remove the stored token.
    ///
    /// Returns `true` only when a token was actually removed, so callers
    /// reacting to an expired session do so once per credential.
    fn clear(&self) -> Result<bool>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

fn normalize(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// In-memory session.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(normalize(token)),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        *self.token.write() = normalize(token);
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        Ok(self.token.write().take().is_some())
    }
}

/// File-backed session.
///
/// The token is cached in memory and mirrored to `path`. Clearing removes the
/// file.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl FileSession {
    /// Open the session file, loading a previously stored token if present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let token = match fs::read_to_string(&path) {
            Ok(contents) => normalize(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), has_token = token.is_some(), "Session file opened");

        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let token = normalize(token);
        match &token {
            Some(value) => self.write_file(value)?,
            None => {
                self.clear()?;
            }
        }
        *self.token.write() = token;
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        // Held across the removal so concurrent callers see one `true`
        let mut token = self.token.write();
        let removed = token.take().is_some();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(removed),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(removed),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_clear_reports_once() {
        let session = MemorySession::with_token("abc");
        assert!(session.is_authenticated());
        assert!(session.clear().unwrap());
        assert!(!session.clear().unwrap());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_blank_token_is_not_a_session() {
        let session = MemorySession::new();
        session.set_token("   \n").unwrap();
        assert!(session.token().is_none());

        session.set_token(" tok-1 \n").unwrap();
        assert_eq!(session.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_file_session_round_trip() {
        let dir = std::env::temp_dir().join(format!("shreeaura-session-{}", uuid::Uuid::new_v4()));
        let path = dir.join("session.token");

        let session = FileSession::open(&path).unwrap();
        assert!(session.token().is_none());

        session.set_token("persisted-token").unwrap();
        let reopened = FileSession::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("persisted-token"));

        assert!(reopened.clear().unwrap());
        assert!(!path.exists());
        assert!(!reopened.clear().unwrap());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_session_concurrent_clear_reports_once() {
        let dir = std::env::temp_dir().join(format!("shreeaura-session-{}", uuid::Uuid::new_v4()));
        let session = FileSession::open(dir.join("session.token")).unwrap();
        session.set_token("shared-token").unwrap();

        let cleared = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| session.clear().unwrap())).collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|removed| *removed)
                .count()
        });
        assert_eq!(cleared, 1);
        assert!(session.token().is_none());

        let _ = fs::remove_dir_all(dir);
    }
}
