//! Session store
//!
//! Holds the authenticated session (bearer token and role) behind a lock,
//! persists it to a JSON file, and notifies subscribers on change so
//! mounted screens can re-render role-gated controls without a remount.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::errors::{ChancesError, Result};

/// Server role number 0 is the administrator role.
const ADMIN_ROLE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Operator,
}

impl Role {
    pub fn from_server(roles: i32) -> Self {
        if roles == ADMIN_ROLE {
            Role::Admin
        } else {
            Role::Operator
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub user_name: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Shared session state with change notification.
///
/// Readers call `current()`; long-lived observers call `subscribe()` and
/// get a watch receiver that fires on every `set`/`clear`.
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
    file: PathBuf,
    notify: watch::Sender<Option<Session>>,
}

impl SessionStore {
    pub fn new(file: PathBuf) -> Arc<Self> {
        let (notify, _) = watch::channel(None);
        Arc::new(Self {
            inner: RwLock::new(None),
            file,
            notify,
        })
    }

    /// Restore a persisted session from disk, if one exists.
    pub fn load(self: &Arc<Self>) {
        match std::fs::read_to_string(&self.file) {
            Ok(content) => match serde_json::from_str::<Session>(&content) {
                Ok(session) => {
                    debug!(user = %session.user_name, "restored session from {}", self.file.display());
                    *self.inner.write() = Some(session.clone());
                    let _ = self.notify.send(Some(session));
                }
                Err(e) => {
                    warn!("ignoring unreadable session file {}: {}", self.file.display(), e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!("failed to read session file {}: {}", self.file.display(), e);
            }
        }
    }

    /// Store a new session, persist it, and notify subscribers.
    pub fn set(&self, token: String, roles: i32, user_name: String) -> Result<()> {
        let session = Session {
            token,
            role: Role::from_server(roles),
            user_name,
            logged_in_at: Utc::now(),
        };
        self.persist(&session)?;
        *self.inner.write() = Some(session.clone());
        let _ = self.notify.send(Some(session));
        Ok(())
    }

    /// Drop the session, remove the file, and notify subscribers.
    pub fn clear(&self) -> Result<()> {
        *self.inner.write() = None;
        let _ = self.notify.send(None);
        match std::fs::remove_file(&self.file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .read()
            .as_ref()
            .is_some_and(|s| s.role.is_admin())
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.notify.subscribe()
    }

    /// Session required or `Auth` error telling the user how to log in.
    pub fn require(&self) -> Result<Session> {
        self.current()
            .ok_or_else(|| ChancesError::auth("not logged in, run `chances login` first"))
    }

    fn persist(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_role_mapping() {
        assert_eq!(Role::from_server(0), Role::Admin);
        assert_eq!(Role::from_server(1), Role::Operator);
        assert_eq!(Role::from_server(7), Role::Operator);
        assert!(Role::Admin.is_admin());
        assert!(!Role::Operator.is_admin());
    }

    #[test]
    fn test_set_persist_load_round_trip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");

        let store = SessionStore::new(file.clone());
        store
            .set("tok-123".into(), 0, "operador1".into())
            .unwrap();
        assert!(store.is_logged_in());
        assert!(store.is_admin());

        // A fresh store restores the same session from disk.
        let restored = SessionStore::new(file);
        restored.load();
        let session = restored.current().unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.user_name, "operador1");
    }

    #[test]
    fn test_clear_removes_file_and_session() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");

        let store = SessionStore::new(file.clone());
        store.set("tok".into(), 2, "op".into()).unwrap();
        assert!(file.exists());

        store.clear().unwrap();
        assert!(!store.is_logged_in());
        assert!(!file.exists());

        // Clearing again is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_subscribe_sees_set_and_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let mut rx = store.subscribe();

        tokio_test::block_on(async {
            store.set("tok".into(), 1, "op".into()).unwrap();
            rx.changed().await.unwrap();
            assert!(rx.borrow().is_some());

            store.clear().unwrap();
            rx.changed().await.unwrap();
            assert!(rx.borrow().is_none());
        });
    }

    #[test]
    fn test_require_without_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        let err = store.require().unwrap_err();
        assert!(matches!(err, ChancesError::Auth(_)));
    }

    #[test]
    fn test_load_ignores_corrupt_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("session.json");
        std::fs::write(&file, "{not json").unwrap();

        let store = SessionStore::new(file);
        store.load();
        assert!(!store.is_logged_in());
    }
}
