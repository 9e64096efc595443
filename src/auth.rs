// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Session and Credential Management
//!
//! The HTTP client never looks tokens up in storage while building a request.
//! It asks a [`TokenSource`] for the current token; the usual source is the
//! [`CredentialStore`], a cached holder that login/logout update and that can
//! be persisted to a JSON file between runs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::Session;

/// Supplies the bearer token for outgoing requests
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Current token, `None` when no session exists
    async fn current_token(&self) -> Option<String>;
}

/// Fixed token (or none), for tests and scripted use
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn current_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Cached session holder, optionally backed by a file
pub struct CredentialStore {
    session: RwLock<Option<Session>>,
    path: Option<PathBuf>,
}

impl CredentialStore {
    /// In-memory store with no session
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
            path: None,
        }
    }

    /// Store persisted at `path`, loading any session already saved there
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let session = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session file {}", path.display()))?;
            let session: Session = serde_json::from_str(&content)
                .context("Failed to parse session file")?;
            debug!("Loaded session for user {}", session.user_id);
            Some(session)
        } else {
            None
        };

        Ok(Self {
            session: RwLock::new(session),
            path: Some(path),
        })
    }

    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn user_id(&self) -> Option<i64> {
        self.session.read().await.as_ref().map(|s| s.user_id)
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Replace the cached session and persist it when file-backed
    ///
    /// The in-memory session is updated even if writing the file fails.
    pub async fn set_session(&self, session: Session) -> Result<()> {
        info!("Session stored for user {}", session.user_id);
        let mut guard = self.session.write().await;
        *guard = Some(session);
        if let (Some(path), Some(session)) = (&self.path, guard.as_ref()) {
            save_to(path, session)?;
        }
        Ok(())
    }

    /// Forget the session (logout)
    pub async fn clear(&self) -> Result<()> {
        *self.session.write().await = None;
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path)
                    .with_context(|| format!("Failed to remove session file {}", path.display()))?;
            }
        }
        info!("Session cleared");
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenSource for CredentialStore {
    async fn current_token(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.token.clone())
    }
}

fn save_to(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(session)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write session file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session {
            token: "tok_123".to_string(),
            user_id: 42,
            username: "giulia".to_string(),
        }
    }

    #[tokio::test]
    async fn test_static_token() {
        assert_eq!(StaticToken::new("abc").current_token().await.as_deref(), Some("abc"));
        assert_eq!(StaticToken::none().current_token().await, None);
    }

    #[tokio::test]
    async fn test_credential_store_login_logout() -> Result<()> {
        let store = CredentialStore::new();
        assert!(store.current_token().await.is_none());
        assert!(!store.is_logged_in().await);

        store.set_session(sample_session()).await?;
        assert_eq!(store.current_token().await.as_deref(), Some("tok_123"));
        assert_eq!(store.user_id().await, Some(42));

        store.clear().await?;
        assert!(store.current_token().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_credential_store_persists_session() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("session.json");

        let store = CredentialStore::load_from(&path)?;
        assert!(store.session().await.is_none());
        store.set_session(sample_session()).await?;
        assert!(path.exists());

        let reloaded = CredentialStore::load_from(&path)?;
        assert_eq!(reloaded.session().await, Some(sample_session()));

        reloaded.clear().await?;
        assert!(!path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_session_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "not json")?;

        let result = CredentialStore::load_from(&path);
        assert!(result.is_err());
        Ok(())
    }
}
