// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Login, registration and logout

use std::sync::Arc;
use tracing::warn;

use super::{resolve, Operation, RepoResult};
use crate::auth::CredentialStore;
use crate::constants::messages;
use crate::errors::ApiError;
use crate::logging::AppLogger;
use crate::models::{LoginRequest, RegisterRequest, RegisterResponse, Session};
use crate::services::AuthService;

pub struct AuthRepository {
    service: Arc<dyn AuthService>,
    credentials: Arc<CredentialStore>,
}

impl AuthRepository {
    pub fn new(service: Arc<dyn AuthService>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            service,
            credentials,
        }
    }

    /// Authenticate and cache the resulting session
    pub async fn login(&self, username: &str, password: &str) -> RepoResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = match resolve(Operation::Login, self.service.login(&request).await) {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_auth_event(username, "login", false, Some(&e.to_string()));
                return Err(e);
            }
        };

        let session = response
            .session()
            .ok_or_else(|| ApiError::Backend(messages::BACKEND_FAILURE.to_string()))?;

        if let Err(e) = self.credentials.set_session(session.clone()).await {
            warn!("Session kept in memory only: {:#}", e);
        }
        AppLogger::log_auth_event(&session.username, "login", true, None);
        Ok(session)
    }

    /// Create an account
    ///
    /// A 409 from the backend is not an error: it yields `success == false`
    /// with a fixed "already in use" message.
    pub async fn register(&self, request: &RegisterRequest) -> RepoResult<RegisterResponse> {
        match self.service.register(request).await {
            Err(e) if e.is_conflict() => {
                AppLogger::log_auth_event(&request.username, "register", false, Some("conflict"));
                Ok(RegisterResponse {
                    success: false,
                    message: Some(messages::ALREADY_IN_USE.to_string()),
                    user_id: None,
                })
            }
            result => {
                let resolved = resolve(Operation::Register, result);
                AppLogger::log_auth_event(&request.username, "register", resolved.is_ok(), None);
                resolved
            }
        }
    }

    /// Forget the cached session
    pub async fn logout(&self) -> anyhow::Result<()> {
        let username = self.credentials.session().await.map(|s| s.username);
        self.credentials.clear().await?;
        AppLogger::log_auth_event(username.as_deref().unwrap_or(""), "logout", true, None);
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.credentials.session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenSource;
    use crate::models::{AuthUser, LoginResponse};
    use crate::services::ServiceResult;
    use async_trait::async_trait;

    struct FakeAuth {
        register_status: Option<u16>,
    }

    #[async_trait]
    impl AuthService for FakeAuth {
        async fn login(&self, request: &LoginRequest) -> ServiceResult<LoginResponse> {
            if request.password == "secret" {
                Ok(LoginResponse {
                    token: Some("tok_abc".to_string()),
                    user: Some(AuthUser {
                        id: 5,
                        username: request.username.clone(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
            } else {
                Ok(LoginResponse {
                    error: Some("Credenziali non valide".to_string()),
                    ..Default::default()
                })
            }
        }

        async fn register(&self, _request: &RegisterRequest) -> ServiceResult<RegisterResponse> {
            match self.register_status {
                Some(status) => Err(ApiError::status(status, "{}")),
                None => Ok(RegisterResponse {
                    success: true,
                    message: Some("ok".to_string()),
                    user_id: Some(9),
                }),
            }
        }
    }

    fn repo(register_status: Option<u16>) -> (AuthRepository, Arc<CredentialStore>) {
        let store = Arc::new(CredentialStore::new());
        let repo = AuthRepository::new(Arc::new(FakeAuth { register_status }), store.clone());
        (repo, store)
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            username: "luca".to_string(),
            password: "pw".to_string(),
            email: "luca@example.com".to_string(),
            name: "Luca".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_caches_session() {
        let (repo, store) = repo(None);
        let session = repo.login("luca", "secret").await.unwrap();
        assert_eq!(session.user_id, 5);
        assert_eq!(store.current_token().await.as_deref(), Some("tok_abc"));

        repo.logout().await.unwrap();
        assert!(repo.current_session().await.is_none());
    }

    #[tokio::test]
    async fn test_login_failure_reports_backend_message() {
        let (repo, store) = repo(None);
        let err = repo.login("luca", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::Backend(ref m) if m == "Credenziali non valide"));
        assert!(!store.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_register_conflict_is_not_an_error() {
        let (repo, _) = repo(Some(409));
        let response = repo.register(&registration()).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some(messages::ALREADY_IN_USE));
    }

    #[tokio::test]
    async fn test_register_other_status_fails() {
        let (repo, _) = repo(Some(500));
        let err = repo.register(&registration()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_register_success() {
        let (repo, _) = repo(None);
        let response = repo.register(&registration()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.user_id, Some(9));
    }
}
