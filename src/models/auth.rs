// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Login, registration and session records

use serde::{Deserialize, Serialize};

use super::lenient;
use super::ApiResponse;

/// Credentials posted to `auth.php?action=login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User summary returned alongside a login token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub role_name: Option<String>,
}

/// Answer to a login attempt
///
/// The backend signals failure by omitting the token and setting `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Session to store after a successful login
    pub fn session(&self) -> Option<Session> {
        let token = self.token.clone()?;
        let user = self.user.clone().unwrap_or_default();
        Some(Session {
            token,
            user_id: user.id,
            username: user.username,
        })
    }
}

impl ApiResponse for LoginResponse {
    fn is_success(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// Payload posted to `standalone_register.php`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "userId", default, deserialize_with = "lenient::opt_int")]
    pub user_id: Option<i64>,
}

envelope!(RegisterResponse);

/// Authenticated session held locally between calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_builds_session() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"token": "abc", "user": {"id": "7", "username": "mario", "email": "m@x.it"}}"#,
        )
        .unwrap();
        assert!(response.is_success());
        let session = response.session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, 7);
        assert_eq!(session.username, "mario");
    }

    #[test]
    fn test_login_failure_reports_error() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"error": "Credenziali non valide"}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("Credenziali non valide"));
        assert!(response.session().is_none());
    }
}
