// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Load states, session errors and identifier generation

use chrono::Utc;
use std::fmt;
use uuid::Uuid;

use crate::constants::limits::SESSION_SUFFIX_CHARS;
use crate::errors::ApiError;

/// Lifecycle of one asynchronous operation as observed by a UI
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoadState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Success(_) => "success",
            LoadState::Error(_) => "error",
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> fmt::Display for LoadState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised by [`ActiveWorkoutSession`](super::ActiveWorkoutSession)
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Operation not permitted in the machine's current state
    #[error("Cannot {operation} while {machine} is {state}")]
    InvalidTransition {
        operation: &'static str,
        machine: &'static str,
        state: &'static str,
    },

    /// The backend call behind the transition failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionError {
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, SessionError::InvalidTransition { .. })
    }
}

/// Correlation key for a workout start: `session_<millis>_<8 hex chars>`
pub fn generate_session_id() -> String {
    prefixed_id("session")
}

/// Idempotency key for a series save: `req_<millis>_<8 hex chars>`
pub fn generate_request_id() -> String {
    prefixed_id("req")
}

fn prefixed_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        &uuid[..SESSION_SUFFIX_CHARS]
    )
}
