// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! Endpoint paths, transport defaults and the fixed user-facing messages
//! the repositories return live here.

use std::env;

/// Client identity
pub mod client {
    /// Client version from Cargo.toml
    pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Name used in logs and the User-Agent header
    pub const CLIENT_NAME: &str = "fittrack-client";

    pub fn user_agent() -> String {
        format!("{}/{}", CLIENT_NAME, CLIENT_VERSION)
    }
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get backend base URL from environment or default
    pub fn base_url() -> String {
        env::var("FITTRACK_BASE_URL")
            .unwrap_or_else(|_| super::defaults::BASE_URL.to_string())
    }

    /// Get connect timeout from environment or default
    pub fn connect_timeout_secs() -> u64 {
        env::var("FITTRACK_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::limits::CONNECT_TIMEOUT_SECS)
    }

    /// Get request timeout from environment or default
    pub fn request_timeout_secs() -> u64 {
        env::var("FITTRACK_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(super::limits::REQUEST_TIMEOUT_SECS)
    }

    /// Get log level from environment or default
    pub fn log_level() -> String {
        env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string())
    }
}

/// Backend endpoints, relative to the configured base URL
pub mod endpoints {
    /// Authentication
    pub const AUTH: &str = "auth.php";
    pub const AUTH_ACTION_LOGIN: &str = "login";
    pub const REGISTER: &str = "standalone_register.php";

    /// Profile
    pub const PROFILE: &str = "utente_profilo.php";

    /// Exercise catalog
    pub const EXERCISES: &str = "esercizi.php";

    /// Workout plans
    pub const WORKOUT_PLANS: &str = "schede_standalone.php";

    /// Active workouts
    pub const ACTIVE_WORKOUT: &str = "active_workout_standalone.php";
    pub const COMPLETED_SERIES: &str = "serie_completate_standalone.php";
    pub const COMPLETE_WORKOUT: &str = "completa_allenamento_standalone.php";
    pub const DELETE_WORKOUT: &str = "elimina_allenamento_standalone.php";

    /// Workout history
    pub const HISTORY: &str = "get_allenamenti_standalone.php";
    pub const SERIES_DETAIL: &str = "get_serie_dettaglio_standalone.php";
    pub const UPDATE_SERIES: &str = "update_serie_standalone.php";
    pub const DELETE_SERIES: &str = "delete_serie_standalone.php";

    /// Subscriptions
    pub const SUBSCRIPTION: &str = "android_subscription_api.php";
    pub const SUBSCRIPTION_PLANS: &str = "subscription_plans.php";

    /// Payments
    pub const PAYPAL_PAYMENT: &str = "android_paypal_payment.php";
    pub const PAYMENT_STATUS: &str = "android_payment_status.php";

    /// Feedback
    pub const FEEDBACK: &str = "android_feedback_api.php";

    /// Statistics
    pub const USER_STATS: &str = "android_user_stats.php";
}

/// Query `action` values sent alongside endpoints that multiplex operations
pub mod actions {
    pub const PLAN_DETAILS: &str = "details";
    pub const START_WORKOUT: &str = "start";
    pub const PLAN_EXERCISES: &str = "exercises";
    pub const CURRENT_SUBSCRIPTION: &str = "current_subscription";
    pub const CHECK_LIMITS: &str = "check_limits";
    pub const UPDATE_PLAN: &str = "update_plan";
    pub const CHECK_EXPIRED: &str = "check_expired";
    pub const SUBMIT_FEEDBACK: &str = "submit_feedback";
}

/// Numeric limits and thresholds
pub mod limits {
    /// Transport timeouts
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Characters of a response body kept in error values and logs
    pub const BODY_SNIPPET_CHARS: usize = 512;

    /// Characters of a uuid appended to a session identifier
    pub const SESSION_SUFFIX_CHARS: usize = 8;

    /// Upper bound for a single feedback sequence
    pub const MAX_FEEDBACK_SEQUENCE_MS: u64 = 1500;

    /// Queued feedback events before new ones are dropped
    pub const FEEDBACK_QUEUE_CAPACITY: usize = 16;
}

/// Defaults
pub mod defaults {
    pub const BASE_URL: &str = "https://fitgymtrack.com/api/";
    pub const CONFIG_DIR: &str = "fittrack";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const SESSION_FILE: &str = "session.json";
    pub const CURRENCY: &str = "EUR";
}

/// User-facing messages
pub mod messages {
    pub const ALREADY_IN_USE: &str = "Username or email already in use";
    pub const BACKEND_FAILURE: &str = "Operation failed";
    pub const DURATION_UNAVAILABLE: &str = "N/D";
}
