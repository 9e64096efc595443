// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # FitTrack Client
//!
//! Client library for the FitTrack workout-tracking backend. It signs users
//! in, lists workout plans and exercises, runs active workout sessions,
//! reads history and statistics, manages subscriptions, starts PayPal
//! payments and donations, submits feedback, and sequences audible/haptic
//! cues during a workout.
//!
//! ## Architecture
//!
//! - **Client**: one configured HTTP transport with bearer authentication
//! - **Services**: async traits, one method per backend endpoint
//! - **Repositories**: envelope checks and per-operation fallback policy
//! - **Session**: the active workout state machines
//! - **Feedback**: the tone/vibration sequencer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fittrack_client::auth::CredentialStore;
//! use fittrack_client::client::ApiClient;
//! use fittrack_client::config::ClientConfig;
//! use fittrack_client::repositories::Repositories;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::load(None)?;
//!     let client = Arc::new(ApiClient::new(&config)?);
//!     let credentials = Arc::new(CredentialStore::new());
//!     client.attach_token_source(credentials.clone()).await;
//!
//!     let repos = Repositories::new(client, credentials);
//!     let session = repos.auth.login("mario", "secret").await?;
//!     for plan in repos.plans.list_plans(session.user_id).await? {
//!         println!("{}", plan.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Backend payload records
pub mod models;

/// Client configuration (environment and TOML file)
pub mod config;

/// Endpoint paths, limits and fixed messages
pub mod constants;

/// Error taxonomy
pub mod errors;

/// HTTP transport
pub mod client;

/// Token source and credential store
pub mod auth;

/// Endpoint definitions grouped by domain
pub mod services;

/// Result mapping and fallback policy per domain
pub mod repositories;

/// Active workout lifecycle
pub mod session;

/// Tone and vibration feedback
pub mod feedback;

/// Display formatting
pub mod format;

/// Logging configuration
pub mod logging;
