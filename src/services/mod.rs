// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Backend Services
//!
//! One async trait per backend domain. Each method maps to exactly one
//! endpoint and returns the decoded payload untouched: envelope checks and
//! fallbacks belong to the repositories.
//!
//! [`ApiClient`](crate::client::ApiClient) implements every trait, so a single
//! shared client backs all repositories. Tests substitute their own
//! implementations.

pub mod active_workout;
pub mod auth;
pub mod exercise;
pub mod feedback;
pub mod history;
pub mod payment;
pub mod profile;
pub mod stats;
pub mod subscription;
pub mod workout_plan;

pub use active_workout::ActiveWorkoutService;
pub use auth::AuthService;
pub use exercise::ExerciseService;
pub use feedback::FeedbackService;
pub use history::HistoryService;
pub use payment::PaymentService;
pub use profile::ProfileService;
pub use stats::StatsService;
pub use subscription::SubscriptionService;
pub use workout_plan::WorkoutPlanService;

/// Result type of every service call
pub type ServiceResult<T> = Result<T, crate::errors::ApiError>;
