// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Plain records mirroring the backend's JSON payloads. The backend is the
//! source of truth; every value here is a snapshot that callers discard and
//! refetch as needed.
//!
//! ## Design Principles
//!
//! - **Backend shaped**: field names follow the wire format via `serde(rename)`
//! - **Lenient**: numeric and boolean fields accept the loose encodings the
//!   backend produces (see [`lenient`])
//! - **Defaultable**: every response implements `Default` so read paths can
//!   fall back to an empty value
//!
//! ## Core Models
//!
//! - [`WorkoutPlan`] / [`WorkoutExercise`]: a plan and its ordered exercises
//! - [`ActiveWorkout`]: a running instance of a plan
//! - [`CompletedSeries`] / [`SeriesData`]: a logged set
//! - [`WorkoutHistory`]: finished workout listing entry
//! - [`Subscription`]: plan, usage counters and feature flags

use serde::{Deserialize, Serialize};

/// Success/failure envelope the backend wraps most answers in
pub trait ApiResponse {
    /// `false` when the backend reported a logical failure
    fn is_success(&self) -> bool;

    /// Backend message, if any
    fn message(&self) -> Option<&str>;
}

/// Implements [`ApiResponse`] for records carrying `success` and `message`
macro_rules! envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::ApiResponse for $ty {
                fn is_success(&self) -> bool {
                    self.success
                }

                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )+
    };
}

pub mod lenient;

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

pub use active_workout::{
    ActiveWorkout, CompleteWorkoutRequest, CompleteWorkoutResponse, CompletedSeries,
    CompletedSeriesResponse, DeleteSeriesRequest, DeleteWorkoutRequest, PlanExercisesResponse,
    SaveSeriesRequest, SeriesData, StartWorkoutRequest, StartWorkoutResponse,
};
pub use auth::{AuthUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Session};
pub use exercise::Exercise;
pub use feedback::{DeviceInfo, FeedbackRequest, FeedbackResponse, FeedbackSeverity, FeedbackType};
pub use history::{HistoryResponse, SeriesDetailResponse, UpdateSeriesRequest, WorkoutHistory};
pub use payment::{PaymentRequest, PaymentResponse, PaymentState, PaymentStatus, PaymentType};
pub use profile::{ProfileUpdateResponse, UserProfile};
pub use stats::{UserStats, UserStatsResponse};
pub use subscription::{
    ExpiredCheckResponse, ResourceLimit, ResourceLimitResponse, ResourceType, Subscription,
    SubscriptionPlan, SubscriptionPlansResponse, SubscriptionResponse, UpdatePlanRequest,
    UpdatePlanResponse,
};
pub use workout_plan::{
    CreatePlanRequest, PlanDetailResponse, PlanExerciseInput, PlanListResponse, SetType,
    UpdatePlanRequest as UpdateWorkoutPlanRequest, WorkoutExercise, WorkoutPlan,
};

/// Generic acknowledgement returned by write endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    /// Identifier of the created/affected record, when the endpoint reports one
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub id: Option<i64>,
}

envelope!(ActionResponse);

impl<T> ApiResponse for Vec<T> {
    fn is_success(&self) -> bool {
        true
    }

    fn message(&self) -> Option<&str> {
        None
    }
}
