// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Repositories
//!
//! One repository per domain sits between callers and the service traits.
//! Every method performs one service call and hands the outcome to
//! [`resolve`], which
//!
//! 1. turns a `success: false` envelope into [`ApiError::Backend`], then
//! 2. applies the operation's [`FallbackPolicy`]: mutations and single-item
//!    reads propagate failures, list-style reads degrade to an empty value
//!    and log a warning.
//!
//! A non-2xx response is always an error, whatever the policy. Only
//! transport failures, undecodable bodies and `success: false` envelopes
//! fall back.
//!
//! The policy table lives in [`Operation::fallback_policy`] so it can be
//! audited in one place.

use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::client::ApiClient;
use crate::constants::messages;
use crate::errors::ApiError;
use crate::logging::AppLogger;
use crate::models::ApiResponse;

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

pub use active_workout::ActiveWorkoutRepository;
pub use auth::AuthRepository;
pub use exercise::ExerciseRepository;
pub use feedback::FeedbackRepository;
pub use history::HistoryRepository;
pub use payment::PaymentRepository;
pub use profile::ProfileRepository;
pub use stats::StatsRepository;
pub use subscription::SubscriptionRepository;
pub use workout_plan::WorkoutPlanRepository;

/// Every repository wired to one shared [`ApiClient`]
pub struct Repositories {
    pub auth: AuthRepository,
    pub profile: ProfileRepository,
    pub exercises: ExerciseRepository,
    pub plans: WorkoutPlanRepository,
    pub workouts: Arc<ActiveWorkoutRepository>,
    pub history: HistoryRepository,
    pub subscriptions: SubscriptionRepository,
    pub payments: PaymentRepository,
    pub feedback: FeedbackRepository,
    pub stats: StatsRepository,
}

impl Repositories {
    pub fn new(client: Arc<ApiClient>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            auth: AuthRepository::new(client.clone(), credentials),
            profile: ProfileRepository::new(client.clone()),
            exercises: ExerciseRepository::new(client.clone()),
            plans: WorkoutPlanRepository::new(client.clone()),
            workouts: Arc::new(ActiveWorkoutRepository::new(client.clone())),
            history: HistoryRepository::new(client.clone()),
            subscriptions: SubscriptionRepository::new(client.clone()),
            payments: PaymentRepository::new(client.clone()),
            feedback: FeedbackRepository::new(client.clone()),
            stats: StatsRepository::new(client),
        }
    }
}

/// Result type of every repository call
pub type RepoResult<T> = Result<T, ApiError>;

/// What a repository does with a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Return the error to the caller
    Propagate,
    /// Log the error and return the type's default (empty) value
    UseDefault,
}

/// Every repository operation, keyed for the fallback table and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    GetProfile,
    UpdateProfile,
    ListExercises,
    GetExercise,
    ListPlans,
    GetPlan,
    CreatePlan,
    UpdatePlan,
    DeletePlan,
    StartWorkout,
    PlanExercises,
    SaveSeries,
    CompletedSeries,
    DeleteSeries,
    CompleteWorkout,
    DeleteWorkout,
    ListHistory,
    SeriesDetail,
    UpdateHistorySeries,
    DeleteHistorySeries,
    CurrentSubscription,
    SubscriptionPlans,
    ResourceLimit,
    UpdateSubscription,
    CheckExpired,
    InitializePayment,
    PaymentStatus,
    SubmitFeedback,
    UserStats,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::GetProfile => "get_profile",
            Operation::UpdateProfile => "update_profile",
            Operation::ListExercises => "list_exercises",
            Operation::GetExercise => "get_exercise",
            Operation::ListPlans => "list_plans",
            Operation::GetPlan => "get_plan",
            Operation::CreatePlan => "create_plan",
            Operation::UpdatePlan => "update_plan",
            Operation::DeletePlan => "delete_plan",
            Operation::StartWorkout => "start_workout",
            Operation::PlanExercises => "plan_exercises",
            Operation::SaveSeries => "save_series",
            Operation::CompletedSeries => "completed_series",
            Operation::DeleteSeries => "delete_series",
            Operation::CompleteWorkout => "complete_workout",
            Operation::DeleteWorkout => "delete_workout",
            Operation::ListHistory => "list_history",
            Operation::SeriesDetail => "series_detail",
            Operation::UpdateHistorySeries => "update_history_series",
            Operation::DeleteHistorySeries => "delete_history_series",
            Operation::CurrentSubscription => "current_subscription",
            Operation::SubscriptionPlans => "subscription_plans",
            Operation::ResourceLimit => "resource_limit",
            Operation::UpdateSubscription => "update_subscription",
            Operation::CheckExpired => "check_expired",
            Operation::InitializePayment => "initialize_payment",
            Operation::PaymentStatus => "payment_status",
            Operation::SubmitFeedback => "submit_feedback",
            Operation::UserStats => "user_stats",
        }
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        match self {
            Operation::GetProfile
            | Operation::ListExercises
            | Operation::ListPlans
            | Operation::PlanExercises
            | Operation::CompletedSeries
            | Operation::ListHistory
            | Operation::SeriesDetail
            | Operation::CurrentSubscription
            | Operation::SubscriptionPlans
            | Operation::ResourceLimit
            | Operation::UserStats => FallbackPolicy::UseDefault,

            Operation::Login
            | Operation::Register
            | Operation::UpdateProfile
            | Operation::GetExercise
            | Operation::GetPlan
            | Operation::CreatePlan
            | Operation::UpdatePlan
            | Operation::DeletePlan
            | Operation::StartWorkout
            | Operation::SaveSeries
            | Operation::DeleteSeries
            | Operation::CompleteWorkout
            | Operation::DeleteWorkout
            | Operation::UpdateHistorySeries
            | Operation::DeleteHistorySeries
            | Operation::UpdateSubscription
            | Operation::CheckExpired
            | Operation::InitializePayment
            | Operation::PaymentStatus
            | Operation::SubmitFeedback => FallbackPolicy::Propagate,
        }
    }
}

/// Reject `success: false` envelopes
pub fn check_envelope<T: ApiResponse>(value: T) -> RepoResult<T> {
    if value.is_success() {
        Ok(value)
    } else {
        let message = value.message().unwrap_or(messages::BACKEND_FAILURE);
        Err(ApiError::Backend(message.to_string()))
    }
}

/// Envelope check followed by the operation's fallback policy
pub fn resolve<T>(operation: Operation, result: RepoResult<T>) -> RepoResult<T>
where
    T: ApiResponse + Default,
{
    match result.and_then(check_envelope) {
        Ok(value) => Ok(value),
        Err(e) if !e.allows_soft_fallback() => Err(e),
        Err(e) => match operation.fallback_policy() {
            FallbackPolicy::Propagate => Err(e),
            FallbackPolicy::UseDefault => {
                AppLogger::log_soft_fallback(operation.name(), e.kind(), &e.to_string());
                Ok(T::default())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionResponse, HistoryResponse};

    fn failed() -> ActionResponse {
        ActionResponse {
            success: false,
            message: Some("Scheda non trovata".to_string()),
            id: None,
        }
    }

    #[test]
    fn test_mutations_propagate() {
        for op in [
            Operation::Login,
            Operation::Register,
            Operation::SaveSeries,
            Operation::CompleteWorkout,
            Operation::DeleteWorkout,
            Operation::InitializePayment,
            Operation::SubmitFeedback,
        ] {
            assert_eq!(op.fallback_policy(), FallbackPolicy::Propagate, "{:?}", op);
        }
    }

    #[test]
    fn test_list_reads_use_default() {
        for op in [
            Operation::ListExercises,
            Operation::ListPlans,
            Operation::ListHistory,
            Operation::CompletedSeries,
            Operation::UserStats,
        ] {
            assert_eq!(op.fallback_policy(), FallbackPolicy::UseDefault, "{:?}", op);
        }
    }

    #[test]
    fn test_backend_failure_becomes_error() {
        let err = resolve(Operation::DeletePlan, Ok(failed())).unwrap_err();
        match err {
            ApiError::Backend(message) => assert_eq!(message, "Scheda non trovata"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_backend_failure_without_message() {
        let err = check_envelope(ActionResponse::default()).unwrap_err();
        assert!(matches!(err, ApiError::Backend(ref m) if m == messages::BACKEND_FAILURE));
    }

    #[test]
    fn test_soft_fallback_returns_default() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let result: RepoResult<HistoryResponse> =
            resolve(Operation::ListHistory, Err(ApiError::decode(source, "<html>")));
        assert_eq!(result.unwrap(), HistoryResponse::default());

        let result: RepoResult<HistoryResponse> = resolve(
            Operation::ListHistory,
            Ok(HistoryResponse::default()),
        );
        assert_eq!(result.unwrap(), HistoryResponse::default());
    }

    #[test]
    fn test_status_error_skips_soft_fallback() {
        let result: RepoResult<HistoryResponse> =
            resolve(Operation::ListHistory, Err(ApiError::status(500, "boom")));
        assert_eq!(result.unwrap_err().status_code(), Some(500));
    }

    #[test]
    fn test_propagated_status_error_keeps_code() {
        let result: RepoResult<ActionResponse> =
            resolve(Operation::SaveSeries, Err(ApiError::status(503, "down")));
        assert_eq!(result.unwrap_err().status_code(), Some(503));
    }
}
