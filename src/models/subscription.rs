// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subscriptions, plan catalog and plan-dependent resource limits

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;

/// The user's current subscription with usage counters
///
/// `None` maximums mean unlimited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub plan_id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub plan_name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub max_workouts: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub max_custom_exercises: Option<i64>,
    /// Workouts currently counted against the plan
    #[serde(rename = "current_count", default, deserialize_with = "lenient::int")]
    pub workouts_used: i64,
    #[serde(rename = "current_custom_exercises", default, deserialize_with = "lenient::int")]
    pub custom_exercises_used: i64,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub advanced_stats: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cloud_backup: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub no_ads: bool,
}

impl Subscription {
    pub fn is_free(&self) -> bool {
        self.price <= 0.0
    }

    /// Remaining workouts, `None` when unlimited
    pub fn workouts_remaining(&self) -> Option<i64> {
        self.max_workouts
            .map(|max| (max - self.workouts_used).max(0))
    }

    /// Remaining custom exercises, `None` when unlimited
    pub fn custom_exercises_remaining(&self) -> Option<i64> {
        self.max_custom_exercises
            .map(|max| (max - self.custom_exercises_used).max(0))
    }

    pub fn can_create_workout(&self) -> bool {
        self.workouts_remaining().map_or(true, |left| left > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

envelope!(SubscriptionResponse);

/// Catalog entry the user can switch to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub billing_cycle: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub max_workouts: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub max_custom_exercises: Option<i64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub advanced_stats: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cloud_backup: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub no_ads: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlansResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub plans: Vec<SubscriptionPlan>,
}

envelope!(SubscriptionPlansResponse);

/// Plan-dependent resource the backend caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MaxWorkouts,
    MaxCustomExercises,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::MaxWorkouts => "max_workouts",
            ResourceType::MaxCustomExercises => "max_custom_exercises",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current/max/remaining for one resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub limit_reached: bool,
    #[serde(default, deserialize_with = "lenient::int")]
    pub current_count: i64,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub max_allowed: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub remaining: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimitResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub limit: ResourceLimit,
}

envelope!(ResourceLimitResponse);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePlanRequest {
    pub plan_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlanResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub plan_name: Option<String>,
}

envelope!(UpdatePlanResponse);

/// Result of the expired-subscription sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpiredCheckResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub updated_count: i64,
}

envelope!(ExpiredCheckResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_limits() {
        let sub: Subscription = serde_json::from_str(
            r#"{"plan_id": 1, "plan_name": "Free", "price": "0.00",
                "max_workouts": 3, "current_count": "2",
                "max_custom_exercises": null, "current_custom_exercises": 10,
                "advanced_stats": 0, "no_ads": "1"}"#,
        )
        .unwrap();
        assert!(sub.is_free());
        assert_eq!(sub.workouts_remaining(), Some(1));
        assert!(sub.can_create_workout());
        assert_eq!(sub.custom_exercises_remaining(), None);
        assert!(!sub.advanced_stats);
        assert!(sub.no_ads);
    }

    #[test]
    fn test_subscription_over_limit() {
        let sub = Subscription {
            max_workouts: Some(3),
            workouts_used: 5,
            ..Default::default()
        };
        assert_eq!(sub.workouts_remaining(), Some(0));
        assert!(!sub.can_create_workout());
    }

    #[test]
    fn test_resource_limit_flattened() {
        let response: ResourceLimitResponse = serde_json::from_str(
            r#"{"success": true, "limit_reached": false, "current_count": 2, "max_allowed": 3, "remaining": 1}"#,
        )
        .unwrap();
        assert_eq!(response.limit.remaining, Some(1));
        assert_eq!(ResourceType::MaxWorkouts.to_string(), "max_workouts");
    }
}
