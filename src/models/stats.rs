// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Aggregated training statistics for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_workouts: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_hours: f64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub current_streak: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub longest_streak: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub weekly_average: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub monthly_average: f64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub favorite_exercise: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_exercises_performed: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_sets_completed: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_reps_completed: i64,
    /// Average duration in minutes
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub average_workout_duration: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub most_active_day: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub first_workout_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub last_workout_date: Option<String>,
}

impl UserStats {
    pub fn has_data(&self) -> bool {
        self.total_workouts > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatsResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub stats: UserStats,
}

envelope!(UserStatsResponse);
