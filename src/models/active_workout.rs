// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Active workout ("allenamento") records: start, logged series, completion

use serde::{Deserialize, Serialize};

use super::lenient;
use super::WorkoutExercise;

/// Payload for starting a workout from a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartWorkoutRequest {
    pub user_id: i64,
    #[serde(rename = "scheda_id")]
    pub plan_id: i64,
    /// Client-generated correlation key; the backend deduplicates on it
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartWorkoutResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "allenamento_id", default, deserialize_with = "lenient::int")]
    pub workout_id: i64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub session_id: Option<String>,
}

envelope!(StartWorkoutResponse);

/// A running instance of a workout plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveWorkout {
    #[serde(rename = "allenamento_id")]
    pub id: i64,
    #[serde(rename = "scheda_id")]
    pub plan_id: i64,
    pub user_id: i64,
    pub session_id: String,
    /// Start time, RFC 3339
    pub started_at: String,
    /// Total duration in minutes, set once the workout is completed
    #[serde(rename = "durata_totale")]
    pub duration_minutes: Option<i64>,
    pub note: Option<String>,
    #[serde(rename = "esercizi")]
    pub exercises: Vec<WorkoutExercise>,
}

impl ActiveWorkout {
    pub fn is_completed(&self) -> bool {
        self.duration_minutes.is_some_and(|d| d > 0)
    }
}

/// Exercises of the plan a workout was started from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanExercisesResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "esercizi", default, deserialize_with = "lenient::list")]
    pub exercises: Vec<WorkoutExercise>,
}

envelope!(PlanExercisesResponse);

/// One set as logged by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    /// Plan/exercise association the set belongs to
    #[serde(rename = "scheda_esercizio_id")]
    pub plan_exercise_id: i64,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "ripetizioni")]
    pub reps: i64,
    #[serde(rename = "completata")]
    pub completed: i64,
    /// Rest actually taken, in seconds
    #[serde(rename = "tempo_recupero", skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<i64>,
    #[serde(rename = "note", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "serie_number", skip_serializing_if = "Option::is_none")]
    pub series_number: Option<i64>,
    /// Existing series id, when re-sending an update
    #[serde(rename = "serie_id", skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,
}

impl SeriesData {
    pub fn new(plan_exercise_id: i64, weight: f64, reps: i64) -> Self {
        Self {
            plan_exercise_id,
            weight,
            reps,
            completed: 1,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveSeriesRequest {
    #[serde(rename = "allenamento_id")]
    pub workout_id: i64,
    #[serde(rename = "serie")]
    pub series: Vec<SeriesData>,
    /// Client-generated key so a retried save is not stored twice
    pub request_id: String,
}

/// A set stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletedSeries {
    /// Backend ids are sometimes numeric, sometimes prefixed strings
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(rename = "scheda_esercizio_id", default, deserialize_with = "lenient::int")]
    pub plan_exercise_id: i64,
    #[serde(rename = "esercizio_id", default, deserialize_with = "lenient::opt_int")]
    pub exercise_id: Option<i64>,
    #[serde(rename = "esercizio_nome", default, deserialize_with = "lenient::opt_text")]
    pub exercise_name: Option<String>,
    #[serde(rename = "peso", default, deserialize_with = "lenient::number")]
    pub weight: f64,
    #[serde(rename = "ripetizioni", default, deserialize_with = "lenient::int")]
    pub reps: i64,
    #[serde(rename = "tempo_recupero", default, deserialize_with = "lenient::opt_int")]
    pub rest_seconds: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub note: Option<String>,
    #[serde(rename = "serie_number", default, deserialize_with = "lenient::opt_int")]
    pub series_number: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub timestamp: Option<String>,
}

impl CompletedSeries {
    /// Weight × reps for this set
    pub fn volume(&self) -> f64 {
        self.weight * self.reps as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletedSeriesResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "serie", default, deserialize_with = "lenient::list")]
    pub series: Vec<CompletedSeries>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
}

envelope!(CompletedSeriesResponse);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteWorkoutRequest {
    #[serde(rename = "allenamento_id")]
    pub workout_id: i64,
    /// Total duration in minutes
    #[serde(rename = "durata_totale")]
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompleteWorkoutResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "allenamento_id", default, deserialize_with = "lenient::int")]
    pub workout_id: i64,
    #[serde(rename = "durata_totale", default, deserialize_with = "lenient::opt_int")]
    pub duration_minutes: Option<i64>,
}

envelope!(CompleteWorkoutResponse);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteWorkoutRequest {
    #[serde(rename = "allenamento_id")]
    pub workout_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteSeriesRequest {
    #[serde(rename = "serie_id")]
    pub series_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_data_skips_unset_fields() {
        let json = serde_json::to_value(SeriesData::new(12, 40.0, 8)).unwrap();
        assert_eq!(json["scheda_esercizio_id"], 12);
        assert_eq!(json["peso"], 40.0);
        assert_eq!(json["completata"], 1);
        assert!(json.get("serie_id").is_none());
        assert!(json.get("tempo_recupero").is_none());
    }

    #[test]
    fn test_completed_series_accepts_string_ids() {
        let response: CompletedSeriesResponse = serde_json::from_str(
            r#"{"success": true, "count": 1, "serie": [
                {"id": "serie_991", "scheda_esercizio_id": "4", "peso": "22.5", "ripetizioni": "10"}
            ]}"#,
        )
        .unwrap();
        let series = &response.series[0];
        assert_eq!(series.id, "serie_991");
        assert_eq!(series.plan_exercise_id, 4);
        assert_eq!(series.volume(), 225.0);
    }

    #[test]
    fn test_active_workout_completion() {
        let mut workout = ActiveWorkout::default();
        assert!(!workout.is_completed());
        workout.duration_minutes = Some(0);
        assert!(!workout.is_completed());
        workout.duration_minutes = Some(42);
        assert!(workout.is_completed());
    }
}
