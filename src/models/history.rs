// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout history: finished workouts and their logged series

use serde::{Deserialize, Serialize};

use super::lenient;
use super::CompletedSeries;
use crate::format::{format_duration, DurationStyle};

/// Listing entry for a past workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistory {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "scheda_id", default, deserialize_with = "lenient::int")]
    pub plan_id: i64,
    #[serde(rename = "scheda_nome", default, deserialize_with = "lenient::opt_text")]
    pub plan_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub user_id: i64,
    /// Workout date as sent by the backend (`YYYY-MM-DD HH:MM:SS`)
    #[serde(rename = "data_allenamento", default, deserialize_with = "lenient::text")]
    pub date: String,
    /// Minutes; null or 0 while the workout is unfinished
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub durata_totale: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub note: Option<String>,
}

impl WorkoutHistory {
    pub fn is_completed(&self) -> bool {
        self.durata_totale.is_some_and(|d| d > 0)
    }

    /// Duration for list display, "N/D" when unknown
    pub fn formatted_duration(&self) -> String {
        format_duration(self.durata_totale, DurationStyle::History)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
    #[serde(rename = "allenamenti", default, deserialize_with = "lenient::list")]
    pub workouts: Vec<WorkoutHistory>,
}

envelope!(HistoryResponse);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetailResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
    #[serde(rename = "serie", default, deserialize_with = "lenient::list")]
    pub series: Vec<CompletedSeries>,
}

envelope!(SeriesDetailResponse);

/// Correction of a logged set from the history screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSeriesRequest {
    #[serde(rename = "serie_id")]
    pub series_id: String,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "ripetizioni")]
    pub reps: i64,
    #[serde(rename = "tempo_recupero", skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(durata: &str) -> WorkoutHistory {
        serde_json::from_str(&format!(
            r#"{{"id": 1, "data_allenamento": "2024-03-01 18:00:00", "durata_totale": {}}}"#,
            durata
        ))
        .unwrap()
    }

    #[test]
    fn test_is_completed_from_duration() {
        assert!(!entry("null").is_completed());
        assert!(!entry("0").is_completed());
        assert!(!entry("\"0\"").is_completed());
        assert!(entry("1").is_completed());
        assert!(entry("\"75\"").is_completed());
    }

    #[test]
    fn test_formatted_duration() {
        assert_eq!(entry("125").formatted_duration(), "2 h 05 min");
        assert_eq!(entry("45").formatted_duration(), "45 min");
        assert_eq!(entry("null").formatted_duration(), "N/D");
    }

    #[test]
    fn test_history_response_with_false_list() {
        let response: HistoryResponse =
            serde_json::from_str(r#"{"success": true, "count": 0, "allenamenti": false}"#).unwrap();
        assert!(response.workouts.is_empty());
    }
}
