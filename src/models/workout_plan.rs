// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout plans ("schede") and the exercises they prescribe

use serde::{Deserialize, Serialize};

use super::lenient;

/// How a prescribed exercise is performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    /// Held positions; `reps` is the hold time in seconds
    Isometric,
    /// Chained with the previous exercise (superset/circuit)
    #[serde(alias = "superset", alias = "circuit")]
    Linked,
    /// Sets of repetitions; also any type this client does not know
    #[default]
    #[serde(other)]
    Normal,
}

/// Exercise as prescribed inside a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Row id of the plan/exercise association
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    /// Catalog exercise id
    #[serde(rename = "esercizio_id", default, deserialize_with = "lenient::int")]
    pub exercise_id: i64,
    #[serde(rename = "nome", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "serie", default, deserialize_with = "lenient::int")]
    pub sets: i64,
    #[serde(rename = "ripetizioni", default, deserialize_with = "lenient::int")]
    pub reps: i64,
    #[serde(rename = "peso", default, deserialize_with = "lenient::number")]
    pub weight: f64,
    /// Rest between sets, in seconds
    #[serde(rename = "tempo_recupero", default, deserialize_with = "lenient::int")]
    pub rest_seconds: i64,
    #[serde(rename = "ordine", default, deserialize_with = "lenient::int")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub set_type: SetType,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub linked_to_previous: bool,
    #[serde(rename = "note", default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,
}

/// A user's workout plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "nome", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "descrizione", default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    /// Creation date as sent by the backend (`YYYY-MM-DD HH:MM:SS`)
    #[serde(rename = "data_creazione", default, deserialize_with = "lenient::opt_text")]
    pub created_at: Option<String>,
    #[serde(rename = "esercizi", default, deserialize_with = "lenient::list")]
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutPlan {
    /// Exercises in execution order
    pub fn ordered_exercises(&self) -> Vec<&WorkoutExercise> {
        let mut exercises: Vec<&WorkoutExercise> = self.exercises.iter().collect();
        exercises.sort_by_key(|e| e.order);
        exercises
    }

    /// Sets prescribed across all exercises
    pub fn total_sets(&self) -> i64 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

/// Exercise entry sent when creating or editing a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanExerciseInput {
    /// Catalog exercise id
    pub id: i64,
    #[serde(rename = "serie")]
    pub sets: i64,
    #[serde(rename = "ripetizioni")]
    pub reps: i64,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "tempo_recupero")]
    pub rest_seconds: i64,
    #[serde(rename = "ordine")]
    pub order: i64,
    pub set_type: SetType,
    pub linked_to_previous: bool,
    #[serde(rename = "note", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&WorkoutExercise> for PlanExerciseInput {
    fn from(exercise: &WorkoutExercise) -> Self {
        Self {
            id: exercise.exercise_id,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
            rest_seconds: exercise.rest_seconds,
            order: exercise.order,
            set_type: exercise.set_type,
            linked_to_previous: exercise.linked_to_previous,
            notes: exercise.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePlanRequest {
    pub user_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descrizione", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "esercizi")]
    pub exercises: Vec<PlanExerciseInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePlanRequest {
    #[serde(rename = "scheda_id")]
    pub plan_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descrizione", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "esercizi")]
    pub exercises: Vec<PlanExerciseInput>,
    /// Association rows removed from the plan
    #[serde(rename = "rimuovi", skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanListResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "schede", default, deserialize_with = "lenient::list")]
    pub plans: Vec<WorkoutPlan>,
}

envelope!(PlanListResponse);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDetailResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(rename = "scheda", default)]
    pub plan: Option<WorkoutPlan>,
}

envelope!(PlanDetailResponse);
