// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Active workout calls used by the session state machine

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{
    ActionResponse, CompleteWorkoutRequest, CompleteWorkoutResponse, CompletedSeries,
    DeleteSeriesRequest, DeleteWorkoutRequest, SaveSeriesRequest, SeriesData,
    StartWorkoutRequest, StartWorkoutResponse, WorkoutExercise,
};
use crate::services::ActiveWorkoutService;

pub struct ActiveWorkoutRepository {
    service: Arc<dyn ActiveWorkoutService>,
}

impl ActiveWorkoutRepository {
    pub fn new(service: Arc<dyn ActiveWorkoutService>) -> Self {
        Self { service }
    }

    /// Start a workout; `session_id` reaches the backend unchanged
    pub async fn start_workout(
        &self,
        user_id: i64,
        plan_id: i64,
        session_id: &str,
    ) -> RepoResult<StartWorkoutResponse> {
        let request = StartWorkoutRequest {
            user_id,
            plan_id,
            session_id: session_id.to_string(),
        };
        resolve(Operation::StartWorkout, self.service.start_workout(&request).await)
    }

    pub async fn plan_exercises(&self, plan_id: i64) -> RepoResult<Vec<WorkoutExercise>> {
        resolve(Operation::PlanExercises, self.service.get_plan_exercises(plan_id).await)
            .map(|r| r.exercises)
    }

    pub async fn save_series(
        &self,
        workout_id: i64,
        series: Vec<SeriesData>,
        request_id: &str,
    ) -> RepoResult<ActionResponse> {
        let request = SaveSeriesRequest {
            workout_id,
            series,
            request_id: request_id.to_string(),
        };
        resolve(Operation::SaveSeries, self.service.save_series(&request).await)
    }

    pub async fn completed_series(&self, workout_id: i64) -> RepoResult<Vec<CompletedSeries>> {
        resolve(
            Operation::CompletedSeries,
            self.service.get_completed_series(workout_id).await,
        )
        .map(|r| r.series)
    }

    pub async fn delete_series(&self, series_id: &str) -> RepoResult<ActionResponse> {
        let request = DeleteSeriesRequest {
            series_id: series_id.to_string(),
        };
        resolve(Operation::DeleteSeries, self.service.delete_series(&request).await)
    }

    pub async fn complete_workout(
        &self,
        workout_id: i64,
        duration_minutes: i64,
        note: Option<String>,
    ) -> RepoResult<CompleteWorkoutResponse> {
        let request = CompleteWorkoutRequest {
            workout_id,
            duration_minutes,
            note,
        };
        resolve(Operation::CompleteWorkout, self.service.complete_workout(&request).await)
    }

    pub async fn delete_workout(&self, workout_id: i64) -> RepoResult<ActionResponse> {
        let request = DeleteWorkoutRequest { workout_id };
        resolve(Operation::DeleteWorkout, self.service.delete_workout(&request).await)
    }
}
