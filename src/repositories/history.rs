// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout history

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{
    ActionResponse, CompletedSeries, DeleteSeriesRequest, UpdateSeriesRequest, WorkoutHistory,
};
use crate::services::HistoryService;

pub struct HistoryRepository {
    service: Arc<dyn HistoryService>,
}

impl HistoryRepository {
    pub fn new(service: Arc<dyn HistoryService>) -> Self {
        Self { service }
    }

    pub async fn list_history(&self, user_id: i64) -> RepoResult<Vec<WorkoutHistory>> {
        resolve(Operation::ListHistory, self.service.list_history(user_id).await)
            .map(|r| r.workouts)
    }

    pub async fn series_detail(&self, workout_id: i64) -> RepoResult<Vec<CompletedSeries>> {
        resolve(Operation::SeriesDetail, self.service.get_series_detail(workout_id).await)
            .map(|r| r.series)
    }

    pub async fn update_series(&self, request: &UpdateSeriesRequest) -> RepoResult<ActionResponse> {
        resolve(Operation::UpdateHistorySeries, self.service.update_series(request).await)
    }

    pub async fn delete_series(&self, series_id: &str) -> RepoResult<ActionResponse> {
        let request = DeleteSeriesRequest {
            series_id: series_id.to_string(),
        };
        resolve(Operation::DeleteHistorySeries, self.service.delete_series(&request).await)
    }
}
