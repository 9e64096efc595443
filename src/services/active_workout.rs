// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Active workout ("allenamento") endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::{actions, endpoints};
use crate::models::{
    ActionResponse, CompleteWorkoutRequest, CompleteWorkoutResponse, CompletedSeriesResponse,
    DeleteSeriesRequest, DeleteWorkoutRequest, PlanExercisesResponse, SaveSeriesRequest,
    StartWorkoutRequest, StartWorkoutResponse,
};

const START: Endpoint = Endpoint::post(endpoints::ACTIVE_WORKOUT).with_action(actions::START_WORKOUT);
const PLAN_EXERCISES: Endpoint =
    Endpoint::get(endpoints::ACTIVE_WORKOUT).with_action(actions::PLAN_EXERCISES);
const SAVE_SERIES: Endpoint = Endpoint::post(endpoints::COMPLETED_SERIES);
const COMPLETED_SERIES: Endpoint = Endpoint::get(endpoints::COMPLETED_SERIES);
const DELETE_SERIES: Endpoint = Endpoint::post(endpoints::DELETE_SERIES);
const COMPLETE: Endpoint = Endpoint::post(endpoints::COMPLETE_WORKOUT);
const DELETE: Endpoint = Endpoint::post(endpoints::DELETE_WORKOUT);

#[async_trait]
pub trait ActiveWorkoutService: Send + Sync {
    /// `request.session_id` is forwarded verbatim
    async fn start_workout(&self, request: &StartWorkoutRequest) -> ServiceResult<StartWorkoutResponse>;

    async fn get_plan_exercises(&self, plan_id: i64) -> ServiceResult<PlanExercisesResponse>;

    async fn save_series(&self, request: &SaveSeriesRequest) -> ServiceResult<ActionResponse>;

    async fn get_completed_series(&self, workout_id: i64) -> ServiceResult<CompletedSeriesResponse>;

    async fn delete_series(&self, request: &DeleteSeriesRequest) -> ServiceResult<ActionResponse>;

    async fn complete_workout(
        &self,
        request: &CompleteWorkoutRequest,
    ) -> ServiceResult<CompleteWorkoutResponse>;

    async fn delete_workout(&self, request: &DeleteWorkoutRequest) -> ServiceResult<ActionResponse>;
}

#[async_trait]
impl ActiveWorkoutService for ApiClient {
    async fn start_workout(&self, request: &StartWorkoutRequest) -> ServiceResult<StartWorkoutResponse> {
        self.submit(&START, &[], request).await
    }

    async fn get_plan_exercises(&self, plan_id: i64) -> ServiceResult<PlanExercisesResponse> {
        self.fetch(&PLAN_EXERCISES, &[("scheda_id", plan_id.to_string())]).await
    }

    async fn save_series(&self, request: &SaveSeriesRequest) -> ServiceResult<ActionResponse> {
        self.submit(&SAVE_SERIES, &[], request).await
    }

    async fn get_completed_series(&self, workout_id: i64) -> ServiceResult<CompletedSeriesResponse> {
        self.fetch(&COMPLETED_SERIES, &[("allenamento_id", workout_id.to_string())]).await
    }

    async fn delete_series(&self, request: &DeleteSeriesRequest) -> ServiceResult<ActionResponse> {
        self.submit(&DELETE_SERIES, &[], request).await
    }

    async fn complete_workout(
        &self,
        request: &CompleteWorkoutRequest,
    ) -> ServiceResult<CompleteWorkoutResponse> {
        self.submit(&COMPLETE, &[], request).await
    }

    async fn delete_workout(&self, request: &DeleteWorkoutRequest) -> ServiceResult<ActionResponse> {
        self.submit(&DELETE, &[], request).await
    }
}
