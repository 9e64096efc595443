// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout plan ("scheda") endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::{actions, endpoints};
use crate::models::{
    ActionResponse, CreatePlanRequest, PlanDetailResponse, PlanListResponse,
    UpdateWorkoutPlanRequest,
};

const LIST_PLANS: Endpoint = Endpoint::get(endpoints::WORKOUT_PLANS);
const PLAN_DETAILS: Endpoint = Endpoint::get(endpoints::WORKOUT_PLANS).with_action(actions::PLAN_DETAILS);
const CREATE_PLAN: Endpoint = Endpoint::post(endpoints::WORKOUT_PLANS);
const UPDATE_PLAN: Endpoint = Endpoint::put(endpoints::WORKOUT_PLANS);
const DELETE_PLAN: Endpoint = Endpoint::delete(endpoints::WORKOUT_PLANS);

#[async_trait]
pub trait WorkoutPlanService: Send + Sync {
    async fn list_plans(&self, user_id: i64) -> ServiceResult<PlanListResponse>;

    async fn get_plan(&self, plan_id: i64) -> ServiceResult<PlanDetailResponse>;

    async fn create_plan(&self, request: &CreatePlanRequest) -> ServiceResult<ActionResponse>;

    async fn update_plan(&self, request: &UpdateWorkoutPlanRequest) -> ServiceResult<ActionResponse>;

    async fn delete_plan(&self, plan_id: i64) -> ServiceResult<ActionResponse>;
}

#[async_trait]
impl WorkoutPlanService for ApiClient {
    async fn list_plans(&self, user_id: i64) -> ServiceResult<PlanListResponse> {
        self.fetch(&LIST_PLANS, &[("user_id", user_id.to_string())]).await
    }

    async fn get_plan(&self, plan_id: i64) -> ServiceResult<PlanDetailResponse> {
        self.fetch(&PLAN_DETAILS, &[("scheda_id", plan_id.to_string())]).await
    }

    async fn create_plan(&self, request: &CreatePlanRequest) -> ServiceResult<ActionResponse> {
        self.submit(&CREATE_PLAN, &[], request).await
    }

    async fn update_plan(&self, request: &UpdateWorkoutPlanRequest) -> ServiceResult<ActionResponse> {
        self.submit(&UPDATE_PLAN, &[], request).await
    }

    async fn delete_plan(&self, plan_id: i64) -> ServiceResult<ActionResponse> {
        self.fetch(&DELETE_PLAN, &[("scheda_id", plan_id.to_string())]).await
    }
}
