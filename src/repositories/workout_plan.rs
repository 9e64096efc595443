// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout plans

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::errors::ApiError;
use crate::models::{
    ActionResponse, CreatePlanRequest, UpdateWorkoutPlanRequest, WorkoutExercise, WorkoutPlan,
};
use crate::services::WorkoutPlanService;

pub struct WorkoutPlanRepository {
    service: Arc<dyn WorkoutPlanService>,
}

impl WorkoutPlanRepository {
    pub fn new(service: Arc<dyn WorkoutPlanService>) -> Self {
        Self { service }
    }

    pub async fn list_plans(&self, user_id: i64) -> RepoResult<Vec<WorkoutPlan>> {
        resolve(Operation::ListPlans, self.service.list_plans(user_id).await).map(|r| r.plans)
    }

    /// Plan with its exercises; a success envelope without a plan is an error
    pub async fn get_plan(&self, plan_id: i64) -> RepoResult<WorkoutPlan> {
        let response = resolve(Operation::GetPlan, self.service.get_plan(plan_id).await)?;
        response
            .plan
            .ok_or_else(|| ApiError::Backend(format!("Workout plan {} not found", plan_id)))
    }

    pub async fn create_plan(
        &self,
        user_id: i64,
        name: &str,
        description: Option<String>,
        exercises: &[WorkoutExercise],
    ) -> RepoResult<ActionResponse> {
        let request = CreatePlanRequest {
            user_id,
            name: name.to_string(),
            description,
            exercises: exercises.iter().map(Into::into).collect(),
        };
        resolve(Operation::CreatePlan, self.service.create_plan(&request).await)
    }

    pub async fn update_plan(&self, request: &UpdateWorkoutPlanRequest) -> RepoResult<ActionResponse> {
        resolve(Operation::UpdatePlan, self.service.update_plan(request).await)
    }

    pub async fn delete_plan(&self, plan_id: i64) -> RepoResult<ActionResponse> {
        resolve(Operation::DeletePlan, self.service.delete_plan(plan_id).await)
    }
}
