// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exercise catalog

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::Exercise;
use crate::services::ExerciseService;

pub struct ExerciseRepository {
    service: Arc<dyn ExerciseService>,
}

impl ExerciseRepository {
    pub fn new(service: Arc<dyn ExerciseService>) -> Self {
        Self { service }
    }

    pub async fn list_exercises(&self) -> RepoResult<Vec<Exercise>> {
        resolve(Operation::ListExercises, self.service.list_exercises().await)
    }

    pub async fn get_exercise(&self, id: i64) -> RepoResult<Exercise> {
        resolve(Operation::GetExercise, self.service.get_exercise(id).await)
    }
}
