// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exercise catalog endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::Exercise;

const EXERCISES: Endpoint = Endpoint::get(endpoints::EXERCISES);

#[async_trait]
pub trait ExerciseService: Send + Sync {
    async fn list_exercises(&self) -> ServiceResult<Vec<Exercise>>;

    async fn get_exercise(&self, id: i64) -> ServiceResult<Exercise>;
}

#[async_trait]
impl ExerciseService for ApiClient {
    async fn list_exercises(&self) -> ServiceResult<Vec<Exercise>> {
        self.fetch(&EXERCISES, &[]).await
    }

    async fn get_exercise(&self, id: i64) -> ServiceResult<Exercise> {
        self.fetch(&EXERCISES, &[("id", id.to_string())]).await
    }
}
