// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout history endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::{
    ActionResponse, DeleteSeriesRequest, HistoryResponse, SeriesDetailResponse,
    UpdateSeriesRequest,
};

const HISTORY: Endpoint = Endpoint::get(endpoints::HISTORY);
const SERIES_DETAIL: Endpoint = Endpoint::get(endpoints::SERIES_DETAIL);
const UPDATE_SERIES: Endpoint = Endpoint::post(endpoints::UPDATE_SERIES);
const DELETE_SERIES: Endpoint = Endpoint::post(endpoints::DELETE_SERIES);

#[async_trait]
pub trait HistoryService: Send + Sync {
    async fn list_history(&self, user_id: i64) -> ServiceResult<HistoryResponse>;

    async fn get_series_detail(&self, workout_id: i64) -> ServiceResult<SeriesDetailResponse>;

    async fn update_series(&self, request: &UpdateSeriesRequest) -> ServiceResult<ActionResponse>;

    async fn delete_series(&self, request: &DeleteSeriesRequest) -> ServiceResult<ActionResponse>;
}

#[async_trait]
impl HistoryService for ApiClient {
    async fn list_history(&self, user_id: i64) -> ServiceResult<HistoryResponse> {
        self.fetch(&HISTORY, &[("user_id", user_id.to_string())]).await
    }

    async fn get_series_detail(&self, workout_id: i64) -> ServiceResult<SeriesDetailResponse> {
        self.fetch(&SERIES_DETAIL, &[("allenamento_id", workout_id.to_string())]).await
    }

    async fn update_series(&self, request: &UpdateSeriesRequest) -> ServiceResult<ActionResponse> {
        self.submit(&UPDATE_SERIES, &[], request).await
    }

    async fn delete_series(&self, request: &DeleteSeriesRequest) -> ServiceResult<ActionResponse> {
        self.submit(&DELETE_SERIES, &[], request).await
    }
}
