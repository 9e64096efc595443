// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User statistics endpoint

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::UserStatsResponse;

const USER_STATS: Endpoint = Endpoint::get(endpoints::USER_STATS);

#[async_trait]
pub trait StatsService: Send + Sync {
    async fn user_stats(&self, user_id: i64) -> ServiceResult<UserStatsResponse>;
}

#[async_trait]
impl StatsService for ApiClient {
    async fn user_stats(&self, user_id: i64) -> ServiceResult<UserStatsResponse> {
        self.fetch(&USER_STATS, &[("user_id", user_id.to_string())]).await
    }
}
