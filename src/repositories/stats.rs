// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User statistics

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::UserStats;
use crate::services::StatsService;

pub struct StatsRepository {
    service: Arc<dyn StatsService>,
}

impl StatsRepository {
    pub fn new(service: Arc<dyn StatsService>) -> Self {
        Self { service }
    }

    /// Zeroed statistics when the backend cannot be reached
    pub async fn user_stats(&self, user_id: i64) -> RepoResult<UserStats> {
        resolve(Operation::UserStats, self.service.user_stats(user_id).await).map(|r| r.stats)
    }
}
