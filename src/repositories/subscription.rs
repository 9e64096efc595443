// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subscriptions and plan limits

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{
    ExpiredCheckResponse, ResourceLimit, ResourceType, Subscription, SubscriptionPlan,
    UpdatePlanRequest, UpdatePlanResponse,
};
use crate::services::SubscriptionService;

pub struct SubscriptionRepository {
    service: Arc<dyn SubscriptionService>,
}

impl SubscriptionRepository {
    pub fn new(service: Arc<dyn SubscriptionService>) -> Self {
        Self { service }
    }

    /// `None` when the user has no subscription or it could not be loaded
    pub async fn current_subscription(&self) -> RepoResult<Option<Subscription>> {
        resolve(Operation::CurrentSubscription, self.service.current_subscription().await)
            .map(|r| r.subscription)
    }

    pub async fn available_plans(&self) -> RepoResult<Vec<SubscriptionPlan>> {
        resolve(Operation::SubscriptionPlans, self.service.list_plans().await).map(|r| r.plans)
    }

    pub async fn check_resource_limit(&self, resource: ResourceType) -> RepoResult<ResourceLimit> {
        resolve(Operation::ResourceLimit, self.service.check_resource_limit(resource).await)
            .map(|r| r.limit)
    }

    pub async fn update_plan(&self, plan_id: i64) -> RepoResult<UpdatePlanResponse> {
        let request = UpdatePlanRequest { plan_id };
        resolve(Operation::UpdateSubscription, self.service.update_plan(&request).await)
    }

    pub async fn check_expired_subscriptions(&self) -> RepoResult<ExpiredCheckResponse> {
        resolve(Operation::CheckExpired, self.service.check_expired_subscriptions().await)
    }
}
