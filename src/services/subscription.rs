// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subscription endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::{actions, endpoints};
use crate::models::{
    ExpiredCheckResponse, ResourceLimitResponse, ResourceType, SubscriptionPlansResponse,
    SubscriptionResponse, UpdatePlanRequest, UpdatePlanResponse,
};

const CURRENT: Endpoint =
    Endpoint::get(endpoints::SUBSCRIPTION).with_action(actions::CURRENT_SUBSCRIPTION);
const PLANS: Endpoint = Endpoint::get(endpoints::SUBSCRIPTION_PLANS);
const CHECK_LIMITS: Endpoint = Endpoint::get(endpoints::SUBSCRIPTION).with_action(actions::CHECK_LIMITS);
const UPDATE_PLAN: Endpoint = Endpoint::post(endpoints::SUBSCRIPTION).with_action(actions::UPDATE_PLAN);
const CHECK_EXPIRED: Endpoint =
    Endpoint::post(endpoints::SUBSCRIPTION).with_action(actions::CHECK_EXPIRED);

#[async_trait]
pub trait SubscriptionService: Send + Sync {
    async fn current_subscription(&self) -> ServiceResult<SubscriptionResponse>;

    /// Plan catalog
    async fn list_plans(&self) -> ServiceResult<SubscriptionPlansResponse>;

    async fn check_resource_limit(&self, resource: ResourceType) -> ServiceResult<ResourceLimitResponse>;

    async fn update_plan(&self, request: &UpdatePlanRequest) -> ServiceResult<UpdatePlanResponse>;

    /// Ask the backend to downgrade expired subscriptions
    async fn check_expired_subscriptions(&self) -> ServiceResult<ExpiredCheckResponse>;
}

#[async_trait]
impl SubscriptionService for ApiClient {
    async fn current_subscription(&self) -> ServiceResult<SubscriptionResponse> {
        self.fetch(&CURRENT, &[]).await
    }

    async fn list_plans(&self) -> ServiceResult<SubscriptionPlansResponse> {
        self.fetch(&PLANS, &[]).await
    }

    async fn check_resource_limit(&self, resource: ResourceType) -> ServiceResult<ResourceLimitResponse> {
        self.fetch(&CHECK_LIMITS, &[("resource_type", resource.to_string())]).await
    }

    async fn update_plan(&self, request: &UpdatePlanRequest) -> ServiceResult<UpdatePlanResponse> {
        self.submit(&UPDATE_PLAN, &[], request).await
    }

    async fn check_expired_subscriptions(&self) -> ServiceResult<ExpiredCheckResponse> {
        self.submit(&CHECK_EXPIRED, &[], &serde_json::json!({})).await
    }
}
