// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User profile endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::{ProfileUpdateResponse, UserProfile};

const GET_PROFILE: Endpoint = Endpoint::get(endpoints::PROFILE);
const UPDATE_PROFILE: Endpoint = Endpoint::put(endpoints::PROFILE);

#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Profile of the authenticated user
    async fn get_profile(&self) -> ServiceResult<UserProfile>;

    async fn update_profile(&self, profile: &UserProfile) -> ServiceResult<ProfileUpdateResponse>;
}

#[async_trait]
impl ProfileService for ApiClient {
    async fn get_profile(&self) -> ServiceResult<UserProfile> {
        self.fetch(&GET_PROFILE, &[]).await
    }

    async fn update_profile(&self, profile: &UserProfile) -> ServiceResult<ProfileUpdateResponse> {
        self.submit(&UPDATE_PROFILE, &[], profile).await
    }
}
