// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User profile

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{ProfileUpdateResponse, UserProfile};
use crate::services::ProfileService;

pub struct ProfileRepository {
    service: Arc<dyn ProfileService>,
}

impl ProfileRepository {
    pub fn new(service: Arc<dyn ProfileService>) -> Self {
        Self { service }
    }

    /// Empty profile when the backend cannot be reached
    pub async fn get_profile(&self) -> RepoResult<UserProfile> {
        resolve(Operation::GetProfile, self.service.get_profile().await)
    }

    pub async fn update_profile(&self, profile: &UserProfile) -> RepoResult<ProfileUpdateResponse> {
        resolve(Operation::UpdateProfile, self.service.update_profile(profile).await)
    }
}
