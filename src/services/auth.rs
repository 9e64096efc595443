// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Login and registration endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

const LOGIN: Endpoint = Endpoint::post(endpoints::AUTH).with_action(endpoints::AUTH_ACTION_LOGIN);
const REGISTER: Endpoint = Endpoint::post(endpoints::REGISTER);

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ServiceResult<LoginResponse>;

    /// A 409 answer surfaces as `ApiError::Status`; the repository maps it
    async fn register(&self, request: &RegisterRequest) -> ServiceResult<RegisterResponse>;
}

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ServiceResult<LoginResponse> {
        self.submit(&LOGIN, &[], request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ServiceResult<RegisterResponse> {
        self.submit(&REGISTER, &[], request).await
    }
}
