// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User feedback endpoint

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::{actions, endpoints};
use crate::models::{FeedbackRequest, FeedbackResponse};

const SUBMIT: Endpoint = Endpoint::post(endpoints::FEEDBACK).with_action(actions::SUBMIT_FEEDBACK);

#[async_trait]
pub trait FeedbackService: Send + Sync {
    async fn submit_feedback(&self, request: &FeedbackRequest) -> ServiceResult<FeedbackResponse>;
}

#[async_trait]
impl FeedbackService for ApiClient {
    async fn submit_feedback(&self, request: &FeedbackRequest) -> ServiceResult<FeedbackResponse> {
        self.submit(&SUBMIT, &[], request).await
    }
}
