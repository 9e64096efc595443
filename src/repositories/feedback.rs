// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User feedback submission

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{DeviceInfo, FeedbackRequest, FeedbackResponse, FeedbackSeverity, FeedbackType};
use crate::services::FeedbackService;

pub struct FeedbackRepository {
    service: Arc<dyn FeedbackService>,
}

impl FeedbackRepository {
    pub fn new(service: Arc<dyn FeedbackService>) -> Self {
        Self { service }
    }

    pub async fn submit(&self, request: &FeedbackRequest) -> RepoResult<FeedbackResponse> {
        resolve(Operation::SubmitFeedback, self.service.submit_feedback(request).await)
    }

    /// Submit with device details of the running host attached
    pub async fn report(
        &self,
        feedback_type: FeedbackType,
        title: &str,
        description: &str,
        email: Option<String>,
        severity: FeedbackSeverity,
    ) -> RepoResult<FeedbackResponse> {
        let request = FeedbackRequest {
            feedback_type,
            title: title.to_string(),
            description: description.to_string(),
            email,
            severity,
            device_info: DeviceInfo::current(),
        };
        self.submit(&request).await
    }
}
