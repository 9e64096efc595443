// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! User feedback reports

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::constants::client::{CLIENT_NAME, CLIENT_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Bug,
    Suggestion,
    Compliment,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSeverity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Static device/app metadata attached to a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub platform: String,
    pub os_family: String,
    pub arch: String,
    pub app_name: String,
    pub app_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl DeviceInfo {
    /// Metadata for the running process
    pub fn current() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            os_family: std::env::consts::FAMILY.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            app_name: CLIENT_NAME.to_string(),
            app_version: CLIENT_VERSION.to_string(),
            device_model: None,
            locale: std::env::var("LANG").ok().filter(|l| !l.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub severity: FeedbackSeverity,
    pub device_info: DeviceInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub feedback_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub attachments_count: i64,
}

envelope!(FeedbackResponse);
