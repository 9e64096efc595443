// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PayPal payment and donation records

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Subscription,
    Donation,
}

/// Payload that asks the backend to create a PayPal order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether a donation message may be shown publicly
    pub display_message: bool,
}

impl PaymentRequest {
    pub fn subscription(amount: f64, plan_id: i64) -> Self {
        Self {
            amount,
            payment_type: PaymentType::Subscription,
            plan_id: Some(plan_id),
            message: None,
            display_message: false,
        }
    }

    pub fn donation(amount: f64, message: Option<String>, display_message: bool) -> Self {
        Self {
            amount,
            payment_type: PaymentType::Donation,
            plan_id: None,
            message,
            display_message,
        }
    }
}

/// Order created on the backend; the user completes it at `approval_url`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub approval_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub order_id: Option<String>,
}

envelope!(PaymentResponse);

/// Lifecycle of a PayPal order as reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    #[default]
    Pending,
    Created,
    Approved,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PaymentState {
    /// No further transitions are expected
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            PaymentState::Completed | PaymentState::Failed | PaymentState::Cancelled
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatus {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub order_id: String,
    #[serde(default)]
    pub status: PaymentState,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub amount: Option<f64>,
    #[serde(rename = "type", default)]
    pub payment_type: Option<PaymentType>,
}

envelope!(PaymentStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donation_request_wire_format() {
        let json = serde_json::to_value(PaymentRequest::donation(5.0, Some("Forza!".into()), true))
            .unwrap();
        assert_eq!(json["type"], "donation");
        assert_eq!(json["amount"], 5.0);
        assert_eq!(json["message"], "Forza!");
        assert!(json.get("plan_id").is_none());
    }

    #[test]
    fn test_payment_state_parsing() {
        let status: PaymentStatus = serde_json::from_str(
            r#"{"success": true, "order_id": "5O190127TN364715T", "status": "completed", "amount": "4.99", "type": "subscription"}"#,
        )
        .unwrap();
        assert_eq!(status.status, PaymentState::Completed);
        assert!(status.status.is_final());
        assert_eq!(status.amount, Some(4.99));

        let odd: PaymentStatus = serde_json::from_str(r#"{"status": "refunded"}"#).unwrap();
        assert_eq!(odd.status, PaymentState::Unknown);
        assert!(!odd.status.is_final());
    }
}
