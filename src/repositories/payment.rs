// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PayPal payments and donations

use std::sync::Arc;

use super::{resolve, Operation, RepoResult};
use crate::models::{PaymentRequest, PaymentResponse, PaymentStatus};
use crate::services::PaymentService;

pub struct PaymentRepository {
    service: Arc<dyn PaymentService>,
}

impl PaymentRepository {
    pub fn new(service: Arc<dyn PaymentService>) -> Self {
        Self { service }
    }

    pub async fn initialize_payment(&self, request: &PaymentRequest) -> RepoResult<PaymentResponse> {
        resolve(Operation::InitializePayment, self.service.initialize_payment(request).await)
    }

    pub async fn subscribe(&self, amount: f64, plan_id: i64) -> RepoResult<PaymentResponse> {
        self.initialize_payment(&PaymentRequest::subscription(amount, plan_id)).await
    }

    pub async fn donate(
        &self,
        amount: f64,
        message: Option<String>,
        display_message: bool,
    ) -> RepoResult<PaymentResponse> {
        self.initialize_payment(&PaymentRequest::donation(amount, message, display_message))
            .await
    }

    pub async fn payment_status(&self, order_id: &str) -> RepoResult<PaymentStatus> {
        resolve(Operation::PaymentStatus, self.service.payment_status(order_id).await)
    }
}
