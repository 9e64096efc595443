// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PayPal payment endpoints

use async_trait::async_trait;

use super::ServiceResult;
use crate::client::{ApiClient, Endpoint};
use crate::constants::endpoints;
use crate::models::{PaymentRequest, PaymentResponse, PaymentStatus};

const INITIALIZE: Endpoint = Endpoint::post(endpoints::PAYPAL_PAYMENT);
const STATUS: Endpoint = Endpoint::get(endpoints::PAYMENT_STATUS);

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Create an order and obtain the PayPal approval URL
    async fn initialize_payment(&self, request: &PaymentRequest) -> ServiceResult<PaymentResponse>;

    async fn payment_status(&self, order_id: &str) -> ServiceResult<PaymentStatus>;
}

#[async_trait]
impl PaymentService for ApiClient {
    async fn initialize_payment(&self, request: &PaymentRequest) -> ServiceResult<PaymentResponse> {
        self.submit(&INITIALIZE, &[], request).await
    }

    async fn payment_status(&self, order_id: &str) -> ServiceResult<PaymentStatus> {
        self.fetch(&STATUS, &[("order_id", order_id.to_string())]).await
    }
}
