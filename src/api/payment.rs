use reqwest::Method;

use super::{ApiClient, ApiError};
use crate::models::{CheckoutSession, CheckoutSessionRequest};

pub struct PaymentApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn payment(&self) -> PaymentApi<'_> {
        PaymentApi { client: self }
    }
}

impl PaymentApi<'_> {
    /// Asks the service for a hosted checkout page; the result carries the redirect URL.
    pub async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, ApiError> {
        self.client
            .send_json(Method::POST, "/payment/create-checkout-session", request)
            .await
    }
}
