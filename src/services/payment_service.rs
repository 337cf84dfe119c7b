// ============================================================================
// PAYMENT SERVICE - card tokenization + backend charge
// ============================================================================
// Flow: provider token -> POST /payment/{kind}/{id}/users/{user}
// A provider error stops the flow before the backend is contacted.
// ============================================================================

use async_trait::async_trait;

use crate::error::{AppError, PAYMENT_FAILURE};
use crate::models::{PaymentReceipt, PaymentRequest, PaymentResponse, PaymentTarget};
use crate::utils::stripe_ffi;

/// Turns the card fields into a provider payment method id
#[async_trait(?Send)]
pub trait CardTokenizer {
    async fn create_payment_method(&self, billing_name: &str) -> Result<String, AppError>;
}

/// Charges a payment method against a resource
#[async_trait(?Send)]
pub trait PaymentGateway {
    async fn submit_payment(
        &self,
        target: &PaymentTarget,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, AppError>;
}

/// Card elements mounted by `static/stripe_bridge.js`
#[derive(Debug, Clone, Copy, Default)]
pub struct StripeTokenizer;

impl StripeTokenizer {
    pub async fn mount(publishable_key: &str, ids: (&str, &str, &str)) -> Result<(), AppError> {
        let (number, expiry, cvc) = ids;
        stripe_ffi::mount_card_elements(publishable_key, number, expiry, cvc)
            .await
            .map(|_| log::info!("💳 Card elements mounted"))
            .map_err(|e| AppError::Payment(stripe_ffi::js_error_message(&e)))
    }

    pub fn unmount() {
        stripe_ffi::unmount_card_elements();
    }
}

#[async_trait(?Send)]
impl CardTokenizer for StripeTokenizer {
    async fn create_payment_method(&self, billing_name: &str) -> Result<String, AppError> {
        let result = stripe_ffi::create_card_payment_method(billing_name)
            .await
            .map_err(|e| AppError::Payment(stripe_ffi::js_error_message(&e)))?;
        stripe_ffi::read_payment_method(&result).map_err(AppError::Payment)
    }
}

/// Runs one checkout. `Err` carries the message the checkout view shows.
pub async fn checkout<T, G>(
    tokenizer: &T,
    gateway: &G,
    target: PaymentTarget,
    reservation_name: &str,
) -> Result<PaymentReceipt, AppError>
where
    T: CardTokenizer + ?Sized,
    G: PaymentGateway + ?Sized,
{
    let reservation_name = reservation_name.trim();
    if reservation_name.is_empty() {
        return Err(AppError::validation("Please enter the reservation name"));
    }

    let payment_method = tokenizer
        .create_payment_method(reservation_name)
        .await
        .map_err(|e| {
            log::warn!("⚠️ Card tokenization failed: {}", e);
            e
        })?;

    let request = PaymentRequest {
        reservation_name: reservation_name.to_string(),
        payment_intent: payment_method,
    };

    let response = gateway.submit_payment(&target, &request).await.map_err(|e| {
        log::error!("❌ Payment request failed for {}: {}", target.endpoint(), e);
        e
    })?;

    if let Some(error) = response.error {
        let message = error.message.unwrap_or_else(|| PAYMENT_FAILURE.to_string());
        log::warn!("⚠️ Payment refused by backend: {}", message);
        return Err(AppError::Backend(message));
    }

    log::info!("✅ Payment accepted for {}", target.endpoint());
    Ok(PaymentReceipt {
        target,
        reservation_name: request.reservation_name,
        details: response.receipt,
    })
}

/// What the checkout view prints for a failed attempt
pub fn checkout_error_message(err: &AppError) -> String {
    match err {
        AppError::Payment(msg) | AppError::Backend(msg) | AppError::Validation(msg) => msg.clone(),
        _ => PAYMENT_FAILURE.to_string(),
    }
}
