// ============================================================================
// STRIPE FFI - bindings to static/stripe_bridge.js
// ============================================================================
// The bridge owns the Stripe.js instance and the hosted card elements.
// Rust only mounts them and asks for a payment method.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Loads Stripe with the publishable key and mounts the card number,
    /// expiry and CVC elements into the given container ids.
    #[wasm_bindgen(js_name = mountCardElements, catch)]
    pub async fn mount_card_elements(
        publishable_key: &str,
        number_id: &str,
        expiry_id: &str,
        cvc_id: &str,
    ) -> Result<JsValue, JsValue>;

    /// Resolves to `{ id }` or `{ error: { message } }`
    #[wasm_bindgen(js_name = createCardPaymentMethod, catch)]
    pub async fn create_card_payment_method(billing_name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = unmountCardElements)]
    pub fn unmount_card_elements();
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Reads the bridge result into a payment method id or a user-facing error
pub fn read_payment_method(result: &JsValue) -> Result<String, String> {
    if let Ok(error) = js_sys::Reflect::get(result, &JsValue::from_str("error")) {
        if !error.is_undefined() && !error.is_null() {
            return Err(string_field(&error, "message")
                .unwrap_or_else(|| "Your card could not be processed.".to_string()));
        }
    }
    string_field(result, "id").ok_or_else(|| "Payment provider returned no payment method.".to_string())
}

/// Best-effort text for a rejected promise
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| string_field(err, "message"))
        .unwrap_or_else(|| format!("{:?}", err))
}
