/// localStorage key holding the serialized session
pub const STORAGE_KEY_USER: &str = "user";
/// localStorage key holding the raw access token
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "accessToken";

/// Element ids the Stripe bridge mounts the hosted card fields into
pub const CARD_NUMBER_ELEMENT_ID: &str = "card-number-element";
pub const CARD_EXPIRY_ELEMENT_ID: &str = "card-expiry-element";
pub const CARD_CVC_ELEMENT_ID: &str = "card-cvc-element";

/// Delay before leaving the reset-password screen after success
pub const RESET_REDIRECT_DELAY_MS: u32 = 2000;
