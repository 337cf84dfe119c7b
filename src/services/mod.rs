pub mod api_client;
pub mod auth_service;
pub mod payment_service;
pub mod session_service;

pub use api_client::ApiClient;
pub use auth_service::{delete_account, sign_in, AccountApi, SignedIn};
pub use payment_service::{checkout, checkout_error_message, CardTokenizer, PaymentGateway, StripeTokenizer};
pub use session_service::SessionService;
