//! Error taxonomy shared by services, hooks and views.

use thiserror::Error;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";
pub const PAYMENT_FAILURE: &str = "Error processing payment. Please try again later.";

/// Every failure the storefront can observe.
///
/// `Clone + PartialEq` so it can sit inside Yew state (`RemoteData::Failed`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Transport failure: DNS, CORS, connection reset, offline
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered 2xx but the payload carried an error
    #[error("Backend error: {0}")]
    Backend(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {code}: {text}")]
    Status { code: u16, text: String },

    /// Payload could not be decoded (or encoded)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tokenization failed in the payment provider; message is user-facing
    #[error("{0}")]
    Payment(String),

    /// Local form validation failure; message is user-facing
    #[error("{0}")]
    Validation(String),

    /// localStorage unavailable or holding something unreadable
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        Self::Status {
            code,
            text: text.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when the backend refused our credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { code: 401 | 403, .. })
    }

    /// Text safe to put in front of a user. Provider, backend and validation
    /// messages pass through, everything else collapses to a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Payment(msg) | Self::Validation(msg) | Self::Backend(msg) => msg.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Payment("Your card was declined.".into()), "Your card was declined.")]
    #[case(AppError::validation("Passwords do not match"), "Passwords do not match")]
    #[case(AppError::Backend("Flight is full".into()), "Flight is full")]
    #[case(AppError::Network("connection reset".into()), GENERIC_FAILURE)]
    #[case(AppError::status(500, "Internal Server Error"), GENERIC_FAILURE)]
    fn user_message_hides_transport_details(#[case] err: AppError, #[case] expected: &str) {
        assert_eq!(err.user_message(), expected);
    }

    #[test]
    fn unauthorized_statuses_are_detected() {
        assert!(AppError::status(401, "Unauthorized").is_unauthorized());
        assert!(AppError::status(403, "Forbidden").is_unauthorized());
        assert!(!AppError::status(404, "Not Found").is_unauthorized());
        assert!(!AppError::Network("x".into()).is_unauthorized());
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Parse(_)));
    }
}
