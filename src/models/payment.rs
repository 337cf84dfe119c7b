use serde::{Deserialize, Serialize};

/// What is being paid for; also the path segment of the payment endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Flights,
    Hotels,
    Packages,
}

impl ResourceKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Flights => "flights",
            Self::Hotels => "hotels",
            Self::Packages => "packages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Flights => "flight",
            Self::Hotels => "hotel stay",
            Self::Packages => "package",
        }
    }
}

/// Resource + buyer of a checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTarget {
    pub kind: ResourceKind,
    pub resource_id: i64,
    pub user_id: i64,
}

impl PaymentTarget {
    /// `/payment/{kind}/{id}/users/{user}`, relative to the API base
    pub fn endpoint(&self) -> String {
        format!(
            "/payment/{}/{}/users/{}",
            self.kind.path_segment(),
            self.resource_id,
            self.user_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub reservation_name: String,
    /// Payment method id returned by the provider
    pub payment_intent: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Backend answer to a payment. Whatever else it contains is kept as the receipt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub error: Option<PaymentErrorBody>,
    #[serde(flatten)]
    pub receipt: serde_json::Map<String, serde_json::Value>,
}

impl PaymentResponse {
    /// Reads a 2xx payment body. Only an object with an `error` entry counts
    /// as a refusal; any other body (plain text, empty, array) is a
    /// confirmation; text is kept under `"message"`, other JSON under `"body"`.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::Object(mut map)) => {
                let error = map
                    .remove("error")
                    .filter(|e| !e.is_null())
                    .map(|e| match e {
                        serde_json::Value::String(message) => PaymentErrorBody { message: Some(message) },
                        other => serde_json::from_value(other).unwrap_or_default(),
                    });
                Self { error, receipt: map }
            }
            Ok(serde_json::Value::String(text)) => Self::with_message(text),
            Ok(other) => {
                let mut receipt = serde_json::Map::new();
                receipt.insert("body".to_string(), other);
                Self { error: None, receipt }
            }
            Err(_) => Self::with_message(trimmed.to_string()),
        }
    }

    fn with_message(text: String) -> Self {
        let mut receipt = serde_json::Map::new();
        receipt.insert("message".to_string(), serde_json::Value::String(text));
        Self { error: None, receipt }
    }
}

/// Shown on the confirmation panel once the backend accepted the charge
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub target: PaymentTarget,
    pub reservation_name: String,
    pub details: serde_json::Map<String, serde_json::Value>,
}
