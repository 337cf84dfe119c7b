use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - the only entity persisted in localStorage
// ============================================================================

/// Authenticated user as stored under the `user` key.
///
/// The token is trusted as long as it is present; there is no local expiry
/// check, a rejected token only shows up as a failing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub user_image: Option<String>,
    pub access_token: String,
    /// Email verification status at login time
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /users/login` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub essential_user_dto: EssentialUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssentialUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub verification_status: bool,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        let user = response.essential_user_dto;
        Self {
            user_id: user.id,
            username: user.username,
            user_image: user.image,
            access_token: response.access_token,
            status: user.verification_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_maps_onto_session_fields() {
        let body = r#"{
            "accessToken": "tok-123",
            "essentialUserDto": {
                "id": 42,
                "username": "nadia",
                "image": "nadia.png",
                "verificationStatus": true,
                "email": "ignored@example.com"
            }
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let session = Session::from(response);

        assert_eq!(
            session,
            Session {
                user_id: 42,
                username: "nadia".into(),
                user_image: Some("nadia.png".into()),
                access_token: "tok-123".into(),
                status: true,
            }
        );
    }

    #[test]
    fn session_serializes_with_camel_case_keys_only() {
        let session = Session {
            user_id: 7,
            username: "li".into(),
            user_image: None,
            access_token: "t".into(),
            status: false,
        };
        let value = serde_json::to_value(&session).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["accessToken", "status", "userId", "userImage", "username"]);
    }
}
