use serde::{Deserialize, Serialize};

/// `GET /users/{id}/details`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub image: Option<String>,
    pub verification_status: bool,
}

/// `POST /users/register`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub image: String,
    pub full_name: String,
    pub country: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
}

/// `PUT /users/{id}/details` - the editable subset of the profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsUpdate {
    pub full_name: String,
    pub country: String,
    pub address: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub image: Option<String>,
}

impl From<&UserDetails> for UserDetailsUpdate {
    fn from(user: &UserDetails) -> Self {
        Self {
            full_name: user.full_name.clone(),
            country: user.country.clone(),
            address: user.address.clone(),
            date_of_birth: user.date_of_birth.clone(),
            phone_number: user.phone_number.clone(),
            image: user.image.clone(),
        }
    }
}

/// `PUT /users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_tolerate_missing_fields() {
        let user: UserDetails =
            serde_json::from_str(r#"{"username":"amir","fullName":"Amir K","verificationStatus":false}"#).unwrap();
        assert_eq!(user.full_name, "Amir K");
        assert_eq!(user.email, "");
        assert_eq!(user.image, None);
    }

    #[test]
    fn update_carries_editable_fields() {
        let user = UserDetails {
            username: "amir".into(),
            full_name: "Amir K".into(),
            country: "Jordan".into(),
            image: Some("a.png".into()),
            ..UserDetails::default()
        };
        let update = UserDetailsUpdate::from(&user);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["fullName"], "Amir K");
        assert_eq!(json["country"], "Jordan");
        assert_eq!(json["image"], "a.png");
        assert!(json.get("username").is_none());
    }
}
