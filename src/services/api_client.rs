// ============================================================================
// API CLIENT - HTTP only (stateless apart from the bearer token)
// ============================================================================
// No business logic here: build the request, send it, map the status and
// decode the body. Views and hooks decide what to do with the result.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{
    Airport, CountryDetails, CountrySummary, Flight, Hotel, LoginRequest, LoginResponse,
    PackageDetails, PackageSummary, PasswordReset, PaymentRequest, PaymentResponse,
    PaymentTarget, PlaceDetails, PlaceMatch, PlaceSummary, RegisterUser, RoomDetails,
    Session, UserDetails, UserDetailsUpdate,
};
use crate::services::auth_service::AccountApi;
use crate::services::payment_service::PaymentGateway;
use crate::utils::PageRequest;

type Builder = fn(&str) -> RequestBuilder;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.base_api.as_str())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client that sends `Authorization: Bearer` when a session exists
    pub fn for_session(session: Option<&Session>) -> Self {
        let mut client = Self::new();
        client.token = session.map(|s| s.access_token.clone());
        client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, build: Builder, path: &str) -> RequestBuilder {
        let builder = build(&self.url(path));
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        log::debug!("🌐 GET {}", path);
        let response = self.request(Request::get, path).send().await?;
        read_json(response).await
    }

    async fn get_json_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        page: PageRequest,
    ) -> Result<T, AppError> {
        log::debug!("🌐 GET {} (page={}, size={})", path, page.page, page.size);
        let response = self
            .request(Request::get, path)
            .query([("page", page.page.to_string()), ("size", page.size.to_string())])
            .send()
            .await?;
        read_json(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        build: Builder,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.request(build, path).json(body)?.send().await?;
        read_json(response).await
    }

    /// For endpoints whose body we do not care about
    async fn send_expect_ok<B: Serialize>(
        &self,
        build: Builder,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), AppError> {
        let builder = self.request(build, path);
        let response = match body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };
        if response.ok() {
            Ok(())
        } else {
            Err(status_error(&response).await)
        }
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        log::info!("🔐 Login for user: {}", username);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send_json(Request::post, "/users/login", &request).await
    }

    pub async fn register(&self, user: &RegisterUser) -> Result<(), AppError> {
        log::info!("📝 Registering user: {}", user.username);
        self.send_expect_ok(Request::post, "/users/register", Some(user)).await
    }

    pub async fn user_details(&self, user_id: i64) -> Result<UserDetails, AppError> {
        self.get_json(&format!("/users/{}/details", user_id)).await
    }

    pub async fn update_user_details(
        &self,
        user_id: i64,
        update: &UserDetailsUpdate,
    ) -> Result<(), AppError> {
        log::info!("📝 Updating details of user {}", user_id);
        self.send_expect_ok(Request::put, &format!("/users/{}/details", user_id), Some(update))
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        log::info!("🗑️ Deleting user {}", user_id);
        self.send_expect_ok::<()>(Request::delete, &format!("/users/{}", user_id), None)
            .await
    }

    /// Asks the backend to send the verification email
    pub async fn request_verification(&self, user_id: i64, token: &str) -> Result<(), AppError> {
        log::info!("📧 Requesting verification email for user {}", user_id);
        let path = format!("/users/verification/users/{}/{}", user_id, token);
        self.send_expect_ok::<()>(Request::post, &path, None).await
    }

    pub async fn reset_password(&self, user_id: i64, password: &str) -> Result<(), AppError> {
        log::info!("🔑 Resetting password of user {}", user_id);
        let body = PasswordReset {
            password: password.to_string(),
        };
        self.send_expect_ok(Request::put, &format!("/users/{}", user_id), Some(&body))
            .await
    }

    /// Multipart upload; the backend answers with the stored file name
    pub async fn upload_image(&self, file: &web_sys::File) -> Result<String, AppError> {
        log::info!("🖼️ Uploading image: {}", file.name());
        let form = web_sys::FormData::new()
            .map_err(|_| AppError::Network("FormData unavailable".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| AppError::Network("could not attach file".to_string()))?;

        let response = self.request(Request::post, "/image").body(form)?.send().await?;
        if !response.ok() {
            return Err(status_error(&response).await);
        }
        let text = response.text().await?;
        stored_file_name(&text)
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    pub async fn countries(&self) -> Result<Vec<CountrySummary>, AppError> {
        self.get_json("/countries").await
    }

    pub async fn country_details(&self, id: i64) -> Result<CountryDetails, AppError> {
        self.get_json(&format!("/countries/{}/details", id)).await
    }

    pub async fn country_places(&self, id: i64) -> Result<Vec<PlaceSummary>, AppError> {
        self.get_json(&format!("/countries/{}/places", id)).await
    }

    pub async fn country_packages(&self, id: i64) -> Result<Vec<PackageSummary>, AppError> {
        self.get_json(&format!("/countries/{}/packages", id)).await
    }

    pub async fn place_details(&self, id: i64) -> Result<PlaceDetails, AppError> {
        self.get_json(&format!("/places/{}/details", id)).await
    }

    pub async fn package_details(&self, id: i64) -> Result<PackageDetails, AppError> {
        self.get_json(&format!("/packages/{}/details", id)).await
    }

    pub async fn find_places(&self, name: &str) -> Result<Vec<PlaceMatch>, AppError> {
        let response = self
            .request(Request::get, "/places/place")
            .query([("place", name)])
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn place_airports(&self, place_id: i64) -> Result<Vec<Airport>, AppError> {
        self.get_json(&format!("/places/{}/airports", place_id)).await
    }

    /// Place name -> first matching place -> its airports
    pub async fn airports_for_place_name(&self, name: &str) -> Result<Vec<Airport>, AppError> {
        let places = self.find_places(name).await?;
        let place = places
            .first()
            .ok_or_else(|| AppError::Backend(format!("No place found for '{}'", name)))?;
        log::info!("✈️ Resolving airports for {} (place {})", name, place.place_id);
        self.place_airports(place.place_id).await
    }

    // ------------------------------------------------------------------------
    // Stays & flights
    // ------------------------------------------------------------------------

    pub async fn hotels_for_place(
        &self,
        place_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Hotel>, AppError> {
        self.get_json_paged(&format!("/hotels/hotel/places/{}", place_id), page)
            .await
    }

    pub async fn room_details(&self, hotel_id: i64) -> Result<RoomDetails, AppError> {
        self.get_json(&format!("/hotels/{}/rooms/details", hotel_id)).await
    }

    pub async fn flights(
        &self,
        from_airport: i64,
        to_airport: i64,
        page: PageRequest,
    ) -> Result<Vec<Flight>, AppError> {
        let path = format!(
            "/flights/flight/departures/{}/destinations/{}",
            from_airport, to_airport
        );
        self.get_json_paged(&path, page).await
    }
}

#[async_trait(?Send)]
impl PaymentGateway for ApiClient {
    async fn submit_payment(
        &self,
        target: &PaymentTarget,
        request: &PaymentRequest,
    ) -> Result<PaymentResponse, AppError> {
        log::info!("💳 Submitting payment: {}", target.endpoint());
        let response = self
            .request(Request::post, &target.endpoint())
            .json(request)?
            .send()
            .await?;
        if !response.ok() {
            return Err(status_error(&response).await);
        }
        let body = response.text().await?;
        Ok(PaymentResponse::from_body(&body))
    }
}

#[async_trait(?Send)]
impl AccountApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        ApiClient::login(self, username, password).await
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        ApiClient::delete_user(self, user_id).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.ok() {
        return Err(status_error(&response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))
}

async fn status_error(response: &Response) -> AppError {
    let code = response.status();
    let text = response
        .text()
        .await
        .ok()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| response.status_text());
    log::error!("❌ HTTP {}: {}", code, text);
    AppError::status(code, text)
}

/// The upload endpoint answers with the file name, sometimes JSON-quoted
fn stored_file_name(body: &str) -> Result<String, AppError> {
    let name = serde_json::from_str::<String>(body)
        .unwrap_or_else(|_| body.trim().to_string());
    if name.is_empty() {
        Err(AppError::Backend("Image upload returned no file name".to_string()))
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_onto_the_base() {
        let api = ApiClient::with_base_url("https://api.example.com/v1/");
        assert_eq!(api.url("/countries"), "https://api.example.com/v1/countries");
    }

    #[test]
    fn session_token_is_kept_for_bearer_auth() {
        let session = Session {
            user_id: 1,
            username: "u".into(),
            user_image: None,
            access_token: "secret".into(),
            status: true,
        };
        assert_eq!(ApiClient::for_session(Some(&session)).token.as_deref(), Some("secret"));
        assert_eq!(ApiClient::for_session(None).token, None);
    }

    #[test]
    fn upload_answer_may_be_plain_or_quoted() {
        assert_eq!(stored_file_name("avatar-91.png").unwrap(), "avatar-91.png");
        assert_eq!(stored_file_name("\"avatar-91.png\"\n").unwrap(), "avatar-91.png");
        assert!(stored_file_name("  ").is_err());
    }
}
