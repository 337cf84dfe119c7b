// ============================================================================
// AUTH SERVICE - login, account deletion and account form checks
// ============================================================================

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{LoginResponse, RegisterUser, Session};
use crate::routes::Route;
use crate::services::session_service::SessionService;
use crate::utils::KeyValueStore;

/// Backend calls that change who is signed in
#[async_trait(?Send)]
pub trait AccountApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError>;
    async fn delete_user(&self, user_id: i64) -> Result<(), AppError>;
}

/// Result of a successful login: the stored session and where to go next
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub session: Session,
    pub next: Route,
}

pub async fn sign_in<A, S>(
    api: &A,
    sessions: &SessionService<S>,
    username: &str,
    password: &str,
) -> Result<SignedIn, AppError>
where
    A: AccountApi + ?Sized,
    S: KeyValueStore,
{
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }

    let response = api.login(username.trim(), password).await.map_err(|e| {
        log::error!("❌ Login failed for {}: {}", username, e);
        e
    })?;

    let session = sessions.establish(response)?;
    log::info!("✅ Logged in as {}", session.username);
    Ok(SignedIn {
        session,
        next: Route::Profile,
    })
}

/// Deletes the account; the local session is only dropped once the backend
/// has confirmed.
pub async fn delete_account<A, S>(
    api: &A,
    sessions: &SessionService<S>,
    user_id: i64,
) -> Result<(), AppError>
where
    A: AccountApi + ?Sized,
    S: KeyValueStore,
{
    api.delete_user(user_id).await?;
    sessions.clear();
    log::info!("🗑️ Account {} deleted", user_id);
    Ok(())
}

pub fn validate_password_reset(password: &str, confirm: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::validation("Please enter a new password"));
    }
    if password != confirm {
        return Err(AppError::validation("Passwords do not match"));
    }
    Ok(())
}

pub fn validate_registration(user: &RegisterUser) -> Result<(), AppError> {
    if user.username.trim().is_empty() {
        return Err(AppError::validation("Username is required"));
    }
    if !user.email.contains('@') {
        return Err(AppError::validation("Please enter a valid email address"));
    }
    if user.password.is_empty() {
        return Err(AppError::validation("Password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EssentialUser;
    use crate::stores::SessionState;
    use crate::utils::storage::testing::MemoryStore;
    use futures::executor::block_on;
    use rstest::rstest;
    use std::cell::Cell;

    struct FakeAccounts {
        login: Result<LoginResponse, AppError>,
        delete: Result<(), AppError>,
        delete_calls: Cell<u32>,
    }

    impl FakeAccounts {
        fn accepting() -> Self {
            Self {
                login: Ok(LoginResponse {
                    access_token: "tok-9".into(),
                    essential_user_dto: EssentialUser {
                        id: 9,
                        username: "rania".into(),
                        image: None,
                        verification_status: false,
                    },
                }),
                delete: Ok(()),
                delete_calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl AccountApi for FakeAccounts {
        async fn login(&self, _: &str, _: &str) -> Result<LoginResponse, AppError> {
            self.login.clone()
        }

        async fn delete_user(&self, _: i64) -> Result<(), AppError> {
            self.delete_calls.set(self.delete_calls.get() + 1);
            self.delete.clone()
        }
    }

    #[test]
    fn login_stores_session_and_heads_to_profile() {
        let store = MemoryStore::new();
        let sessions = SessionService::new(store.clone());

        let signed_in = block_on(sign_in(&FakeAccounts::accepting(), &sessions, "rania", "pw")).unwrap();

        assert_eq!(signed_in.next, Route::Profile);
        assert_eq!(signed_in.session.user_id, 9);
        assert_eq!(store.get("accessToken").as_deref(), Some("tok-9"));
        assert_eq!(sessions.load(), SessionState::Authenticated(signed_in.session));
    }

    #[test]
    fn rejected_login_leaves_storage_untouched() {
        let store = MemoryStore::new();
        let sessions = SessionService::new(store.clone());
        let api = FakeAccounts {
            login: Err(AppError::status(401, "Bad credentials")),
            ..FakeAccounts::accepting()
        };

        let err = block_on(sign_in(&api, &sessions, "rania", "wrong")).unwrap_err();

        assert!(err.is_unauthorized());
        assert!(store.keys().is_empty());
    }

    #[test]
    fn blank_credentials_never_reach_the_backend() {
        let sessions = SessionService::new(MemoryStore::new());
        let err = block_on(sign_in(&FakeAccounts::accepting(), &sessions, "  ", "pw")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn account_deletion_clears_session_only_after_backend_confirms() {
        let store = MemoryStore::new();
        let sessions = SessionService::new(store.clone());
        let api = FakeAccounts::accepting();
        block_on(sign_in(&api, &sessions, "rania", "pw")).unwrap();

        let failing = FakeAccounts {
            delete: Err(AppError::Network("offline".into())),
            ..FakeAccounts::accepting()
        };
        assert!(block_on(delete_account(&failing, &sessions, 9)).is_err());
        assert!(sessions.load().is_authenticated());

        block_on(delete_account(&api, &sessions, 9)).unwrap();
        assert_eq!(api.delete_calls.get(), 1);
        assert_eq!(sessions.load(), SessionState::Anonymous);
        assert!(store.keys().is_empty());
    }

    #[rstest]
    #[case("secret", "secret", true)]
    #[case("secret", "Secret", false)]
    #[case("", "", false)]
    fn password_reset_requires_matching_entries(
        #[case] password: &str,
        #[case] confirm: &str,
        #[case] valid: bool,
    ) {
        assert_eq!(validate_password_reset(password, confirm).is_ok(), valid);
    }

    #[test]
    fn registration_needs_username_email_and_password() {
        let mut user = RegisterUser {
            username: "sami".into(),
            email: "sami@example.com".into(),
            password: "pw".into(),
            ..RegisterUser::default()
        };
        assert!(validate_registration(&user).is_ok());

        user.email = "not-an-email".into();
        assert_eq!(
            validate_registration(&user),
            Err(AppError::validation("Please enter a valid email address"))
        );
    }
}
