// ============================================================================
// SESSION SERVICE - persisted session (localStorage)
// ============================================================================
// Keys:
//   "user"        -> JSON of `Session`
//   "accessToken" -> raw token string
// ============================================================================

use crate::error::AppError;
use crate::models::{LoginResponse, Session};
use crate::stores::SessionState;
use crate::utils::{BrowserStore, KeyValueStore, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_USER};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionService<S: KeyValueStore = BrowserStore> {
    store: S,
}

impl SessionService<BrowserStore> {
    /// Session persisted in `window.localStorage`
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the persisted session. Missing or unreadable data means anonymous;
    /// unreadable data is also wiped so it cannot linger.
    pub fn load(&self) -> SessionState {
        let Some(raw) = self.store.get(STORAGE_KEY_USER) else {
            return SessionState::Anonymous;
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                log::info!("👤 Session restored for {}", session.username);
                SessionState::Authenticated(session)
            }
            Err(e) => {
                log::warn!("⚠️ Discarding unreadable session: {}", e);
                self.clear();
                SessionState::Anonymous
            }
        }
    }

    /// Persists a fresh login, replacing any previous session
    pub fn establish(&self, response: LoginResponse) -> Result<Session, AppError> {
        let session = Session::from(response);
        let json = serde_json::to_string(&session)?;

        let stored = self
            .store
            .set(STORAGE_KEY_USER, &json)
            .and_then(|_| self.store.set(STORAGE_KEY_ACCESS_TOKEN, &session.access_token));
        if let Err(e) = stored {
            log::error!("❌ Could not store session: {}", e);
            self.clear();
            return Err(e);
        }

        log::info!("💾 Session stored for {} (id {})", session.username, session.user_id);
        Ok(session)
    }

    /// Keeps the stored session in sync after a profile edit
    pub fn update_profile(&self, username: &str, user_image: Option<String>) -> Result<SessionState, AppError> {
        match self.load() {
            SessionState::Authenticated(mut session) => {
                session.username = username.to_string();
                if user_image.is_some() {
                    session.user_image = user_image;
                }
                self.store.set(STORAGE_KEY_USER, &serde_json::to_string(&session)?)?;
                Ok(SessionState::Authenticated(session))
            }
            SessionState::Anonymous => Ok(SessionState::Anonymous),
        }
    }

    pub fn clear(&self) {
        self.store.remove(STORAGE_KEY_USER);
        self.store.remove(STORAGE_KEY_ACCESS_TOKEN);
        log::info!("🚪 Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EssentialUser;
    use crate::utils::storage::testing::{BlockedStore, MemoryStore};

    fn login(id: i64, name: &str, token: &str) -> LoginResponse {
        LoginResponse {
            access_token: token.into(),
            essential_user_dto: EssentialUser {
                id,
                username: name.into(),
                image: Some(format!("{}.png", name)),
                verification_status: true,
            },
        }
    }

    #[test]
    fn establish_persists_exactly_the_session_fields() {
        let store = MemoryStore::new();
        let service = SessionService::new(store.clone());

        let session = service.establish(login(42, "nadia", "tok-1")).unwrap();

        assert_eq!(store.keys(), vec!["accessToken", "user"]);
        assert_eq!(store.get("accessToken").as_deref(), Some("tok-1"));
        let stored: serde_json::Value = serde_json::from_str(&store.get("user").unwrap()).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "userId": 42,
                "username": "nadia",
                "userImage": "nadia.png",
                "accessToken": "tok-1",
                "status": true
            })
        );
        assert_eq!(service.load(), SessionState::Authenticated(session));
    }

    #[test]
    fn second_login_replaces_the_first() {
        let service = SessionService::new(MemoryStore::new());
        service.establish(login(1, "first", "a")).unwrap();
        service.establish(login(2, "second", "b")).unwrap();

        assert_eq!(service.load().user_id(), Some(2));
    }

    #[test]
    fn clear_removes_every_key() {
        let store = MemoryStore::new();
        let service = SessionService::new(store.clone());
        service.establish(login(1, "x", "t")).unwrap();

        service.clear();

        assert!(store.keys().is_empty());
        assert_eq!(service.load(), SessionState::Anonymous);
    }

    #[test]
    fn corrupt_user_entry_reads_as_anonymous_and_is_wiped() {
        let store = MemoryStore::new();
        store.set("user", "{not json").unwrap();
        store.set("accessToken", "stale").unwrap();

        let service = SessionService::new(store.clone());

        assert_eq!(service.load(), SessionState::Anonymous);
        assert!(store.keys().is_empty());
    }

    #[test]
    fn profile_update_rewrites_name_and_keeps_image_when_unchanged() {
        let service = SessionService::new(MemoryStore::new());
        service.establish(login(9, "old", "t")).unwrap();

        let state = service.update_profile("new", None).unwrap();

        let session = state.session().unwrap();
        assert_eq!(session.username, "new");
        assert_eq!(session.user_image.as_deref(), Some("old.png"));
        assert_eq!(service.load(), state);
    }

    #[test]
    fn failed_token_write_leaves_nothing_behind() {
        let store = MemoryStore::failing_on("accessToken");
        let service = SessionService::new(store.clone());

        let err = service.establish(login(3, "half", "t")).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(store.keys().is_empty());
        assert_eq!(service.load(), SessionState::Anonymous);
    }

    #[test]
    fn blocked_storage_reads_anonymous_and_refuses_login() {
        let service = SessionService::new(BlockedStore);

        assert_eq!(service.load(), SessionState::Anonymous);
        assert!(matches!(service.establish(login(1, "x", "t")), Err(AppError::Storage(_))));
        service.clear();
    }
}
