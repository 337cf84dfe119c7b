// ============================================================================
// SESSION STORE - plain state, held by the session context
// ============================================================================

use crate::models::Session;

/// Either nobody is signed in, or exactly one user is.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session().map(|s| s.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_user() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.user_id(), None);
    }

    #[test]
    fn authenticated_exposes_session() {
        let state = SessionState::Authenticated(Session {
            user_id: 3,
            username: "omar".into(),
            user_image: None,
            access_token: "tok".into(),
            status: false,
        });
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some(3));
        assert_eq!(state.session().map(|s| s.username.as_str()), Some("omar"));
    }
}
