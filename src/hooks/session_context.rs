// ============================================================================
// SESSION CONTEXT - share the signed-in user across views
// ============================================================================
// The provider restores the persisted session once on mount. Transitions go
// through `SessionService`, so storage and context never disagree.
// ============================================================================

use yew::prelude::*;

use crate::models::Session;
use crate::services::SessionService;
use crate::stores::SessionState;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub state: SessionState,
    /// Session already persisted by the login flow
    pub signed_in: Callback<Session>,
    /// Clears storage and drops to anonymous
    pub sign_out: Callback<()>,
    /// Re-reads storage (after a profile edit or account deletion)
    pub reload: Callback<()>,
}

impl SessionHandle {
    fn detached() -> Self {
        Self {
            state: SessionState::Anonymous,
            signed_in: Callback::noop(),
            sign_out: Callback::noop(),
            reload: Callback::noop(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state_eq(|| SessionService::browser().load());

    let signed_in = {
        let state = state.clone();
        Callback::from(move |session: Session| {
            log::info!("👤 Signed in as {}", session.username);
            state.set(SessionState::Authenticated(session));
        })
    };

    let sign_out = {
        let state = state.clone();
        Callback::from(move |_| {
            SessionService::browser().clear();
            state.set(SessionState::Anonymous);
        })
    };

    let reload = {
        let state = state.clone();
        Callback::from(move |_| state.set(SessionService::browser().load()))
    };

    let handle = SessionHandle {
        state: (*state).clone(),
        signed_in,
        sign_out,
        reload,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ use_session called outside SessionProvider");
        SessionHandle::detached()
    })
}
