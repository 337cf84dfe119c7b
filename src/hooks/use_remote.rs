// ============================================================================
// USE REMOTE HOOK - one backend read tied to a view and its dependency
// ============================================================================
// Loading -> Loaded | Failed. The read is re-issued when the dependency
// changes; responses that arrive after unmount or after a newer read
// started are dropped.
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::error::AppError;
use crate::utils::FetchGuard;

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteData<T> {
    Loading,
    Loaded(T),
    Failed(AppError),
}

impl<T> RemoteData<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, AppError>> for RemoteData<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err),
        }
    }
}

#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<RemoteData<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(|| RemoteData::Loading);
    let guard = use_memo((), |_| FetchGuard::new());

    {
        let state = state.clone();
        let guard = (*guard).clone();
        use_effect_with(deps, move |deps| {
            state.set(RemoteData::Loading);
            let ticket = guard.issue();
            let request = fetch(deps.clone());

            wasm_bindgen_futures::spawn_local(async move {
                let result = request.await;
                if let Err(e) = &result {
                    log::error!("❌ Fetch failed: {}", e);
                }
                if !ticket.apply(|| state.set(RemoteData::from(result))) {
                    log::debug!("🗑️ Dropping stale response");
                }
            });

            move || guard.invalidate()
        });
    }

    state
}
