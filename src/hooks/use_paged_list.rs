// ============================================================================
// USE PAGED LIST HOOK - remote list + pager
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::error::AppError;
use crate::hooks::use_remote::{use_remote, RemoteData};
use crate::utils::{PageRequest, Pager, PagingMode};

pub struct UsePagedListHandle<T: 'static> {
    pub data: UseStateHandle<RemoteData<Vec<T>>>,
    pub pager: Pager,
    /// Items of the current page
    pub visible: Vec<T>,
    pub next: Callback<()>,
    pub previous: Callback<()>,
}

/// `key` identifies the collection (place id, airport pair); changing it
/// starts over at page 1. `fetch` receives the key and the backend query for
/// the configured paging mode.
#[hook]
pub fn use_paged_list<T, K, F, Fut>(
    key: K,
    mode: PagingMode,
    page_size: usize,
    fetch: F,
) -> UsePagedListHandle<T>
where
    T: Clone + 'static,
    K: PartialEq + Clone + 'static,
    F: FnOnce(K, PageRequest) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
{
    let pager = use_state_eq(|| Pager::new(mode, page_size));

    // Client-sliced lists are fetched once per key; server pages once per page
    let fetched_page = if mode.refetch_on_page_change() {
        pager.current_page()
    } else {
        1
    };
    let data = use_remote((key.clone(), fetched_page), move |(key, page)| {
        fetch(key, mode.request(page, page_size))
    });

    {
        let pager = pager.clone();
        use_effect_with(key, move |_| {
            pager.set(Pager::new(mode, page_size));
            || ()
        });
    }

    {
        let pager = pager.clone();
        let loaded = data.loaded().map(Vec::len);
        use_effect_with(loaded, move |loaded| {
            if let Some(count) = *loaded {
                pager.set((*pager).with_loaded(count));
            }
            || ()
        });
    }

    let visible = data
        .loaded()
        .map(|items| pager.slice(items).to_vec())
        .unwrap_or_default();

    let next = {
        let pager = pager.clone();
        Callback::from(move |_| pager.set((*pager).next()))
    };
    let previous = {
        let pager = pager.clone();
        Callback::from(move |_| pager.set((*pager).previous()))
    };

    UsePagedListHandle {
        data,
        pager: *pager,
        visible,
        next,
        previous,
    }
}
