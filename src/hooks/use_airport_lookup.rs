// ============================================================================
// USE AIRPORT LOOKUP HOOK - place name -> airports, debounced
// ============================================================================
// Typing updates the field at once; the lookup waits for a quiet period.
// Each dispatched lookup takes a ticket, only the newest may write results.
// ============================================================================

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Airport;
use crate::services::ApiClient;
use crate::utils::{Debouncer, FetchGuard};

#[derive(Clone, PartialEq)]
pub struct UseAirportLookupHandle {
    pub query: String,
    pub airports: Vec<Airport>,
    pub selected: Option<i64>,
    pub error: Option<String>,
    pub on_input: Callback<String>,
    pub on_select: Callback<Option<i64>>,
}

/// `seed` pre-fills the field and is looked up without delay; its first
/// airport becomes the selection.
#[hook]
pub fn use_airport_lookup(seed: Option<String>) -> UseAirportLookupHandle {
    let query = use_state(String::new);
    let airports = use_state(Vec::<Airport>::new);
    let selected = use_state(|| None::<i64>);
    let error = use_state(|| None::<String>);
    let debouncer = use_memo((), |_| Debouncer::browser(CONFIG.lookup_debounce_ms));
    let guard = use_memo((), |_| FetchGuard::new());

    // (place name, preselect first airport)
    let lookup = {
        let airports = airports.clone();
        let selected = selected.clone();
        let error = error.clone();
        let guard = guard.clone();
        Callback::from(move |(name, preselect): (String, bool)| {
            let ticket = guard.issue();
            let airports = airports.clone();
            let selected = selected.clone();
            let error = error.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().airports_for_place_name(&name).await;
                ticket.apply(|| match result {
                    Ok(found) => {
                        log::info!("✈️ {} airport(s) for '{}'", found.len(), name);
                        if preselect {
                            selected.set(found.first().map(|a| a.id));
                        }
                        error.set(None);
                        airports.set(found);
                    }
                    Err(e) => {
                        log::warn!("⚠️ Airport lookup for '{}' failed: {}", name, e);
                        if preselect {
                            error.set(Some("Error fetching airports. Please try again later.".to_string()));
                        }
                        airports.set(Vec::new());
                    }
                });
            });
        })
    };

    {
        let query = query.clone();
        let lookup = lookup.clone();
        use_effect_with(seed, move |seed| {
            if let Some(name) = seed.as_ref().filter(|n| !n.trim().is_empty()) {
                query.set(name.clone());
                lookup.emit((name.clone(), true));
            }
            || ()
        });
    }

    {
        let debouncer = debouncer.clone();
        let guard = guard.clone();
        use_effect_with((), move |_| {
            move || {
                debouncer.cancel();
                guard.invalidate();
            }
        });
    }

    let on_input = {
        let query = query.clone();
        let airports = airports.clone();
        let selected = selected.clone();
        Callback::from(move |value: String| {
            query.set(value.clone());
            selected.set(None);

            if value.trim().is_empty() {
                debouncer.cancel();
                guard.invalidate();
                airports.set(Vec::new());
                return;
            }

            let lookup = lookup.clone();
            debouncer.call(move || lookup.emit((value, false)));
        })
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: Option<i64>| selected.set(id))
    };

    UseAirportLookupHandle {
        query: (*query).clone(),
        airports: (*airports).clone(),
        selected: *selected,
        error: (*error).clone(),
        on_input,
        on_select,
    }
}
