use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{empty_page_message, EmptyState, ErrorScreen, LoadingScreen, PagerControls};
use crate::config::CONFIG;
use crate::hooks::{use_airport_lookup, use_paged_list, use_remote, use_session, RemoteData, UseAirportLookupHandle};
use crate::models::{Flight, ResourceKind};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct FlightSearchViewProps {
    /// Place that led here; its name seeds "Going To"
    pub place_id: i64,
}

/// (from airport, to airport, search number)
type SearchKey = Option<(i64, i64, u32)>;

#[function_component(FlightSearchView)]
pub fn flight_search_view(props: &FlightSearchViewProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let searches = use_state(|| 0u32);
    let search = use_state(|| SearchKey::None);

    let place = use_remote(props.place_id, |id| async move { ApiClient::new().place_details(id).await });
    let from = use_airport_lookup(None);
    let to = use_airport_lookup(place.loaded().map(|p| p.place.clone()));

    let paging = &CONFIG.paging;
    let results = use_paged_list(
        *search,
        paging.flights_mode,
        paging.flights_per_page,
        |key, page| async move {
            match key {
                Some((from, to, _)) => ApiClient::new().flights(from, to, page).await,
                None => Ok(Vec::new()),
            }
        },
    );

    let on_search = {
        let searches = searches.clone();
        let search = search.clone();
        let pair = from.selected.zip(to.selected);
        Callback::from(move |_: MouseEvent| {
            if let Some((from, to)) = pair {
                let n = *searches + 1;
                searches.set(n);
                search.set(Some((from, to, n)));
            }
        })
    };

    let on_buy = {
        let user_id = session.state.user_id();
        Callback::from(move |flight_id: i64| {
            let Some(navigator) = &navigator else { return };
            match user_id {
                Some(user_id) => navigator.push(&Route::payment(ResourceKind::Flights, flight_id, user_id)),
                None => navigator.push(&Route::Login),
            }
        })
    };

    let results_body = match &*results.data {
        RemoteData::Loading => html! { <LoadingScreen /> },
        RemoteData::Failed(error) => html! {
            <ErrorScreen error={error.clone()} back={Route::PlaceDetails { id: props.place_id }} />
        },
        RemoteData::Loaded(_) if results.visible.is_empty() => html! {
            <>
                <EmptyState message={empty_page_message(results.pager, "No flights found.")} />
                <PagerControls pager={results.pager} on_next={results.next.clone()} on_previous={results.previous.clone()} />
            </>
        },
        RemoteData::Loaded(_) => html! {
            <>
                { for results.visible.iter().map(|flight| flight_card(flight, on_buy.clone())) }
                <PagerControls pager={results.pager} on_next={results.next.clone()} on_previous={results.previous.clone()} />
            </>
        },
    };

    html! {
        <div class="list-page flights">
            <h1>{"Flights"}</h1>
            <section class="flight-search">
                { airport_picker("from", "Going From...", &from) }
                { airport_picker("to", "Going To...", &to) }
            </section>
            <button
                class="btn btn-primary"
                disabled={from.selected.is_none() || to.selected.is_none()}
                onclick={on_search}
            >
                {"Search Flights"}
            </button>
            if let Some(message) = &to.error {
                <p class="form-error">{message}</p>
            }
            <section class="flight-results">
                <h2>{"Flight Results"}</h2>
                {results_body}
            </section>
        </div>
    }
}

fn airport_picker(id: &'static str, placeholder: &'static str, lookup: &UseAirportLookupHandle) -> Html {
    let oninput = lookup.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let onchange = lookup.on_select.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<i64>().ok()
    });
    let selected = lookup.selected.map(|id| id.to_string()).unwrap_or_default();

    html! {
        <div class="airport-picker">
            <input id={id} type="text" {placeholder} value={lookup.query.clone()} {oninput} />
            <select {onchange}>
                <option value="" disabled=true selected={lookup.selected.is_none()}>{"Select an airport..."}</option>
                { for lookup.airports.iter().map(|airport| {
                    let value = airport.id.to_string();
                    let is_selected = value == selected;
                    html! {
                        <option key={airport.id} selected={is_selected} {value}>{&airport.name}</option>
                    }
                }) }
            </select>
        </div>
    }
}

fn flight_card(flight: &Flight, on_buy: Callback<i64>) -> Html {
    let flight_id = flight.flight_id;
    html! {
        <article class="flight-card" key={flight_id}>
            <div class="flight-main">
                <h3>{&flight.plane_company_name}</h3>
                <p><strong>{"Departure: "}</strong>{flight.departure_label()}</p>
                <p><strong>{"Arrival: "}</strong>{flight.arrival_label()}</p>
                <p><strong>{"Duration: "}</strong>{flight.duration_label()}</p>
                <p><strong>{"Price: "}</strong>{format_price(flight.price)}</p>
                <button class="btn btn-primary" onclick={on_buy.reform(move |_: MouseEvent| flight_id)}>
                    {"Buy Now"}
                </button>
            </div>
            <div class="flight-airports">
                <div>
                    <p class="label">{"Departure Airport"}</p>
                    <p>{&flight.departure_airport}</p>
                    <p>{&flight.departure_airport_code}</p>
                </div>
                <div>
                    <p class="label">{"Destination Airport"}</p>
                    <p>{&flight.destination_airport}</p>
                    <p>{&flight.destination_airport_code}</p>
                </div>
            </div>
        </article>
    }
}
