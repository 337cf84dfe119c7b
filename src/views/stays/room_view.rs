use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, Gallery, LoadingScreen};
use crate::hooks::{use_remote, use_session, RemoteData};
use crate::models::{ResourceKind, StayWindow};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct RoomViewProps {
    pub hotel_id: i64,
}

#[function_component(RoomView)]
pub fn room_view(props: &RoomViewProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let start = use_state(String::new);
    let end = use_state(String::new);
    let details = use_remote(props.hotel_id, |id| async move { ApiClient::new().room_details(id).await });

    let room = match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} /> },
        RemoteData::Loaded(room) => room.clone(),
    };

    let stay = StayWindow {
        start: (*start).clone(),
        end: (*end).clone(),
        nightly_price: room.price,
    };

    let on_pay = {
        let hotel_id = props.hotel_id;
        let user_id = session.state.user_id();
        let stay = stay.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else { return };
            match user_id {
                Some(user_id) => navigator.push_with_state(
                    &Route::payment(ResourceKind::Hotels, hotel_id, user_id),
                    stay.clone(),
                ),
                None => navigator.push(&Route::Login),
            }
        })
    };

    let date_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let images = vec![room.image_one, room.image_two, room.image_three, room.image_four];

    html! {
        <div class="detail-page">
            <h1>{&room.hotel_name}</h1>
            <p class="muted">{&room.address}</p>
            <p class="rate">{format!("★ {:.1}", room.rate)}</p>
            <Gallery {images} alt={room.hotel_name.clone()} />
            <p class="detail-description">{&room.description}</p>

            <div class="feature-lists">
                <section>
                    <h2>{"Hotel Features"}</h2>
                    <ul>{ for room.hotel_features.iter().map(|f| html! { <li>{&f.hotel_features}</li> }) }</ul>
                </section>
                <section>
                    <h2>{"Room Features"}</h2>
                    <ul>{ for room.room_features.iter().map(|f| html! { <li>{&f.room_features}</li> }) }</ul>
                </section>
            </div>

            <div class="stay-window">
                <div class="form-group">
                    <label for="stay-start">{"Check-in"}</label>
                    <input id="stay-start" type="datetime-local" value={(*start).clone()} onchange={date_input(start.clone())} />
                </div>
                <div class="form-group">
                    <label for="stay-end">{"Check-out"}</label>
                    <input id="stay-end" type="datetime-local" value={(*end).clone()} onchange={date_input(end.clone())} />
                </div>
                <p>
                    {format!("{} per night, {} night(s): ", format_price(stay.nightly_price), stay.nights())}
                    <strong>{format_price(stay.total())}</strong>
                </p>
            </div>

            <button class="btn btn-primary" onclick={on_pay}>{"Pay Now"}</button>
        </div>
    }
}
