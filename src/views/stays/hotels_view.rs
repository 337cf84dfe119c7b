use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{empty_page_message, EmptyState, ErrorScreen, LoadingScreen, PagerControls};
use crate::config::CONFIG;
use crate::hooks::{use_paged_list, RemoteData};
use crate::routes::Route;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct HotelsViewProps {
    pub place_id: i64,
}

#[function_component(HotelsView)]
pub fn hotels_view(props: &HotelsViewProps) -> Html {
    let paging = &CONFIG.paging;
    let list = use_paged_list(props.place_id, paging.hotels_mode, paging.hotels_per_page, |place_id, page| async move {
        ApiClient::new().hotels_for_place(place_id, page).await
    });

    let body = match &*list.data {
        RemoteData::Loading => html! { <LoadingScreen /> },
        RemoteData::Failed(error) => html! {
            <ErrorScreen error={error.clone()} back={Route::PlaceDetails { id: props.place_id }} />
        },
        RemoteData::Loaded(_) if list.visible.is_empty() => html! {
            <>
                <EmptyState message={empty_page_message(list.pager, "No hotels found for this place.")} />
                <PagerControls pager={list.pager} on_next={list.next.clone()} on_previous={list.previous.clone()} />
            </>
        },
        RemoteData::Loaded(_) => html! {
            <>
                <div class="card-grid">
                    { for list.visible.iter().map(|hotel| html! {
                        <article class="card" key={hotel.id}>
                            <img src={CONFIG.image_url(&hotel.main_image)} alt={hotel.hotel_name.clone()} />
                            <h3>{&hotel.hotel_name}</h3>
                            <p>{&hotel.address}</p>
                            <p class="rate">{format!("★ {:.1}", hotel.rate)}</p>
                            <Link<Route> to={Route::RoomDetails { id: hotel.id }} classes={classes!("btn")}>
                                {"View Rooms"}
                            </Link<Route>>
                        </article>
                    }) }
                </div>
                <PagerControls pager={list.pager} on_next={list.next.clone()} on_previous={list.previous.clone()} />
            </>
        },
    };

    html! {
        <div class="list-page">
            <h1>{"Hotels"}</h1>
            {body}
        </div>
    }
}
