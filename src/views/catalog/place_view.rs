use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, Gallery, LoadingScreen};
use crate::config::CONFIG;
use crate::hooks::{use_remote, RemoteData};
use crate::routes::Route;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct PlaceViewProps {
    pub id: i64,
}

#[function_component(PlaceView)]
pub fn place_view(props: &PlaceViewProps) -> Html {
    let details = use_remote(props.id, |id| async move { ApiClient::new().place_details(id).await });

    let place = match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} /> },
        RemoteData::Loaded(place) => place.clone(),
    };
    let gallery: Vec<String> = place.gallery().iter().map(|s| s.to_string()).collect();

    html! {
        <div class="detail-page">
            <section class="detail-hero">
                <img src={CONFIG.image_url(&place.main_image)} alt={place.place.clone()} />
                <h1>{&place.place}</h1>
            </section>
            <p class="detail-description">{&place.description}</p>
            <Gallery images={gallery} alt={place.place.clone()} />
            <div class="detail-actions">
                <Link<Route> to={Route::Flights { id: props.id }} classes={classes!("btn", "btn-primary")}>
                    {"Book a Visa"}
                </Link<Route>>
                <Link<Route> to={Route::Hotels { id: props.id }} classes={classes!("btn")}>
                    {"Book a Room"}
                </Link<Route>>
            </div>
        </div>
    }
}
