use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, Gallery, LoadingScreen};
use crate::config::CONFIG;
use crate::hooks::{use_remote, RemoteData};
use crate::routes::Route;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct CountryViewProps {
    pub id: i64,
}

/// Details drive loading and error; places and packages only hide their
/// section when they fail.
#[function_component(CountryView)]
pub fn country_view(props: &CountryViewProps) -> Html {
    let details = use_remote(props.id, |id| async move { ApiClient::new().country_details(id).await });
    let places = use_remote(props.id, |id| async move { ApiClient::new().country_places(id).await });
    let packages = use_remote(props.id, |id| async move { ApiClient::new().country_packages(id).await });

    let country = match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} /> },
        RemoteData::Loaded(country) => country.clone(),
    };

    let gallery: Vec<String> = country.gallery().iter().map(|s| s.to_string()).collect();

    html! {
        <div class="detail-page">
            <section class="detail-hero">
                <img src={CONFIG.image_url(&country.country_main_image)} alt={country.country.clone()} />
                <h1>{&country.country}</h1>
            </section>
            <p class="detail-description">{&country.description}</p>
            <Gallery images={gallery} alt={country.country.clone()} />

            if let Some(places) = places.loaded().filter(|p| !p.is_empty()) {
                <section class="card-grid">
                    <h2>{"Places"}</h2>
                    { for places.iter().map(|place| html! {
                        <article class="card" key={place.id}>
                            <img src={CONFIG.image_url(&place.main_image)} alt={place.place.clone()} />
                            <h3>{&place.place}</h3>
                            <p>{&place.description}</p>
                            <Link<Route> to={Route::PlaceDetails { id: place.id }} classes={classes!("btn")}>
                                {"View Place"}
                            </Link<Route>>
                        </article>
                    }) }
                </section>
            }

            if let Some(packages) = packages.loaded().filter(|p| !p.is_empty()) {
                <section class="card-grid">
                    <h2>{"Packages"}</h2>
                    { for packages.iter().map(|package| html! {
                        <article class="card" key={package.id}>
                            <img src={CONFIG.image_url(&package.main_image)} alt={package.package_name.clone()} />
                            <h3>{&package.package_name}</h3>
                            <p>{&package.description}</p>
                            <Link<Route> to={Route::PackageDetails { id: package.id }} classes={classes!("btn")}>
                                {"View Package"}
                            </Link<Route>>
                        </article>
                    }) }
                </section>
            }
        </div>
    }
}
