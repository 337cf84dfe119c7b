use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, Gallery, LoadingScreen};
use crate::config::CONFIG;
use crate::hooks::{use_remote, use_session, RemoteData};
use crate::models::ResourceKind;
use crate::routes::Route;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct PackageViewProps {
    pub id: i64,
}

#[function_component(PackageView)]
pub fn package_view(props: &PackageViewProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let details = use_remote(props.id, |id| async move { ApiClient::new().package_details(id).await });

    let package = match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} /> },
        RemoteData::Loaded(package) => package.clone(),
    };

    let on_pay = {
        let id = props.id;
        let user_id = session.state.user_id();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else { return };
            match user_id {
                Some(user_id) => navigator.push(&Route::payment(ResourceKind::Packages, id, user_id)),
                None => navigator.push(&Route::Login),
            }
        })
    };

    let gallery = package.package_details.clone();
    let images = vec![gallery.image_one, gallery.image_two, gallery.image_three];

    html! {
        <div class="detail-page">
            <section class="detail-hero">
                <img src={CONFIG.image_url(&package.main_image)} alt={package.package_name.clone()} />
                <h1>{&package.package_name}</h1>
            </section>
            <p class="detail-description">{&package.package_details.description}</p>
            <Gallery {images} alt={package.package_name.clone()} />
            <div class="package-facts">
                <p><strong>{"Price: "}</strong>{format!("{} per person", format_price(package.price))}</p>
                <p><strong>{"Rate: "}</strong>{format!("{:.1} / 5", package.rate)}</p>
            </div>
            <div class="package-lists">
                <section>
                    <h2>{"Benefits"}</h2>
                    <ul>{ for package.benefits.iter().map(|b| html! { <li>{&b.benefit}</li> }) }</ul>
                </section>
                <section>
                    <h2>{"Roadmap"}</h2>
                    <ol>{ for package.roadmaps.iter().map(|r| html! { <li>{&r.roadmap}</li> }) }</ol>
                </section>
            </div>
            <button class="btn btn-primary" onclick={on_pay}>{"Pay Now"}</button>
        </div>
    }
}
