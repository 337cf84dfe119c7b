use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{EmptyState, ErrorScreen, LoadingScreen};
use crate::config::CONFIG;
use crate::hooks::{use_remote, RemoteData};
use crate::routes::Route;
use crate::services::ApiClient;

/// Country carousel: one slide visible, tabs pick the slide
#[function_component(HeroView)]
pub fn hero_view() -> Html {
    let navigator = use_navigator();
    let current = use_state(|| 0usize);
    let countries = use_remote((), |_| async move { ApiClient::new().countries().await });

    let countries = match &*countries {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} /> },
        RemoteData::Loaded(list) if list.is_empty() => {
            return html! { <EmptyState message="No destinations yet." /> };
        }
        RemoteData::Loaded(list) => list.clone(),
    };
    let index = (*current).min(countries.len() - 1);
    let selected_id = countries[index].id;

    let on_details = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::CountryDetails { id: selected_id });
        }
    });

    html! {
        <section class="hero">
            <div class="hero-slides">
                { for countries.iter().enumerate().map(|(i, country)| html! {
                    <div class={classes!("hero-slide", (i == index).then_some("active"))}>
                        <img src={CONFIG.image_url(&country.main_image)} alt={country.country.clone()} />
                        <h2>{&country.country}</h2>
                    </div>
                }) }
            </div>
            <button class="btn btn-primary hero-cta" onclick={on_details}>{"View Details"}</button>
            <nav class="hero-tabs">
                <ul>
                    { for countries.iter().enumerate().map(|(i, country)| {
                        let current = current.clone();
                        html! {
                            <li key={country.id}>
                                <button
                                    class={classes!("tab", (i == index).then_some("active"))}
                                    onclick={Callback::from(move |_: MouseEvent| current.set(i))}
                                >
                                    {format!("Tab {}", i + 1)}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </section>
    }
}
