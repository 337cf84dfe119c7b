use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes={classes!("brand")}>{"Wanderlust"}</Link<Route>>
            <nav class="site-nav">
                if session.state.is_authenticated() {
                    <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                    <button class="btn-link" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                }
            </nav>
        </header>
    }
}
