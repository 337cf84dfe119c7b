// ============================================================================
// APP - root component
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::SiteHeader;
use crate::hooks::SessionProvider;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <SiteHeader />
                <main class="page">
                    <Switch<Route> render={switch} />
                </main>
                <footer class="site-footer">
                    <p>{"© Wanderlust travel. All rights reserved."}</p>
                </footer>
            </SessionProvider>
        </BrowserRouter>
    }
}
