use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct VerificationViewProps {
    pub email: String,
    pub token: String,
}

/// Landing page of the link sent by email
#[function_component(VerificationView)]
pub fn verification_view(props: &VerificationViewProps) -> Html {
    log::info!("📧 Verification landing for {}", props.email);

    html! {
        <div class="status-screen success">
            <h1>{"Email verified"}</h1>
            <p>{format!("Thanks, {} is now verified.", props.email)}</p>
            <Link<Route> to={Route::Home} classes={classes!("btn")}>{"Go to home"}</Link<Route>>
        </div>
    }
}
