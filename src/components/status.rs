use yew::prelude::*;
use yew_router::prelude::*;

use crate::error::AppError;
use crate::routes::Route;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="status-screen loading">
            <div class="spinner"></div>
            <p>{"Loading..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub error: AppError,
    #[prop_or(Route::Home)]
    pub back: Route,
}

/// Failed detail fetch: message plus a way back
#[function_component(ErrorScreen)]
pub fn error_screen(props: &ErrorScreenProps) -> Html {
    let message = if matches!(props.error, AppError::Status { code: 404, .. }) {
        "We could not find what you were looking for.".to_string()
    } else {
        props.error.user_message()
    };

    html! {
        <div class="status-screen error">
            <h2>{"Something went wrong"}</h2>
            <p>{message}</p>
            <Link<Route> to={props.back.clone()} classes={classes!("btn")}>{"Go back"}</Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! { <p class="empty-state">{props.message.clone()}</p> }
}
