use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::FormField;
use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::auth_service::validate_password_reset;
use crate::services::ApiClient;
use crate::utils::RESET_REDIRECT_DELAY_MS;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordViewProps {
    pub user_id: i64,
}

#[derive(Clone, PartialEq)]
enum Notice {
    Error(String),
    Success(String),
}

#[function_component(ResetPasswordView)]
pub fn reset_password_view(props: &ResetPasswordViewProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let notice = use_state(|| None::<Notice>);
    let redirect = use_mut_ref(|| None::<Timeout>);

    let on_submit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let notice = notice.clone();
        let api = ApiClient::for_session(session.session());
        let user_id = props.user_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = validate_password_reset(&password, &confirm) {
                notice.set(Some(Notice::Error(e.user_message())));
                return;
            }

            let password = (*password).clone();
            let notice = notice.clone();
            let api = api.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.reset_password(user_id, &password).await {
                    Ok(()) => {
                        notice.set(Some(Notice::Success("Password reset successfully!".to_string())));
                        // Dropped with the view if it unmounts first
                        *redirect.borrow_mut() = Some(Timeout::new(RESET_REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        }));
                    }
                    Err(e) => {
                        log::error!("❌ Password reset failed: {}", e);
                        notice.set(Some(Notice::Error("Password reset failed. Please try again.".to_string())));
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h1>{"Reset Password"}</h1>
                <p class="muted">{"Enter your new password below"}</p>
                <FormField
                    id="new-password"
                    label="New Password"
                    input_type="password"
                    value={(*password).clone()}
                    on_change={{ let password = password.clone(); Callback::from(move |v| password.set(v)) }}
                />
                <FormField
                    id="confirm-password"
                    label="Confirm Password"
                    input_type="password"
                    value={(*confirm).clone()}
                    on_change={{ let confirm = confirm.clone(); Callback::from(move |v| confirm.set(v)) }}
                />
                <button type="submit" class="btn btn-primary">{"Reset Password"}</button>
                {
                    match &*notice {
                        Some(Notice::Error(message)) => html! { <p class="form-error">{message}</p> },
                        Some(Notice::Success(message)) => html! { <p class="form-success">{message}</p> },
                        None => html! {},
                    }
                }
                <Link<Route> to={Route::Login}>{"Back to Login"}</Link<Route>>
            </form>
        </div>
    }
}
