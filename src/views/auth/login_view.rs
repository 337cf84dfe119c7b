use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::FormField;
use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::{sign_in, ApiClient, SessionService};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let signed_in = session.signed_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let signed_in = signed_in.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let sessions = SessionService::browser();
                match sign_in(&ApiClient::new(), &sessions, &username, &password).await {
                    Ok(done) => {
                        signed_in.emit(done.session);
                        if let Some(navigator) = navigator {
                            navigator.push(&done.next);
                        }
                    }
                    Err(e) if e.is_unauthorized() => {
                        error.set(Some("Invalid username or password".to_string()));
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h1>{"Login"}</h1>
                <FormField
                    id="username"
                    label="Username"
                    value={(*username).clone()}
                    on_change={{ let username = username.clone(); Callback::from(move |v| username.set(v)) }}
                />
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    value={(*password).clone()}
                    on_change={{ let password = password.clone(); Callback::from(move |v| password.set(v)) }}
                />
                if let Some(message) = &*error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Login" } }
                </button>
                <p class="auth-switch">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
