use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, LoadingScreen};
use crate::config::CONFIG;
use crate::hooks::{use_remote, use_session, RemoteData};
use crate::routes::Route;
use crate::services::{delete_account, ApiClient, SessionService};
use crate::utils::dialog;
use crate::utils::format_date;

#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let verified_now = use_state(|| false);

    let current = session.session().cloned();
    let details = use_remote(current.clone(), |current| async move {
        let current = current.ok_or_else(|| crate::error::AppError::status(401, "Not signed in"))?;
        ApiClient::for_session(Some(&current))
            .user_details(current.user_id)
            .await
    });

    let Some(current) = current else {
        return html! {
            <div class="status-screen">
                <p>{"Please log in to see your profile."}</p>
                <Link<Route> to={Route::Login} classes={classes!("btn")}>{"Back to Login"}</Link<Route>>
            </div>
        };
    };

    let user = match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} back={Route::Login} /> },
        RemoteData::Loaded(user) => user.clone(),
    };
    let verified = user.verification_status || *verified_now;

    let on_verify = {
        let current = current.clone();
        let verified_now = verified_now.clone();
        Callback::from(move |_: MouseEvent| {
            let current = current.clone();
            let verified_now = verified_now.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::for_session(Some(&current));
                match api.request_verification(current.user_id, &current.access_token).await {
                    Ok(()) => {
                        verified_now.set(true);
                        dialog::alert("Check your email!");
                    }
                    Err(e) => {
                        log::error!("❌ Verification request failed: {}", e);
                        dialog::alert("Failed to verify email. Please try again later.");
                    }
                }
            });
        })
    };

    let on_delete = {
        let current = current.clone();
        let reload = session.reload.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if !dialog::confirm("Are you sure you want to delete your profile?") {
                return;
            }
            let current = current.clone();
            let reload = reload.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::for_session(Some(&current));
                match delete_account(&api, &SessionService::browser(), current.user_id).await {
                    Ok(()) => {
                        reload.emit(());
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Could not delete profile: {}", e);
                        dialog::alert("Failed to delete profile. Please try again later.");
                    }
                }
            });
        })
    };

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let image = user
        .image
        .clone()
        .unwrap_or_else(|| CONFIG.default_user_image.clone());

    html! {
        <div class="profile-page">
            <div class="profile-card">
                <img class="avatar" src={CONFIG.image_url(&image)} alt={user.username.clone()} />
                <h1>{&user.full_name}</h1>
                <p class="muted">{format!("@{}", user.username)}</p>
                <dl class="profile-details">
                    <dt>{"Email"}</dt><dd>{&user.email}</dd>
                    <dt>{"Country"}</dt><dd>{&user.country}</dd>
                    <dt>{"Phone"}</dt><dd>{&user.phone_number}</dd>
                    <dt>{"Address"}</dt><dd>{&user.address}</dd>
                    <dt>{"Date of Birth"}</dt><dd>{format_date(&user.date_of_birth)}</dd>
                    <dt>{"Email status"}</dt>
                    <dd>{ if verified { "Verified" } else { "Not verified" } }</dd>
                </dl>
                <div class="profile-actions">
                    if !verified {
                        <button class="btn" onclick={on_verify}>{"Verify Email"}</button>
                    }
                    <button class="btn" onclick={go(Route::ResetPassword { user_id: current.user_id })}>
                        {"Reset Password"}
                    </button>
                    <button class="btn" onclick={go(Route::EditUserDetails { user_id: current.user_id })}>
                        {"Edit Details"}
                    </button>
                    <button class="btn btn-danger" onclick={on_delete}>{"Delete Profile"}</button>
                </div>
            </div>
        </div>
    }
}
