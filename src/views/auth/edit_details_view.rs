use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ErrorScreen, FilePicker, FormField, LoadingScreen};
use crate::error::AppError;
use crate::hooks::{use_remote, use_session, RemoteData};
use crate::models::{UserDetails, UserDetailsUpdate};
use crate::routes::Route;
use crate::services::{ApiClient, SessionService};
use crate::utils::dialog;

#[derive(Properties, PartialEq)]
pub struct EditDetailsViewProps {
    pub user_id: i64,
}

async fn save(
    api: ApiClient,
    user_id: i64,
    mut update: UserDetailsUpdate,
    avatar: Option<web_sys::File>,
) -> Result<UserDetailsUpdate, AppError> {
    if let Some(file) = avatar {
        update.image = Some(api.upload_image(&file).await?);
    }
    api.update_user_details(user_id, &update).await?;
    Ok(update)
}

#[function_component(EditDetailsView)]
pub fn edit_details_view(props: &EditDetailsViewProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let api = ApiClient::for_session(session.session());
    let form = use_state(UserDetailsUpdate::default);
    let username = use_state(String::new);
    let avatar = use_state(|| None::<web_sys::File>);

    let details = {
        let api = api.clone();
        use_remote(props.user_id, move |user_id| async move { api.user_details(user_id).await })
    };

    // Prefill once the current details arrive
    {
        let form = form.clone();
        let username = username.clone();
        let loaded: Option<UserDetails> = details.loaded().cloned();
        use_effect_with(loaded, move |loaded| {
            if let Some(user) = loaded {
                form.set(UserDetailsUpdate::from(user));
                username.set(user.username.clone());
            }
            || ()
        });
    }

    match &*details {
        RemoteData::Loading => return html! { <LoadingScreen /> },
        RemoteData::Failed(error) => return html! { <ErrorScreen error={error.clone()} back={Route::Profile} /> },
        RemoteData::Loaded(_) => {}
    }

    let field = {
        let form = form.clone();
        move |apply: fn(&mut UserDetailsUpdate, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            })
        }
    };

    let on_pick = {
        let avatar = avatar.clone();
        Callback::from(move |file: Option<web_sys::File>| avatar.set(file))
    };

    let on_submit = {
        let form = form.clone();
        let avatar = avatar.clone();
        let username = username.clone();
        let reload = session.reload.clone();
        let user_id = props.user_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let update = (*form).clone();
            let file = (*avatar).clone();
            let username = (*username).clone();
            let api = api.clone();
            let reload = reload.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match save(api, user_id, update, file).await {
                    Ok(saved) => {
                        if let Err(e) = SessionService::browser().update_profile(&username, saved.image) {
                            log::warn!("⚠️ Stored session not refreshed: {}", e);
                        }
                        reload.emit(());
                        dialog::alert("User details updated successfully!");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Profile);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Updating details failed: {}", e);
                        dialog::alert("Failed to update user details. Please try again later.");
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card wide" onsubmit={on_submit}>
                <h1>{"Edit Details"}</h1>
                <FormField id="full-name" label="Full Name" value={form.full_name.clone()} on_change={field(|u, v| u.full_name = v)} />
                <FormField id="country" label="Country" value={form.country.clone()} on_change={field(|u, v| u.country = v)} />
                <FormField id="address" label="Address" value={form.address.clone()} on_change={field(|u, v| u.address = v)} />
                <FormField id="dob" label="Date of Birth" input_type="date" value={form.date_of_birth.clone()} on_change={field(|u, v| u.date_of_birth = v)} />
                <FormField id="phone" label="Phone Number" input_type="tel" value={form.phone_number.clone()} on_change={field(|u, v| u.phone_number = v)} />
                <FilePicker id="image" label="New Image" {on_pick} />
                <button type="submit" class="btn btn-primary">{"Save"}</button>
                <Link<Route> to={Route::Profile}>{"Cancel"}</Link<Route>>
            </form>
        </div>
    }
}
