use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FilePicker, FormField};
use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::RegisterUser;
use crate::routes::Route;
use crate::services::auth_service::validate_registration;
use crate::services::ApiClient;

/// Uploads the avatar if one was picked, then registers. A failed upload
/// aborts the registration.
async fn register(mut user: RegisterUser, avatar: Option<web_sys::File>) -> Result<(), AppError> {
    validate_registration(&user)?;
    let api = ApiClient::new();
    user.image = match avatar {
        Some(file) => api.upload_image(&file).await?,
        None => CONFIG.default_user_image.clone(),
    };
    api.register(&user).await
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let navigator = use_navigator();
    let form = use_state(RegisterUser::default);
    let avatar = use_state(|| None::<web_sys::File>);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let field = {
        let form = form.clone();
        move |apply: fn(&mut RegisterUser, String)| {
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
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let user = (*form).clone();
            let file = (*avatar).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match register(user, file).await {
                    Ok(()) => {
                        log::info!("✅ Registration complete");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card wide" onsubmit={on_submit}>
                <h1>{"Register"}</h1>
                <FormField id="email" label="Email" input_type="email" value={form.email.clone()} on_change={field(|u, v| u.email = v)} />
                <FormField id="username" label="Username" value={form.username.clone()} on_change={field(|u, v| u.username = v)} />
                <FormField id="password" label="Password" input_type="password" value={form.password.clone()} on_change={field(|u, v| u.password = v)} />
                <FilePicker id="image" label="Image" {on_pick} />
                <FormField id="full-name" label="Full Name" value={form.full_name.clone()} on_change={field(|u, v| u.full_name = v)} />
                <FormField id="country" label="Country" value={form.country.clone()} on_change={field(|u, v| u.country = v)} />
                <FormField id="phone" label="Phone Number" input_type="tel" value={form.phone_number.clone()} on_change={field(|u, v| u.phone_number = v)} />
                <FormField id="address" label="Address" value={form.address.clone()} on_change={field(|u, v| u.address = v)} />
                <FormField id="dob" label="Date of Birth" input_type="date" value={form.date_of_birth.clone()} on_change={field(|u, v| u.date_of_birth = v)} />
                if let Some(message) = &*error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Registering..." } else { "Register" } }
                </button>
                <p class="auth-switch">
                    {"Already registered? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </form>
        </div>
    }
}
