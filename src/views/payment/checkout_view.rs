// ============================================================================
// CHECKOUT VIEW - card payment for a flight, hotel stay or package
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CardFields, FormField};
use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::models::{PaymentReceipt, PaymentTarget, ResourceKind, StayWindow};
use crate::routes::Route;
use crate::services::{checkout, checkout_error_message, ApiClient, StripeTokenizer};
use crate::utils::{
    format_price, FetchGuard, CARD_CVC_ELEMENT_ID, CARD_EXPIRY_ELEMENT_ID, CARD_NUMBER_ELEMENT_ID,
};

#[derive(Properties, PartialEq)]
pub struct CheckoutViewProps {
    pub kind: ResourceKind,
    pub resource_id: i64,
    pub user_id: i64,
}

#[function_component(CheckoutView)]
pub fn checkout_view(props: &CheckoutViewProps) -> Html {
    let session = use_session();
    let location = use_location();
    let reservation_name = use_state(String::new);
    let provider_ready = use_state(|| false);
    let processing = use_state(|| false);
    let error = use_state(|| None::<String>);
    let receipt = use_state(|| None::<PaymentReceipt>);
    let guard = use_memo((), |_| FetchGuard::new());

    // Mount the hosted card fields; a mount finishing after unmount is ignored
    {
        let provider_ready = provider_ready.clone();
        let error = error.clone();
        let guard = (*guard).clone();
        use_effect_with(props.kind, move |_| {
            let ticket = guard.issue();
            wasm_bindgen_futures::spawn_local(async move {
                let ids = (CARD_NUMBER_ELEMENT_ID, CARD_EXPIRY_ELEMENT_ID, CARD_CVC_ELEMENT_ID);
                let mounted = StripeTokenizer::mount(&CONFIG.stripe_publishable_key, ids).await;
                ticket.apply(|| match mounted {
                    Ok(()) => provider_ready.set(true),
                    Err(e) => {
                        log::error!("❌ Payment provider unavailable: {}", e);
                        error.set(Some(e.user_message()));
                    }
                });
            });
            move || {
                guard.invalidate();
                StripeTokenizer::unmount();
            }
        });
    }

    if let Some(receipt) = &*receipt {
        return html! { <Confirmation receipt={receipt.clone()} /> };
    }

    let Some(current) = session.session().cloned() else {
        return html! {
            <div class="status-screen">
                <p>{"Please log in to complete your booking."}</p>
                <Link<Route> to={Route::Login} classes={classes!("btn")}>{"Login"}</Link<Route>>
            </div>
        };
    };

    let stay = match props.kind {
        ResourceKind::Hotels => location.as_ref().and_then(|l| l.state::<StayWindow>()),
        _ => None,
    };

    let target = PaymentTarget {
        kind: props.kind,
        resource_id: props.resource_id,
        user_id: props.user_id,
    };

    let on_submit = {
        let reservation_name = reservation_name.clone();
        let processing = processing.clone();
        let error = error.clone();
        let receipt = receipt.clone();
        let ready = *provider_ready;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !ready || *processing {
                return;
            }

            let name = (*reservation_name).clone();
            let api = ApiClient::for_session(Some(&current));
            let processing = processing.clone();
            let error = error.clone();
            let receipt = receipt.clone();

            processing.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match checkout(&StripeTokenizer, &api, target, &name).await {
                    Ok(confirmed) => receipt.set(Some(confirmed)),
                    Err(e) => error.set(Some(checkout_error_message(&e))),
                }
                processing.set(false);
            });
        })
    };

    let submit_label = if *processing { "Processing..." } else { "Pay Now" };

    html! {
        <div class="checkout-page">
            <form class="checkout-card" onsubmit={on_submit}>
                <h1>{format!("Pay for your {}", props.kind.label())}</h1>
                if let Some(stay) = stay {
                    <div class="stay-summary">
                        <p>{format!("From {} to {}", stay.start, stay.end)}</p>
                        <p>{format!("{} per night, total {}", format_price(stay.nightly_price), format_price(stay.total()))}</p>
                    </div>
                }
                <FormField
                    id="reservation-name"
                    label="Reservation Name and Surname"
                    placeholder="Enter your Name and Surname"
                    value={(*reservation_name).clone()}
                    on_change={{ let n = reservation_name.clone(); Callback::from(move |v| n.set(v)) }}
                />
                <CardFields />
                if let Some(message) = &*error {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn btn-primary" disabled={!*provider_ready || *processing}>
                    {submit_label}
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmationProps {
    receipt: PaymentReceipt,
}

#[function_component(Confirmation)]
fn confirmation(props: &ConfirmationProps) -> Html {
    let receipt = &props.receipt;
    let backend_note = receipt.details.get("message").and_then(|v| v.as_str()).map(str::to_string);
    html! {
        <div class="status-screen success">
            <h1>{"Payment confirmed"}</h1>
            <p>{format!(
                "Your {} #{} is booked under {}.",
                receipt.target.kind.label(),
                receipt.target.resource_id,
                receipt.reservation_name
            )}</p>
            if let Some(note) = backend_note {
                <p class="muted">{note}</p>
            }
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>{"Back to home"}</Link<Route>>
        </div>
    }
}
