use yew::prelude::*;

use crate::utils::{CARD_CVC_ELEMENT_ID, CARD_EXPIRY_ELEMENT_ID, CARD_NUMBER_ELEMENT_ID};

/// Containers the payment provider mounts its hosted inputs into
#[function_component(CardFields)]
pub fn card_fields() -> Html {
    html! {
        <div class="card-fields">
            <div class="form-group">
                <label>{"Card number"}</label>
                <div id={CARD_NUMBER_ELEMENT_ID} class="card-element"></div>
            </div>
            <div class="card-row">
                <div class="form-group">
                    <label>{"Expiry"}</label>
                    <div id={CARD_EXPIRY_ELEMENT_ID} class="card-element"></div>
                </div>
                <div class="form-group">
                    <label>{"CVC"}</label>
                    <div id={CARD_CVC_ELEMENT_ID} class="card-element"></div>
                </div>
            </div>
        </div>
    }
}
