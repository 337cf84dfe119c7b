use yew::prelude::*;

use crate::utils::Pager;

#[derive(Properties, PartialEq)]
pub struct PagerControlsProps {
    pub pager: Pager,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
}

/// Text for a page with nothing on it
pub fn empty_page_message(pager: Pager, none_found: &'static str) -> AttrValue {
    if pager.is_past_end() {
        AttrValue::from("No more results.")
    } else {
        AttrValue::from(none_found)
    }
}

/// Previous / Next, disabled at the ends
#[function_component(PagerControls)]
pub fn pager_controls(props: &PagerControlsProps) -> Html {
    let pager = props.pager;
    if !pager.has_previous() && !pager.has_next() {
        return html! {};
    }

    let label = match pager.total_pages() {
        Some(total) => format!("Page {} of {}", pager.current_page(), total),
        None => format!("Page {}", pager.current_page()),
    };

    html! {
        <nav class="pager">
            <button
                class="btn"
                disabled={!pager.has_previous()}
                onclick={props.on_previous.reform(|_: MouseEvent| ())}
            >
                {"Previous"}
            </button>
            <span class="pager-label">{label}</span>
            <button
                class="btn"
                disabled={!pager.has_next()}
                onclick={props.on_next.reform(|_: MouseEvent| ())}
            >
                {"Next"}
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PagingMode;

    #[test]
    fn empty_server_page_after_a_full_one_says_no_more() {
        let past_end = Pager::new(PagingMode::ServerPaged, 6).with_loaded(6).next().with_loaded(0);
        assert_eq!(empty_page_message(past_end, "No hotels found."), "No more results.");

        let nothing = Pager::new(PagingMode::ServerPaged, 6).with_loaded(0);
        assert_eq!(empty_page_message(nothing, "No hotels found."), "No hotels found.");
    }
}
