use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<String>,
    #[prop_or_default]
    pub alt: AttrValue,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <div class="gallery">
            { for props.images.iter().filter(|name| !name.is_empty()).map(|name| html! {
                <img src={CONFIG.image_url(name)} alt={props.alt.clone()} />
            }) }
        </div>
    }
}
