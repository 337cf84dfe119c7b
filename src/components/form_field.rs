use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(true)]
    pub required: bool,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        </div>
    }
}

/// Optional image picker; emits the chosen file or `None` when cleared
#[derive(Properties, PartialEq)]
pub struct FilePickerProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub on_pick: Callback<Option<web_sys::File>>,
}

#[function_component(FilePicker)]
pub fn file_picker(props: &FilePickerProps) -> Html {
    let onchange = props.on_pick.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.files().and_then(|files| files.get(0))
    });

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input id={props.id.clone()} type="file" accept="image/*" {onchange} />
        </div>
    }
}
