use dioxus::prelude::*;

use crate::components::FieldError;

/// A labelled form input with an optional inline validation message.
///
/// `input_type` maps straight onto the HTML `type` attribute, so the same
/// component serves text, number, date and email fields.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] read_only: bool,
    /// Upper bound for number inputs.
    #[props(default)]
    max: Option<String>,
    /// Validation message shown under the input.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                readonly: read_only,
                max: max,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            FieldError { message: error }
        }
    }
}
