use dioxus::prelude::*;

use crate::components::FieldError;

/// A themed native select element for form fields.
///
/// The first option is always an empty placeholder so an unset value renders
/// as "nothing chosen". Children should be `option { value: "...", "Label" }`
/// elements.
#[component]
pub fn FormSelect(
    /// Current selected value; empty selects the placeholder.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    /// Text of the empty leading option.
    #[props(default = "Select".to_string())]
    placeholder: String,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    /// Validation message shown under the select.
    #[props(default)]
    error: Option<String>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-invalid": error.is_some(),
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                option { value: "", "{placeholder}" }
                {children}
            }
            FieldError { message: error }
        }
    }
}
