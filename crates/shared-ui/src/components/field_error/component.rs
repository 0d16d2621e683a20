use dioxus::prelude::*;

/// Inline validation message; renders nothing when `message` is `None`.
#[component]
pub fn FieldError(#[props(default)] message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        span { class: "field-error", role: "alert", "{message}" }
    }
}
