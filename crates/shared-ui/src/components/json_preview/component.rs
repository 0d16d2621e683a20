use dioxus::prelude::*;

/// Read-only, preformatted JSON dump.
#[component]
pub fn JsonPreview(json: String) -> Element {
    rsx! {
        pre { class: "json-preview",
            code { "{json}" }
        }
    }
}
