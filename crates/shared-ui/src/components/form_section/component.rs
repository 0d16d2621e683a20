use dioxus::prelude::*;

/// A titled group of form rows, with an optional action area beside the title.
#[component]
pub fn FormSection(
    #[props(default)] title: String,
    #[props(default)] actions: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-section", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if !title.is_empty() {
                div { class: "form-section-header",
                    h3 { class: "form-section-title", "{title}" }
                    div { class: "form-section-actions", {actions} }
                }
            }
            {children}
        }
    }
}

/// Lays its children out side by side, wrapping on narrow screens.
#[component]
pub fn FormRow(children: Element) -> Element {
    rsx! {
        div { class: "form-row", {children} }
    }
}
