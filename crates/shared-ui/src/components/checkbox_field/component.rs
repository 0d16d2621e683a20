use dioxus::prelude::*;

/// A native checkbox with its label text, driven entirely by `checked`.
#[component]
pub fn CheckboxField(
    checked: bool,
    label: String,
    #[props(default)] on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "checkbox-field",
            input {
                r#type: "checkbox",
                class: "checkbox-field-input",
                checked: checked,
                onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            }
            span { class: "checkbox-field-label", "{label}" }
        }
    }
}
