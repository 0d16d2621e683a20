use dioxus::prelude::*;
use shared_types::PurchaseOrderForm;
use shared_ui::components::{Button, FieldError, JsonPreview};

/// Read-only dump of the submitted order with a single way back: reset.
#[component]
pub fn SubmittedView(form: Signal<PurchaseOrderForm>) -> Element {
    let mut form = form;
    let dump = form.read().submission_json();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./purchase_order.css") }

        div { class: "submitted-view",
            h2 { class: "page-title", "Form Submitted" }
            {match dump {
                Ok(json) => rsx! { JsonPreview { json } },
                Err(err) => rsx! { FieldError { message: err.message } },
            }}
            Button {
                onclick: move |_| form.write().reset(),
                "Reset Form"
            }
        }
    }
}
