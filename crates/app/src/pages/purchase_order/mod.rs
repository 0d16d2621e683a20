mod order_fields;
mod requisitions;
mod submitted;

use dioxus::prelude::*;
use shared_types::{PurchaseOrderForm, MSG_FIX_ERRORS};
use shared_ui::components::{AlertNotice, Button, ButtonVariant, Form};

use crate::FormContext;
use order_fields::OrderFields;
use requisitions::RequisitionList;
use submitted::SubmittedView;

/// The purchase order page: the editable form until a valid submit, then the
/// read-only submission preview.
#[component]
pub fn PurchaseOrderPage() -> Element {
    let ctx = use_context::<FormContext>();
    let mut form =
        use_signal(move || PurchaseOrderForm::new(ctx.catalog.clone(), ctx.settings.clone()));
    let mut show_alert = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let outcome = form.write().submit().map(|_| ());
        if outcome.is_err() {
            show_alert.set(true);
        }
    };

    if form.read().is_submitted() {
        return rsx! {
            SubmittedView { form }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./purchase_order.css") }

        Form {
            class: "purchase-order-details",
            onsubmit: handle_submit,

            h2 { class: "page-title", "Purchase Order Details" }

            OrderFields { form }
            RequisitionList { form }

            div { class: "form-buttons",
                Button { button_type: "submit", "Submit" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| form.write().reset(),
                    "Reset"
                }
            }
        }

        AlertNotice {
            open: show_alert(),
            title: "Cannot submit purchase order",
            message: MSG_FIX_ERRORS.to_string(),
            on_dismiss: move |_| show_alert.set(false),
        }
    }
}
