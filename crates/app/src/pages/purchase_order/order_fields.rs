use dioxus::prelude::*;
use shared_types::{
    date_input_value, number_input_value, parse_form_date, parse_form_number, Currency,
    FieldUpdate, OrderType, PurchaseOrderForm, CURRENCIES, KEY_BUDGET, KEY_CLIENT_NAME,
    KEY_CURRENCY, KEY_ORDER_NO, KEY_ORDER_TYPE, KEY_PO_END_DATE, KEY_PO_START_DATE,
    KEY_RECEIVED_FROM_EMAIL, KEY_RECEIVED_FROM_NAME, KEY_RECEIVED_ON, ORDER_TYPES,
};
use shared_ui::components::{FormRow, FormSelect, Input};

/// Order-level fields: client, type, numbers, dates, budget and currency.
#[component]
pub fn OrderFields(form: Signal<PurchaseOrderForm>) -> Element {
    let mut form = form;
    let (order, errors, clients, max_budget) = {
        let f = form.read();
        (
            f.order().clone(),
            f.errors().clone(),
            f.clients(),
            f.settings().max_budget,
        )
    };
    let err = |key: &str| errors.get(key).cloned();

    let mut update = move |change: FieldUpdate| form.write().set_field(change);

    rsx! {
        FormRow {
            FormSelect {
                label: "Client Name",
                placeholder: "Select Client",
                value: order.client_name.clone(),
                error: err(KEY_CLIENT_NAME),
                onchange: move |e: Event<FormData>| update(FieldUpdate::ClientName(e.value())),
                for client in clients {
                    option { key: "{client}", value: "{client}", "{client}" }
                }
            }
            FormSelect {
                label: "Purchase Order Type",
                placeholder: "Select Type",
                value: order.order_type.map(|t| t.as_str()).unwrap_or_default().to_string(),
                error: err(KEY_ORDER_TYPE),
                onchange: move |e: Event<FormData>| {
                    update(FieldUpdate::OrderType(OrderType::from_form_value(&e.value())))
                },
                for t in ORDER_TYPES {
                    option { value: t.as_str(), "{t}" }
                }
            }
            Input {
                label: "Order No.",
                placeholder: "Enter Order Number",
                value: order.order_no.clone(),
                error: err(KEY_ORDER_NO),
                on_input: move |e: FormEvent| update(FieldUpdate::OrderNo(e.value())),
            }
            Input {
                label: "Received On",
                input_type: "date",
                value: date_input_value(order.received_on),
                error: err(KEY_RECEIVED_ON),
                on_input: move |e: FormEvent| {
                    update(FieldUpdate::ReceivedOn(parse_form_date(&e.value())))
                },
            }
        }

        FormRow {
            Input {
                label: "Received From (Name)",
                placeholder: "Enter Name",
                value: order.received_from.name.clone(),
                error: err(KEY_RECEIVED_FROM_NAME),
                on_input: move |e: FormEvent| update(FieldUpdate::ReceivedFromName(e.value())),
            }
            Input {
                label: "Received From (Email)",
                input_type: "email",
                placeholder: "Enter Email",
                value: order.received_from.email.clone(),
                error: err(KEY_RECEIVED_FROM_EMAIL),
                on_input: move |e: FormEvent| update(FieldUpdate::ReceivedFromEmail(e.value())),
            }
            Input {
                label: "PO Start Date",
                input_type: "date",
                value: date_input_value(order.po_start_date),
                error: err(KEY_PO_START_DATE),
                on_input: move |e: FormEvent| {
                    update(FieldUpdate::PoStartDate(parse_form_date(&e.value())))
                },
            }
            Input {
                label: "PO End Date",
                input_type: "date",
                value: date_input_value(order.po_end_date),
                error: err(KEY_PO_END_DATE),
                on_input: move |e: FormEvent| {
                    update(FieldUpdate::PoEndDate(parse_form_date(&e.value())))
                },
            }
        }

        FormRow {
            Input {
                label: "Budget",
                input_type: "number",
                placeholder: "Enter Budget",
                max: number_input_value(Some(max_budget)),
                value: number_input_value(order.budget),
                error: err(KEY_BUDGET),
                on_input: move |e: FormEvent| {
                    update(FieldUpdate::Budget(parse_form_number(&e.value())))
                },
            }
            FormSelect {
                label: "Currency",
                placeholder: "Select Currency",
                value: order.currency.map(|c| c.as_str()).unwrap_or_default().to_string(),
                error: err(KEY_CURRENCY),
                onchange: move |e: Event<FormData>| {
                    update(FieldUpdate::Currency(Currency::from_form_value(&e.value())))
                },
                for c in CURRENCIES {
                    option { value: c.as_str(), "{c}" }
                }
            }
        }
    }
}
