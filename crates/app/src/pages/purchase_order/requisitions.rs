use dioxus::prelude::*;
use shared_types::{
    job_title_key, number_input_value, parse_form_number, Currency, OrderType, PurchaseOrderForm,
    RequisitionEntry, TalentSelection, TalentUpdate, CURRENCIES, KEY_TALENT_COUNT,
};
use shared_ui::components::{
    Button, ButtonVariant, CheckboxField, FieldError, FormRow, FormSection, FormSelect, Input,
};

/// The "Talent Details" section: one card per requisition entry.
#[component]
pub fn RequisitionList(form: Signal<PurchaseOrderForm>) -> Element {
    let mut form = form;
    let (entries, job_titles, is_group, count_error, title_errors) = {
        let f = form.read();
        let entries = f.order().requisitions.clone();
        let title_errors: Vec<Option<String>> = (0..entries.len())
            .map(|i| f.error(&job_title_key(i)).map(str::to_string))
            .collect();
        (
            entries,
            f.job_titles(),
            f.order().order_type == Some(OrderType::Group),
            f.error(KEY_TALENT_COUNT).map(str::to_string),
            title_errors,
        )
    };

    rsx! {
        FormSection {
            class: "talent-details",
            title: "Talent Details",
            actions: rsx! {
                if is_group {
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "add-another-btn",
                        onclick: move |_| form.write().add_requisition_entry(),
                        "Add Another"
                    }
                }
            },

            FieldError { message: count_error }

            for (index, entry) in entries.into_iter().enumerate() {
                RequisitionCard {
                    key: "{index}",
                    form,
                    index,
                    entry,
                    job_titles: job_titles.clone(),
                    error: title_errors.get(index).cloned().flatten(),
                }
            }
        }
    }
}

/// Job title picker, derived req id and the talent roster for one entry.
#[component]
fn RequisitionCard(
    form: Signal<PurchaseOrderForm>,
    index: usize,
    entry: RequisitionEntry,
    job_titles: Vec<String>,
    error: Option<String>,
) -> Element {
    let mut form = form;
    let req_id = entry.req_id.clone();

    rsx! {
        div { class: "talent-section",
            FormRow {
                FormSelect {
                    label: "Job Title/REQ Name",
                    placeholder: "Select Job",
                    value: entry.job_title.clone(),
                    error,
                    onchange: move |e: Event<FormData>| {
                        form.write().select_job_title(index, &e.value())
                    },
                    for title in job_titles {
                        option { key: "{title}", value: "{title}", "{title}" }
                    }
                }
                Input {
                    label: "REQ ID",
                    value: req_id.clone(),
                    read_only: true,
                }
            }

            for (talent_index, talent) in entry.talents.into_iter().enumerate() {
                TalentRow {
                    key: "{req_id}-{talent_index}",
                    form,
                    entry_index: index,
                    talent_index,
                    talent,
                }
            }
        }
    }
}

/// Selection checkbox for one talent, plus contract and rate inputs once
/// the talent is selected.
#[component]
fn TalentRow(
    form: Signal<PurchaseOrderForm>,
    entry_index: usize,
    talent_index: usize,
    talent: TalentSelection,
) -> Element {
    let mut form = form;
    let mut update =
        move |change: TalentUpdate| form.write().update_talent_field(entry_index, talent_index, change);

    rsx! {
        div { class: "talent-row",
            CheckboxField {
                checked: talent.is_selected,
                label: talent.name.clone(),
                on_change: move |checked: bool| update(TalentUpdate::Selected(checked)),
            }

            if talent.is_selected {
                div { class: "talent-details-fields",
                    Input {
                        label: "Contract Duration",
                        placeholder: "Enter Contract Duration",
                        value: talent.contract_duration.clone(),
                        on_input: move |e: FormEvent| {
                            update(TalentUpdate::ContractDuration(e.value()))
                        },
                    }
                    RateInput {
                        label: "Bill Rate",
                        rate: talent.bill_rate,
                        currency: talent.bill_rate_currency,
                        on_rate: move |v: Option<f64>| update(TalentUpdate::BillRate(v)),
                        on_currency: move |c: Option<Currency>| update(TalentUpdate::BillRateCurrency(c)),
                    }
                    RateInput {
                        label: "Standard Time BR",
                        rate: talent.standard_time_br,
                        currency: talent.standard_time_currency,
                        on_rate: move |v: Option<f64>| update(TalentUpdate::StandardTimeBr(v)),
                        on_currency: move |c: Option<Currency>| update(TalentUpdate::StandardTimeCurrency(c)),
                    }
                    RateInput {
                        label: "Over Time BR",
                        rate: talent.over_time_br,
                        currency: talent.over_time_currency,
                        on_rate: move |v: Option<f64>| update(TalentUpdate::OverTimeBr(v)),
                        on_currency: move |c: Option<Currency>| update(TalentUpdate::OverTimeCurrency(c)),
                    }
                }
            }
        }
    }
}

/// A rate amount with its own currency picker.
#[component]
fn RateInput(
    label: String,
    rate: Option<f64>,
    currency: Option<Currency>,
    on_rate: EventHandler<Option<f64>>,
    on_currency: EventHandler<Option<Currency>>,
) -> Element {
    rsx! {
        Input {
            label: label.clone(),
            input_type: "number",
            placeholder: format!("Enter {label}"),
            value: number_input_value(rate),
            on_input: move |e: FormEvent| on_rate.call(parse_form_number(&e.value())),
        }
        FormSelect {
            label: "Currency",
            placeholder: "Select Currency",
            value: currency.map(|c| c.as_str()).unwrap_or_default().to_string(),
            onchange: move |e: Event<FormData>| {
                on_currency.call(Currency::from_form_value(&e.value()))
            },
            for c in CURRENCIES {
                option { value: c.as_str(), "{c}" }
            }
        }
    }
}
