use validator::ValidateEmail;

use crate::error::ErrorMap;
use crate::purchase_order::{OrderType, PurchaseOrder};

// ── Error keys ──────────────────────────────────────────────────────

pub const KEY_CLIENT_NAME: &str = "clientName";
pub const KEY_ORDER_TYPE: &str = "orderType";
pub const KEY_ORDER_NO: &str = "orderNo";
pub const KEY_RECEIVED_ON: &str = "receivedOn";
pub const KEY_RECEIVED_FROM_NAME: &str = "receivedFromName";
pub const KEY_RECEIVED_FROM_EMAIL: &str = "receivedFromEmail";
pub const KEY_PO_START_DATE: &str = "poStartDate";
pub const KEY_PO_END_DATE: &str = "poEndDate";
pub const KEY_BUDGET: &str = "budget";
pub const KEY_CURRENCY: &str = "currency";
/// Shared by every entry's talent-count check.
pub const KEY_TALENT_COUNT: &str = "talentDetails";

/// Error key for the job title of the entry at `index`.
pub fn job_title_key(index: usize) -> String {
    format!("talentDetails_{index}")
}

// ── Messages ────────────────────────────────────────────────────────

pub const MSG_END_BEFORE_START: &str = "PO End Date cannot be earlier than Start Date.";
pub const MSG_JOB_TITLE_REQUIRED: &str = "Job Title is required.";
pub const MSG_INDIVIDUAL_COUNT: &str = "Select exactly one talent for Individual PO.";
pub const MSG_GROUP_COUNT: &str = "Select at least two talents for Group PO.";
pub const MSG_INVALID_EMAIL: &str = "Received From Email must be a valid email address.";
/// Summary shown in the blocking alert when a submit fails.
pub const MSG_FIX_ERRORS: &str = "Please fix the errors in the form.";

fn budget_limit_message(max_budget: f64) -> String {
    format!("Budget cannot exceed {max_budget}.")
}

/// Run every rule over `order` and collect the failures.
///
/// Rules are independent; all of them run. The talent-count rule writes one
/// shared key, so when several entries fail only the last one is reported.
pub fn validate_order(order: &PurchaseOrder, max_budget: f64) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let mut require = |missing: bool, key: &str, message: &str| {
        if missing {
            errors.insert(key.to_string(), message.to_string());
        }
    };

    require(order.client_name.is_empty(), KEY_CLIENT_NAME, "Client Name is required.");
    require(order.order_type.is_none(), KEY_ORDER_TYPE, "Order Type is required.");
    require(order.order_no.is_empty(), KEY_ORDER_NO, "Order Number is required.");
    require(order.received_on.is_none(), KEY_RECEIVED_ON, "Received On is required.");
    require(
        order.received_from.name.is_empty(),
        KEY_RECEIVED_FROM_NAME,
        "Received From Name is required.",
    );
    require(
        order.received_from.email.is_empty(),
        KEY_RECEIVED_FROM_EMAIL,
        "Received From Email is required.",
    );
    require(order.po_start_date.is_none(), KEY_PO_START_DATE, "PO Start Date is required.");
    require(order.po_end_date.is_none(), KEY_PO_END_DATE, "PO End Date is required.");
    require(order.budget.is_none(), KEY_BUDGET, "Budget is required.");
    require(order.currency.is_none(), KEY_CURRENCY, "Currency is required.");

    if !order.received_from.email.is_empty() && !order.received_from.email.validate_email() {
        errors.insert(KEY_RECEIVED_FROM_EMAIL.to_string(), MSG_INVALID_EMAIL.to_string());
    }

    // A missing end date sorts before any start date.
    let end_before_start = match (order.po_start_date, order.po_end_date) {
        (Some(start), Some(end)) => end < start,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if end_before_start {
        errors.insert(KEY_PO_END_DATE.to_string(), MSG_END_BEFORE_START.to_string());
    }

    if let Some(budget) = order.budget {
        if budget > max_budget {
            errors.insert(KEY_BUDGET.to_string(), budget_limit_message(max_budget));
        }
    }

    for (index, entry) in order.requisitions.iter().enumerate() {
        if entry.job_title.is_empty() {
            errors.insert(job_title_key(index), MSG_JOB_TITLE_REQUIRED.to_string());
        }

        let selected = entry.selected_count();
        match order.order_type {
            Some(OrderType::Individual) if selected != 1 => {
                errors.insert(KEY_TALENT_COUNT.to_string(), MSG_INDIVIDUAL_COUNT.to_string());
            }
            Some(OrderType::Group) if selected < 2 => {
                errors.insert(KEY_TALENT_COUNT.to_string(), MSG_GROUP_COUNT.to_string());
            }
            _ => {}
        }
    }

    errors
}
