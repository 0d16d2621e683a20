use std::sync::Arc;

use shared_types::{
    parse_form_date, Currency, FieldUpdate, FormConfig, OrderType, PurchaseOrderForm,
    TalentUpdate,
};

/// A form wired to the bundled catalog and default settings.
pub fn test_form() -> PurchaseOrderForm {
    let config = FormConfig::builtin().expect("bundled config must parse");
    PurchaseOrderForm::new(Arc::new(config.catalog()), config.form)
}

/// Every order-level update needed for a valid HCL order of `order_type`.
pub fn valid_header(order_type: OrderType) -> Vec<FieldUpdate> {
    vec![
        FieldUpdate::ClientName("HCL".into()),
        FieldUpdate::OrderType(Some(order_type)),
        FieldUpdate::OrderNo("PO-2024-001".into()),
        FieldUpdate::ReceivedOn(parse_form_date("2024-01-02")),
        FieldUpdate::ReceivedFromName("Priya Sharma".into()),
        FieldUpdate::ReceivedFromEmail("priya@example.com".into()),
        FieldUpdate::PoStartDate(parse_form_date("2024-01-10")),
        FieldUpdate::PoEndDate(parse_form_date("2024-06-30")),
        FieldUpdate::Budget(Some(45000.0)),
        FieldUpdate::Currency(Some(Currency::Usd)),
    ]
}

pub fn apply_all(form: &mut PurchaseOrderForm, updates: Vec<FieldUpdate>) {
    for update in updates {
        form.set_field(update);
    }
}

/// Fill the header, pick "Web Developer" on the first entry and select the
/// first `selected` talents on it.
pub fn filled_form(order_type: OrderType, selected: usize) -> PurchaseOrderForm {
    let mut form = test_form();
    apply_all(&mut form, valid_header(order_type));
    form.select_job_title(0, "Web Developer");
    for talent_index in 0..selected {
        form.update_talent_field(0, talent_index, TalentUpdate::Selected(true));
    }
    form
}

/// A form that passes validation for the given order type.
pub fn valid_form(order_type: OrderType) -> PurchaseOrderForm {
    match order_type {
        OrderType::Individual => filled_form(order_type, 1),
        OrderType::Group => filled_form(order_type, 2),
    }
}
