use std::sync::Arc;

use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, FieldUpdate, FormConfig, OrderType, PurchaseOrderForm, RequisitionCatalog,
    TalentUpdate, KEY_BUDGET,
};

use crate::common::{apply_all, valid_form, valid_header};

#[test]
fn bundled_config_lists_every_client_requisition() {
    let config = FormConfig::builtin().unwrap();
    let catalog = config.catalog();

    assert_eq!(config.form.max_budget, 99999.0);
    assert_eq!(catalog.clients(), vec!["Collbera INC", "HCL"]);
    let req = catalog.find("Collbera INC", "Application - Development").unwrap();
    assert_eq!(req.req_id, "REQ001");
    assert_eq!(req.talents, vec!["Monika Goyal", "Shalili Khatri"]);
    assert!(catalog.find("HCL", "Application - Development").is_none());
}

#[test]
fn budget_limit_comes_from_config() {
    let config = FormConfig::from_toml_str(
        r#"
        [form]
        max_budget = 500

        [[clients]]
        name = "HCL"

        [[clients.requisitions]]
        req_id = "REQ003"
        job_title = "Web Developer"
        talents = ["Bablu", "Snehil Chorasiya"]
        "#,
    )
    .unwrap();
    let mut form = PurchaseOrderForm::new(Arc::new(config.catalog()), config.form);
    apply_all(&mut form, valid_header(OrderType::Individual));
    form.select_job_title(0, "Web Developer");
    form.update_talent_field(0, 0, TalentUpdate::Selected(true));

    let err = form.submit().unwrap_err();
    assert_eq!(err.field(KEY_BUDGET), Some("Budget cannot exceed 500."));

    form.set_field(FieldUpdate::Budget(Some(500.0)));
    assert!(form.submit().is_ok());
}

#[test]
fn budget_at_the_default_limit_is_accepted() {
    let mut form = valid_form(OrderType::Individual);
    form.set_field(FieldUpdate::Budget(Some(99999.0)));
    assert!(form.submit().is_ok());
}

#[test]
fn malformed_config_is_a_bad_request() {
    let err = FormConfig::from_toml_str("[form]\nmax_budget = \"lots\"").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.starts_with("Invalid form configuration"));
}
