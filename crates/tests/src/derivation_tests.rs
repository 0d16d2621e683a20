use pretty_assertions::assert_eq;
use shared_types::{FieldUpdate, OrderType, RequisitionEntry, TalentSelection, TalentUpdate};

use crate::common::test_form;

fn roster(entry: &RequisitionEntry) -> Vec<&str> {
    entry.talents.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn job_title_derives_req_id_and_unselected_roster() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("HCL".into()));
    form.select_job_title(0, "Web Developer");

    let entry = &form.order().requisitions[0];
    assert_eq!(entry.job_title, "Web Developer");
    assert_eq!(entry.req_id, "REQ003");
    assert_eq!(roster(entry), vec!["Bablu", "Snehil Chorasiya"]);
    assert!(entry.talents.iter().all(|t| *t == TalentSelection::unselected(t.name.clone())));
}

#[test]
fn new_job_title_replaces_roster_and_drops_talent_data() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("Collbera INC".into()));
    form.select_job_title(0, "Application - Development");
    form.update_talent_field(0, 0, TalentUpdate::Selected(true));
    form.update_talent_field(0, 0, TalentUpdate::BillRate(Some(40.0)));

    form.select_job_title(0, "IOS Developer");

    let entry = &form.order().requisitions[0];
    assert_eq!(entry.req_id, "REQ002");
    assert_eq!(roster(entry), vec!["Chitnu", "SR Singh"]);
    assert_eq!(entry.selected_count(), 0);
    assert!(entry.talents.iter().all(|t| t.bill_rate.is_none()));
}

#[test]
fn job_title_from_another_client_clears_derived_fields() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("HCL".into()));
    form.select_job_title(0, "Web Developer");

    form.select_job_title(0, "IOS Developer");

    let entry = &form.order().requisitions[0];
    assert_eq!(entry.job_title, "IOS Developer");
    assert_eq!(entry.req_id, "");
    assert!(entry.talents.is_empty());
}

#[test]
fn job_title_options_follow_the_selected_client() {
    let mut form = test_form();
    assert!(form.job_titles().is_empty());
    assert_eq!(form.clients(), vec!["Collbera INC", "HCL"]);

    form.set_field(FieldUpdate::ClientName("Collbera INC".into()));
    assert_eq!(
        form.job_titles(),
        vec!["Application - Development", "IOS Developer"]
    );

    form.set_field(FieldUpdate::ClientName("HCL".into()));
    assert_eq!(form.job_titles(), vec!["Web Developer"]);
}

#[test]
fn changing_client_keeps_existing_entries() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("HCL".into()));
    form.select_job_title(0, "Web Developer");

    form.set_field(FieldUpdate::ClientName("Collbera INC".into()));

    assert_eq!(form.order().requisitions[0].req_id, "REQ003");
}

#[test]
fn add_entry_works_for_any_order_type() {
    for order_type in [None, Some(OrderType::Individual), Some(OrderType::Group)] {
        let mut form = test_form();
        form.set_field(FieldUpdate::OrderType(order_type));
        form.add_requisition_entry();
        form.add_requisition_entry();

        assert_eq!(form.order().requisitions.len(), 3);
        assert_eq!(form.order().requisitions[2], RequisitionEntry::default());
    }
}

#[test]
fn entries_derive_independently() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("Collbera INC".into()));
    form.add_requisition_entry();
    form.select_job_title(0, "Application - Development");
    form.select_job_title(1, "IOS Developer");
    form.update_talent_field(1, 1, TalentUpdate::Selected(true));

    let entries = &form.order().requisitions;
    assert_eq!(entries[0].req_id, "REQ001");
    assert_eq!(entries[0].selected_count(), 0);
    assert_eq!(entries[1].req_id, "REQ002");
    assert!(entries[1].talents[1].is_selected);
}

#[test]
fn out_of_range_indices_leave_the_order_alone() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("HCL".into()));
    form.select_job_title(0, "Web Developer");
    let before = form.order().clone();

    form.select_job_title(4, "Web Developer");
    form.update_talent_field(4, 0, TalentUpdate::Selected(true));
    form.update_talent_field(0, 9, TalentUpdate::Selected(true));

    assert_eq!(form.order(), &before);
}

#[test]
fn talent_edits_touch_only_the_addressed_row() {
    let mut form = test_form();
    form.set_field(FieldUpdate::ClientName("HCL".into()));
    form.select_job_title(0, "Web Developer");

    form.update_talent_field(0, 1, TalentUpdate::ContractDuration("12 months".into()));
    form.update_talent_field(0, 1, TalentUpdate::StandardTimeBr(Some(30.5)));

    let talents = &form.order().requisitions[0].talents;
    assert_eq!(talents[0], TalentSelection::unselected("Bablu"));
    assert_eq!(talents[1].contract_duration, "12 months");
    assert_eq!(talents[1].standard_time_br, Some(30.5));
    assert!(!talents[1].is_selected);
}
