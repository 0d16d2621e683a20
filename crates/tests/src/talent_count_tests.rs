use pretty_assertions::assert_eq;
use shared_types::{
    FieldUpdate, OrderType, TalentUpdate, KEY_TALENT_COUNT, MSG_GROUP_COUNT, MSG_INDIVIDUAL_COUNT,
};

use crate::common::filled_form;

#[test]
fn individual_order_requires_exactly_one_talent() {
    for selected in [0, 2] {
        let mut form = filled_form(OrderType::Individual, selected);
        assert!(form.submit().is_err(), "{selected} selected");
        assert_eq!(form.error(KEY_TALENT_COUNT), Some(MSG_INDIVIDUAL_COUNT));
    }

    let mut form = filled_form(OrderType::Individual, 1);
    assert!(form.submit().is_ok());
    assert_eq!(form.error(KEY_TALENT_COUNT), None);
}

#[test]
fn group_order_requires_at_least_two_talents() {
    for selected in [0, 1] {
        let mut form = filled_form(OrderType::Group, selected);
        assert!(form.submit().is_err(), "{selected} selected");
        assert_eq!(form.error(KEY_TALENT_COUNT), Some(MSG_GROUP_COUNT));
    }

    let mut form = filled_form(OrderType::Group, 2);
    assert!(form.submit().is_ok());
}

#[test]
fn deselecting_a_talent_brings_the_count_error_back() {
    let mut form = filled_form(OrderType::Group, 2);
    assert!(form.validate());

    form.update_talent_field(0, 1, TalentUpdate::Selected(false));
    assert!(!form.validate());
    assert_eq!(form.error(KEY_TALENT_COUNT), Some(MSG_GROUP_COUNT));
}

#[test]
fn count_is_checked_per_entry_under_one_key() {
    let mut form = filled_form(OrderType::Group, 2);
    form.add_requisition_entry();
    form.select_job_title(1, "Web Developer");
    form.update_talent_field(1, 0, TalentUpdate::Selected(true));

    assert!(!form.validate());
    assert_eq!(form.error(KEY_TALENT_COUNT), Some(MSG_GROUP_COUNT));
    assert_eq!(form.errors().len(), 1);

    form.update_talent_field(1, 1, TalentUpdate::Selected(true));
    assert!(form.validate());
}

#[test]
fn order_type_switch_changes_which_rule_applies() {
    let mut form = filled_form(OrderType::Group, 2);
    assert!(form.validate());

    form.set_field(FieldUpdate::OrderType(Some(OrderType::Individual)));
    assert!(!form.validate());
    assert_eq!(form.error(KEY_TALENT_COUNT), Some(MSG_INDIVIDUAL_COUNT));
}
