use super::common::{controller_with, valid_record};
use crate::workflows::registration::controller::{FormController, FormState, SubmitOutcome};
use crate::workflows::registration::domain::RegistrationRecord;
use crate::workflows::registration::fields::FieldName;
use crate::workflows::registration::navigation::{HistoryNavigator, Navigator, SUCCESS_PATH};
use crate::workflows::registration::validation::FieldError;
use crate::workflows::registration::views::FormView;

#[test]
fn valid_submit_navigates_exactly_once() {
    let mut controller = controller_with(valid_record());

    let outcome = controller.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            destination: SUCCESS_PATH.to_string()
        }
    );
    assert_eq!(controller.state(), FormState::Submitted);
    assert!(controller.errors().is_empty());
    assert!(controller.submission().is_some());
    assert_eq!(controller.navigator().current(), SUCCESS_PATH);

    assert_eq!(controller.submit(), SubmitOutcome::AlreadySubmitted);
    assert_eq!(controller.navigator().push_count(), 1);
}

#[test]
fn rejected_submit_stays_editing_without_navigation() {
    let mut record = valid_record();
    record.clear(FieldName::LastName);
    let mut controller = controller_with(record);

    match controller.submit() {
        SubmitOutcome::Rejected { errors } => {
            assert_eq!(errors.get(FieldName::LastName), Some(&FieldError::Required));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(controller.state(), FormState::Editing);
    assert_eq!(controller.navigator().push_count(), 0);
    assert_eq!(
        controller.errors().message(FieldName::LastName).as_deref(),
        Some("is required")
    );
}

#[test]
fn toggle_switches_first_date_requirement() {
    let mut controller = controller_with(valid_record());

    controller.set_differ(true);
    assert!(controller.differs());
    match controller.submit() {
        SubmitOutcome::Rejected { errors } => {
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FieldName::FirstDate]);
        }
        other => panic!("expected rejection with toggle on, got {other:?}"),
    }

    controller.set_differ(false);
    assert!(controller.submit().is_accepted());
}

#[test]
fn toggle_does_not_revalidate_entered_values() {
    let mut controller = controller_with(valid_record());
    controller.set_differ(true);
    let _ = controller.submit();
    assert!(controller.errors().contains(FieldName::FirstDate));

    controller.set_differ(false);
    assert!(controller.errors().contains(FieldName::FirstDate));
    assert!(!controller.schema().is_required(FieldName::FirstDate));
}

#[test]
fn edits_before_first_submit_do_not_produce_errors() {
    let mut controller = FormController::new(HistoryNavigator::default());
    controller
        .set_field(FieldName::FirstName, "Al")
        .expect("editing allowed");
    assert!(controller.errors().is_empty());
}

#[test]
fn edits_after_failed_submit_revalidate_that_field() {
    let mut record = valid_record();
    record.set(FieldName::FirstName, "Al");
    record.clear(FieldName::AddressPostCode);
    let mut controller = controller_with(record);

    assert!(!controller.submit().is_accepted());
    assert_eq!(controller.errors().len(), 2);

    controller
        .set_field(FieldName::FirstName, "Alice")
        .expect("editing allowed");
    assert!(!controller.errors().contains(FieldName::FirstName));
    assert!(controller.errors().contains(FieldName::AddressPostCode));

    controller
        .set_field(FieldName::AddressPostCode, "1")
        .expect("editing allowed");
    assert_eq!(
        controller.errors().get(FieldName::AddressPostCode),
        Some(&FieldError::LengthOutOfRange { min: 3, max: 10 })
    );

    controller
        .set_field(FieldName::AddressPostCode, "10115")
        .expect("editing allowed");
    assert!(controller.errors().is_empty());
    assert!(controller.submit().is_accepted());
}

#[test]
fn submitted_form_refuses_edits() {
    let mut controller = controller_with(valid_record());
    assert!(controller.submit().is_accepted());

    let err = controller
        .set_field(FieldName::FirstName, "Jane")
        .expect_err("form is closed");
    assert_eq!(err.field, FieldName::FirstName);
    assert!(controller.clear_field(FieldName::SocialId).is_err());
    assert!(controller.load(RegistrationRecord::default()).is_err());
    assert_eq!(controller.record().get(FieldName::FirstName), Some("John"));
}

#[test]
fn fresh_form_preselects_choices_but_requires_typed_fields() {
    let mut controller = FormController::new(HistoryNavigator::default());
    let SubmitOutcome::Rejected { errors } = controller.submit() else {
        panic!("empty form must not submit");
    };

    let failing: Vec<FieldName> = errors.fields().collect();
    assert_eq!(
        failing,
        vec![
            FieldName::ContractStart,
            FieldName::FirstName,
            FieldName::LastName,
            FieldName::BirthDate,
            FieldName::AddressHouse,
            FieldName::AddressPostCode,
        ]
    );
}

#[test]
fn custom_success_path_is_used() {
    let mut controller = controller_with(valid_record()).with_success_path("/done");
    assert_eq!(
        controller.submit(),
        SubmitOutcome::Accepted {
            destination: "/done".to_string()
        }
    );
    assert_eq!(controller.navigator().current(), "/done");
}

#[test]
fn controller_can_borrow_an_external_navigator() {
    let mut navigator = HistoryNavigator::default();
    {
        let mut controller = FormController::with_record(&mut navigator, valid_record());
        assert!(controller.submit().is_accepted());
    }
    assert_eq!(navigator.current(), SUCCESS_PATH);
    navigator.back();
    assert_eq!(navigator.current(), "/");
}

#[test]
fn loading_a_record_after_failed_submit_rechecks_every_field() {
    let mut record = valid_record();
    record.clear(FieldName::LastName);
    let mut controller = controller_with(record);
    assert!(!controller.submit().is_accepted());
    assert!(controller.errors().contains(FieldName::LastName));

    controller.load(valid_record()).expect("editing allowed");
    assert!(controller.errors().is_empty());
    let view = FormView::build(&controller);
    let last_name = view.field(FieldName::LastName).expect("last name shown");
    assert_eq!(last_name.value.as_deref(), Some("Smith"));
    assert_eq!(last_name.error, None);

    let mut short_house = valid_record();
    short_house.set(FieldName::AddressHouse, "1234");
    controller.load(short_house).expect("editing allowed");
    assert_eq!(
        controller.errors().fields().collect::<Vec<_>>(),
        vec![FieldName::AddressHouse]
    );
}

#[test]
fn loading_before_any_submit_leaves_no_errors() {
    let mut controller = FormController::new(HistoryNavigator::default());
    controller
        .load(RegistrationRecord::default())
        .expect("editing allowed");
    assert!(controller.errors().is_empty());
}
