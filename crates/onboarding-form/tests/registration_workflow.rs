use onboarding_form::workflows::registration::{
    ConfirmationView, Country, FieldName, FormController, FormState, FormView, HistoryNavigator,
    Navigator, RegistrationRecord, SubmitOutcome, FORM_PATH, SUCCESS_PATH,
};

const VALID_RECORD: &str = r#"{
    "contractStart": "2024-03-01",
    "firstName": "John",
    "lastName": "Smith",
    "city": "Berlin",
    "country": "Germany",
    "birthDate": "1988-11-02",
    "nationality": "German",
    "addressCountry": "Germany",
    "addressStreet": "Germany street",
    "addressHouse": "7b",
    "addressCity": "Berlin",
    "addressPostCode": "10115"
}"#;

fn record() -> RegistrationRecord {
    serde_json::from_str(VALID_RECORD).expect("fixture parses")
}

#[test]
fn json_record_submits_and_confirmation_leads_back() {
    let mut controller = FormController::with_record(HistoryNavigator::default(), record());

    let outcome = controller.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            destination: SUCCESS_PATH.to_string()
        }
    );
    let submission = controller.submission().expect("submission kept");
    assert_eq!(submission.address.country, Country::Germany);
    assert_eq!(submission.address.supplement, None);

    ConfirmationView::new().back(controller.navigator_mut());
    assert_eq!(controller.navigator().current(), FORM_PATH);
    assert_eq!(controller.navigator().push_count(), 1);
}

#[test]
fn interactive_session_with_differing_start() {
    let mut controller = FormController::new(HistoryNavigator::default());
    for (field, value) in [
        (FieldName::ContractStart, "2024-03-01"),
        (FieldName::FirstName, "Olena"),
        (FieldName::LastName, "Kovalenko"),
        (FieldName::BirthDate, "1993-07-21"),
        (FieldName::AddressHouse, "5"),
        (FieldName::AddressPostCode, "02000"),
    ] {
        controller.set_field(field, value).expect("editing allowed");
    }

    controller.set_differ(true);
    let view = FormView::build(&controller);
    assert!(view.field(FieldName::FirstDate).is_some());

    let outcome = controller.submit();
    assert!(!outcome.is_accepted());
    assert_eq!(controller.state(), FormState::Editing);
    let view = FormView::build(&controller);
    assert_eq!(
        view.field(FieldName::FirstDate)
            .and_then(|field| field.error.as_deref()),
        Some("is required")
    );

    controller
        .set_field(FieldName::FirstDate, "2024-03-04")
        .expect("editing allowed");
    assert!(controller.errors().is_empty());
    assert!(controller.submit().is_accepted());

    let submission = controller.submission().expect("submission kept");
    assert_eq!(submission.company.first_work_day().to_string(), "2024-03-04");
    assert_eq!(controller.navigator().current(), SUCCESS_PATH);
}

#[test]
fn record_serializes_back_to_registered_keys() {
    let json = serde_json::to_value(record()).expect("record serializes");
    assert_eq!(json["addressPostCode"], "10115");
    assert!(json.get("firstDate").is_none());
}
