use crate::workflows::registration::controller::FormController;
use crate::workflows::registration::domain::RegistrationRecord;
use crate::workflows::registration::fields::FieldName;
use crate::workflows::registration::navigation::HistoryNavigator;

/// Record that satisfies every rule of both schema variants except the
/// differing-start `firstDate` requirement.
pub(super) fn valid_record() -> RegistrationRecord {
    let mut record = RegistrationRecord::default();
    for (field, value) in [
        (FieldName::ContractStart, "2024-03-01"),
        (FieldName::FirstName, "John"),
        (FieldName::LastName, "Smith"),
        (FieldName::City, "Kyiv"),
        (FieldName::Country, "Ukraine"),
        (FieldName::BirthDate, "1990-05-17"),
        (FieldName::Nationality, "Ukrainian"),
        (FieldName::AddressCountry, "Ukraine"),
        (FieldName::AddressStreet, "Ukrainian street"),
        (FieldName::AddressHouse, "12"),
        (FieldName::AddressSupplement, "Ukrainian supplement"),
        (FieldName::AddressCity, "Kyiv"),
        (FieldName::AddressPostCode, "01001"),
    ] {
        record.set(field, value);
    }
    record
}

pub(super) fn controller_with(record: RegistrationRecord) -> FormController<HistoryNavigator> {
    FormController::with_record(HistoryNavigator::default(), record)
}

pub(super) fn text_of_len(len: usize) -> String {
    "a".repeat(len)
}
