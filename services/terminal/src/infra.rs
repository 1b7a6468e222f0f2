use onboarding_form::error::AppError;
use onboarding_form::workflows::registration::RegistrationRecord;
use std::fs;
use std::path::Path;

/// Read a registration record from a JSON file keyed by the form's field keys.
pub(crate) fn load_record(path: &Path) -> Result<RegistrationRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    let record = serde_json::from_str(&raw)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboarding_form::workflows::registration::FieldName;
    use std::io::Write;

    #[test]
    fn loads_record_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "firstName": "John", "addressHouse": "12" }}"#).expect("write fixture");

        let record = load_record(file.path()).expect("record loads");
        assert_eq!(record.get(FieldName::FirstName), Some("John"));
        assert_eq!(record.get(FieldName::AddressHouse), Some("12"));
    }

    #[test]
    fn malformed_json_is_a_record_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write fixture");

        match load_record(file.path()) {
            Err(AppError::Record(_)) => {}
            other => panic!("expected record error, got {other:?}"),
        }
    }
}
