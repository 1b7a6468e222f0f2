use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::domain::{
    AddressData, CompanyData, EmployeeData, RegistrationRecord, ValidatedRegistration,
};
use super::fields::FieldName;
use super::options::{ChoiceOption, City, Country, Nationality, Street, Supplement};
use super::schema::{FieldKind, FieldRule, FieldRules};

/// Date format produced by date controls.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a single field was rejected. The display text is the inline message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("must be between {min} and {max} characters")]
    LengthOutOfRange { min: usize, max: usize },
    #[error("must be a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("must be one of the allowed values")]
    NotAnOption,
}

/// Field error mapping, ordered like the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Inline message for a field's error slot.
    pub fn message(&self, field: FieldName) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub(crate) fn insert(&mut self, field: FieldName, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub(crate) fn remove(&mut self, field: FieldName) {
        self.errors.remove(&field);
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.key(), &error.to_string())?;
        }
        map.end()
    }
}

/// Check one value against its rule. Only the first failure is reported.
pub fn check_field(rule: &FieldRule, value: Option<&str>) -> Result<(), FieldError> {
    let value = match value.filter(|raw| !raw.trim().is_empty()) {
        Some(value) => value,
        None if rule.required => return Err(FieldError::Required),
        None => return Ok(()),
    };

    match rule.kind {
        FieldKind::Date => {
            parse_date(value)?;
        }
        FieldKind::Choice(options) => {
            if !options.contains(&value) {
                return Err(FieldError::NotAnOption);
            }
        }
        FieldKind::Text => {}
    }

    let len = value.chars().count();
    match (rule.min_len, rule.max_len) {
        (Some(min), Some(max)) if len < min || len > max => {
            Err(FieldError::LengthOutOfRange { min, max })
        }
        (Some(min), None) if len < min => Err(FieldError::TooShort { min }),
        (None, Some(max)) if len > max => Err(FieldError::TooLong { max }),
        _ => Ok(()),
    }
}

/// Validate every field of `record` against `schema`.
pub fn validate(record: &RegistrationRecord, schema: &FieldRules) -> Result<(), FieldErrors> {
    let errors = collect_errors(record, schema);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and convert into the typed registration.
pub fn validate_into(
    record: &RegistrationRecord,
    schema: &FieldRules,
) -> Result<ValidatedRegistration, FieldErrors> {
    validate(record, schema)?;

    let mut errors = FieldErrors::default();
    let registration = assemble(record, schema, &mut errors);
    match registration {
        Some(registration) if errors.is_empty() => Ok(registration),
        _ => Err(errors),
    }
}

pub(crate) fn collect_errors(record: &RegistrationRecord, schema: &FieldRules) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, rule) in schema.iter() {
        if let Err(error) = check_field(&rule, record.get(field)) {
            errors.insert(field, error);
        }
    }
    errors
}

/// Strict `YYYY-MM-DD`: chrono alone also takes `2024-3-1` and `+2024-03-01`.
fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return Err(FieldError::InvalidDate);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

/// Typed conversion of an already-checked record. Any inconsistency lands in
/// `errors` rather than panicking.
fn assemble(
    record: &RegistrationRecord,
    schema: &FieldRules,
    errors: &mut FieldErrors,
) -> Option<ValidatedRegistration> {
    let mut date = |field: FieldName| -> Option<NaiveDate> {
        let value = record.present(field)?;
        parse_date(value)
            .map_err(|error| errors.insert(field, error))
            .ok()
    };

    let contract_start = date(FieldName::ContractStart);
    let first_date = if schema.variant().differs() {
        date(FieldName::FirstDate)
    } else {
        None
    };
    let birth_date = date(FieldName::BirthDate);

    let text = |field: FieldName| record.present(field).map(str::to_string);

    let employee_city = choice::<City>(record, FieldName::City, errors);
    let employee_country = choice::<Country>(record, FieldName::Country, errors);
    let nationality = choice::<Nationality>(record, FieldName::Nationality, errors);
    let address_country = choice::<Country>(record, FieldName::AddressCountry, errors);
    let street = choice::<Street>(record, FieldName::AddressStreet, errors);
    let supplement = choice::<Supplement>(record, FieldName::AddressSupplement, errors);
    let address_city = choice::<City>(record, FieldName::AddressCity, errors);

    Some(ValidatedRegistration {
        company: CompanyData {
            contract_start: contract_start?,
            first_date,
        },
        employee: EmployeeData {
            first_name: text(FieldName::FirstName)?,
            last_name: text(FieldName::LastName)?,
            birth_name: text(FieldName::BirthName),
            social_id: text(FieldName::SocialId),
            city: employee_city?,
            country: employee_country?,
            birth_date: birth_date?,
            nationality: nationality?,
        },
        address: AddressData {
            country: address_country?,
            street: street?,
            house: text(FieldName::AddressHouse)?,
            supplement,
            city: address_city?,
            post_code: text(FieldName::AddressPostCode)?,
        },
    })
}

fn choice<T: ChoiceOption>(
    record: &RegistrationRecord,
    field: FieldName,
    errors: &mut FieldErrors,
) -> Option<T> {
    let value = record.present(field)?;
    let parsed = T::from_label(value);
    if parsed.is_none() {
        errors.insert(field, FieldError::NotAnOption);
    }
    parsed
}
