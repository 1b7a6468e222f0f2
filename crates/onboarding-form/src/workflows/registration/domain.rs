use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::FieldName;
use super::options::{ChoiceOption, City, Country, Nationality, Street, Supplement};

/// Raw control values for one form session, keyed like the form registers them.
///
/// Values stay strings until validation so type mismatches and out-of-enum
/// input can be reported against the field that carried them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_supplement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_post_code: Option<String>,
}

impl RegistrationRecord {
    /// Fresh record with every choice control showing its first option.
    pub fn with_choice_defaults() -> Self {
        Self {
            city: Some(City::preselected().label().to_string()),
            country: Some(Country::preselected().label().to_string()),
            nationality: Some(Nationality::preselected().label().to_string()),
            address_country: Some(Country::preselected().label().to_string()),
            address_street: Some(Street::preselected().label().to_string()),
            address_supplement: Some(Supplement::preselected().label().to_string()),
            address_city: Some(City::preselected().label().to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// The value when it counts as entered: missing, empty and blank values are absent.
    pub fn present(&self, field: FieldName) -> Option<&str> {
        self.get(field).filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn clear(&mut self, field: FieldName) {
        *self.slot_mut(field) = None;
    }

    fn slot(&self, field: FieldName) -> &Option<String> {
        match field {
            FieldName::ContractStart => &self.contract_start,
            FieldName::FirstDate => &self.first_date,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::BirthName => &self.birth_name,
            FieldName::SocialId => &self.social_id,
            FieldName::City => &self.city,
            FieldName::Country => &self.country,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Nationality => &self.nationality,
            FieldName::AddressCountry => &self.address_country,
            FieldName::AddressStreet => &self.address_street,
            FieldName::AddressHouse => &self.address_house,
            FieldName::AddressSupplement => &self.address_supplement,
            FieldName::AddressCity => &self.address_city,
            FieldName::AddressPostCode => &self.address_post_code,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut Option<String> {
        match field {
            FieldName::ContractStart => &mut self.contract_start,
            FieldName::FirstDate => &mut self.first_date,
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::BirthName => &mut self.birth_name,
            FieldName::SocialId => &mut self.social_id,
            FieldName::City => &mut self.city,
            FieldName::Country => &mut self.country,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::Nationality => &mut self.nationality,
            FieldName::AddressCountry => &mut self.address_country,
            FieldName::AddressStreet => &mut self.address_street,
            FieldName::AddressHouse => &mut self.address_house,
            FieldName::AddressSupplement => &mut self.address_supplement,
            FieldName::AddressCity => &mut self.address_city,
            FieldName::AddressPostCode => &mut self.address_post_code,
        }
    }
}

/// Typed registration produced by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRegistration {
    pub company: CompanyData,
    pub employee: EmployeeData,
    pub address: AddressData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyData {
    pub contract_start: NaiveDate,
    /// Only set when the first day of work differs from the contract start.
    pub first_date: Option<NaiveDate>,
}

impl CompanyData {
    pub fn first_work_day(&self) -> NaiveDate {
        self.first_date.unwrap_or(self.contract_start)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub birth_name: Option<String>,
    pub social_id: Option<String>,
    pub city: City,
    pub country: Country,
    pub birth_date: NaiveDate,
    pub nationality: Nationality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub country: Country,
    pub street: Street,
    pub house: String,
    pub supplement: Option<Supplement>,
    pub city: City,
    pub post_code: String,
}
