use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical grouping of the form, rendered as one card per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    Company,
    Employee,
    Address,
}

impl FormSection {
    pub const fn ordered() -> [Self; 3] {
        [Self::Company, Self::Employee, Self::Address]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Company => "Company data",
            Self::Employee => "Employee data",
            Self::Address => "Address details",
        }
    }
}

/// The sixteen fields of a registration record, in rendering order.
///
/// The derived ordering follows declaration order so error mappings keyed by
/// field read top to bottom like the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ContractStart,
    FirstDate,
    FirstName,
    LastName,
    BirthName,
    SocialId,
    City,
    Country,
    BirthDate,
    Nationality,
    AddressCountry,
    AddressStreet,
    AddressHouse,
    AddressSupplement,
    AddressCity,
    AddressPostCode,
}

impl FieldName {
    pub const ALL: [Self; 16] = [
        Self::ContractStart,
        Self::FirstDate,
        Self::FirstName,
        Self::LastName,
        Self::BirthName,
        Self::SocialId,
        Self::City,
        Self::Country,
        Self::BirthDate,
        Self::Nationality,
        Self::AddressCountry,
        Self::AddressStreet,
        Self::AddressHouse,
        Self::AddressSupplement,
        Self::AddressCity,
        Self::AddressPostCode,
    ];

    /// Key the field is registered under, shared by JSON records and the terminal.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ContractStart => "contractStart",
            Self::FirstDate => "firstDate",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::BirthName => "birthName",
            Self::SocialId => "socialId",
            Self::City => "city",
            Self::Country => "country",
            Self::BirthDate => "birthDate",
            Self::Nationality => "nationality",
            Self::AddressCountry => "addressCountry",
            Self::AddressStreet => "addressStreet",
            Self::AddressHouse => "addressHouse",
            Self::AddressSupplement => "addressSupplement",
            Self::AddressCity => "addressCity",
            Self::AddressPostCode => "addressPostCode",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ContractStart => "Contract start",
            Self::FirstDate => "First day of work",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::BirthName => "Given birth name",
            Self::SocialId => "Social ID",
            Self::City => "City of birth",
            Self::Country => "Country of birth",
            Self::BirthDate => "Birthdate",
            Self::Nationality => "Nationality",
            Self::AddressCountry => "Country",
            Self::AddressStreet => "Street",
            Self::AddressHouse => "House number",
            Self::AddressSupplement => "Address supplement",
            Self::AddressCity => "City",
            Self::AddressPostCode => "Post code",
        }
    }

    pub const fn section(self) -> FormSection {
        match self {
            Self::ContractStart | Self::FirstDate => FormSection::Company,
            Self::FirstName
            | Self::LastName
            | Self::BirthName
            | Self::SocialId
            | Self::City
            | Self::Country
            | Self::BirthDate
            | Self::Nationality => FormSection::Employee,
            Self::AddressCountry
            | Self::AddressStreet
            | Self::AddressHouse
            | Self::AddressSupplement
            | Self::AddressCity
            | Self::AddressPostCode => FormSection::Address,
        }
    }

    pub fn in_section(section: FormSection) -> impl Iterator<Item = FieldName> {
        Self::ALL
            .into_iter()
            .filter(move |field| field.section() == section)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raised when a field key does not name one of the registration fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    /// Accepts the camelCase key, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownField(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for field in FieldName::ALL {
            assert_eq!(field.key().parse::<FieldName>(), Ok(field));
        }
        assert_eq!(
            "ADDRESSPOSTCODE".parse::<FieldName>(),
            Ok(FieldName::AddressPostCode)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "middleName".parse::<FieldName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown form field 'middleName'");
    }

    #[test]
    fn sections_partition_the_fields() {
        let counts: Vec<usize> = FormSection::ordered()
            .into_iter()
            .map(|section| FieldName::in_section(section).count())
            .collect();
        assert_eq!(counts, vec![2, 8, 6]);
    }
}
