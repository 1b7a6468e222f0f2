//! Employer registration form: field catalogue, toggle-driven schema,
//! validation, and the controller that submits and navigates.

pub mod controller;
pub mod domain;
pub mod fields;
pub mod navigation;
pub mod options;
pub mod schema;
pub mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use controller::{FormClosed, FormController, FormState, SubmitOutcome};
pub use domain::{
    AddressData, CompanyData, EmployeeData, RegistrationRecord, ValidatedRegistration,
};
pub use fields::{FieldName, FormSection, UnknownField};
pub use navigation::{HistoryNavigator, Navigator, FORM_PATH, SUCCESS_PATH};
pub use options::{ChoiceOption, City, Country, Nationality, Street, Supplement};
pub use schema::{build_schema, FieldKind, FieldRule, FieldRules, SchemaVariant};
pub use validation::{check_field, validate, validate_into, FieldError, FieldErrors};
pub use views::{ConfirmationView, ControlView, FieldView, FormView, SectionView, ToggleView};
