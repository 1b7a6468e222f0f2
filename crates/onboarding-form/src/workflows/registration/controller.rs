use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{RegistrationRecord, ValidatedRegistration};
use super::fields::FieldName;
use super::navigation::{Navigator, SUCCESS_PATH};
use super::schema::{FieldRules, SchemaVariant};
use super::validation::{check_field, collect_errors, validate_into, FieldErrors};

/// Lifecycle of one form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Editing,
    /// Terminal; reached only through a successful submit.
    Submitted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { destination: String },
    Rejected { errors: FieldErrors },
    AlreadySubmitted,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Raised when a submitted form receives further edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("form already submitted; field '{field}' can no longer be edited")]
pub struct FormClosed {
    pub field: FieldName,
}

/// Owns the field values, the toggle and the error mapping of one session.
pub struct FormController<N: Navigator> {
    navigator: N,
    success_path: String,
    record: RegistrationRecord,
    schema: FieldRules,
    errors: FieldErrors,
    state: FormState,
    submit_attempted: bool,
    submission: Option<ValidatedRegistration>,
}

impl<N: Navigator> FormController<N> {
    /// Fresh session with choice controls preselected and the toggle off.
    pub fn new(navigator: N) -> Self {
        Self::with_record(navigator, RegistrationRecord::with_choice_defaults())
    }

    pub fn with_record(navigator: N, record: RegistrationRecord) -> Self {
        Self {
            navigator,
            success_path: SUCCESS_PATH.to_string(),
            record,
            schema: SchemaVariant::SameDayStart.schema(),
            errors: FieldErrors::default(),
            state: FormState::Editing,
            submit_attempted: false,
            submission: None,
        }
    }

    pub fn with_success_path(mut self, path: impl Into<String>) -> Self {
        self.success_path = path.into();
        self
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn differs(&self) -> bool {
        self.schema.variant().differs()
    }

    /// Rule set currently in force.
    pub fn schema(&self) -> &FieldRules {
        &self.schema
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> Option<&ValidatedRegistration> {
        self.submission.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// End the session and hand the router back, e.g. to remount the form.
    pub fn into_navigator(self) -> N {
        self.navigator
    }

    pub fn success_path(&self) -> &str {
        &self.success_path
    }

    /// Switch the schema variant. Entered values are not re-validated.
    pub fn set_differ(&mut self, differs: bool) {
        let variant = SchemaVariant::from_differs(differs);
        if variant == self.schema.variant() {
            return;
        }
        self.schema = variant.schema();
        debug!(variant = variant.label(), "schema variant switched");
    }

    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), FormClosed> {
        self.ensure_editing(field)?;
        self.record.set(field, value);
        debug!(field = field.key(), "field edited");
        self.revalidate(field);
        Ok(())
    }

    pub fn clear_field(&mut self, field: FieldName) -> Result<(), FormClosed> {
        self.ensure_editing(field)?;
        self.record.clear(field);
        debug!(field = field.key(), "field cleared");
        self.revalidate(field);
        Ok(())
    }

    /// Replace every value at once, as when a whole record is handed over.
    pub fn load(&mut self, record: RegistrationRecord) -> Result<(), FormClosed> {
        self.ensure_editing(FieldName::ContractStart)?;
        self.record = record;
        // Every value changed, so every error slot is stale.
        if self.submit_attempted {
            self.errors = collect_errors(&self.record, &self.schema);
        } else {
            self.errors.clear();
        }
        debug!(error_count = self.errors.len(), "record loaded");
        Ok(())
    }

    /// Validate the current values against the active schema without side effects.
    pub fn validate(&self) -> Result<ValidatedRegistration, FieldErrors> {
        validate_into(&self.record, &self.schema)
    }

    /// Validate, then navigate on success or publish errors on failure.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == FormState::Submitted {
            warn!("submit ignored: form already submitted");
            return SubmitOutcome::AlreadySubmitted;
        }

        self.submit_attempted = true;
        match self.validate() {
            Ok(registration) => {
                self.errors.clear();
                self.submission = Some(registration);
                self.state = FormState::Submitted;
                self.navigator.push(&self.success_path);
                info!(
                    variant = self.schema.variant().label(),
                    destination = %self.success_path,
                    "registration submitted"
                );
                SubmitOutcome::Accepted {
                    destination: self.success_path.clone(),
                }
            }
            Err(errors) => {
                warn!(error_count = errors.len(), "registration rejected");
                self.errors = errors.clone();
                SubmitOutcome::Rejected { errors }
            }
        }
    }

    fn ensure_editing(&self, field: FieldName) -> Result<(), FormClosed> {
        match self.state {
            FormState::Editing => Ok(()),
            FormState::Submitted => Err(FormClosed { field }),
        }
    }

    /// After the first submit attempt, an edited field is re-checked on its own.
    fn revalidate(&mut self, field: FieldName) {
        if !self.submit_attempted {
            return;
        }
        match check_field(&self.schema.rule(field), self.record.get(field)) {
            Ok(()) => self.errors.remove(field),
            Err(error) => self.errors.insert(field, error),
        }
    }
}
