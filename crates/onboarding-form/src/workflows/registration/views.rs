use serde::Serialize;

use super::controller::FormController;
use super::fields::{FieldName, FormSection};
use super::navigation::Navigator;
use super::schema::FieldKind;

/// Caption of the registration type shown beside the form.
pub const REGISTRATION_KIND: &str = "Immediate registration";
/// Label of the toggle switch in the company section.
pub const DIFFER_TOGGLE_LABEL: &str = "Contract start and first day of work differ";
pub const SUBMIT_LABEL: &str = "Submit";

/// Input control bound to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "control")]
pub enum ControlView {
    Text,
    Date,
    Choice { options: Vec<&'static str> },
}

/// One field as rendered: label, required marker, control, value and error slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: FieldName,
    pub label: &'static str,
    pub required: bool,
    pub control: ControlView,
    pub value: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub section: FormSection,
    pub title: &'static str,
    /// Present only on the company section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<ToggleView>,
    pub fields: Vec<FieldView>,
}

/// Snapshot of the whole form page, bound one-way from controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub registration_kind: &'static str,
    pub sections: Vec<SectionView>,
    pub submit_label: &'static str,
}

impl FormView {
    pub fn build<N: Navigator>(controller: &FormController<N>) -> Self {
        let differs = controller.differs();
        let sections = FormSection::ordered()
            .into_iter()
            .map(|section| SectionView {
                section,
                title: section.title(),
                toggle: (section == FormSection::Company).then_some(ToggleView {
                    label: DIFFER_TOGGLE_LABEL,
                    checked: differs,
                }),
                fields: FieldName::in_section(section)
                    // The first-day input only exists while the toggle is on.
                    .filter(|field| differs || *field != FieldName::FirstDate)
                    .map(|field| field_view(controller, field))
                    .collect(),
            })
            .collect();

        Self {
            registration_kind: REGISTRATION_KIND,
            sections,
            submit_label: SUBMIT_LABEL,
        }
    }

    pub fn field(&self, field: FieldName) -> Option<&FieldView> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|view| view.field == field)
    }
}

fn field_view<N: Navigator>(controller: &FormController<N>, field: FieldName) -> FieldView {
    let rule = controller.schema().rule(field);
    let control = match rule.kind {
        FieldKind::Text => ControlView::Text,
        FieldKind::Date => ControlView::Date,
        FieldKind::Choice(options) => ControlView::Choice {
            options: options.to_vec(),
        },
    };

    FieldView {
        field,
        label: field.label(),
        required: rule.required,
        control,
        value: controller.record().get(field).map(str::to_string),
        error: controller.errors().message(field),
    }
}

/// Page shown after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub title: &'static str,
    pub lines: [&'static str; 2],
    pub action_label: &'static str,
}

impl ConfirmationView {
    pub fn new() -> Self {
        Self {
            title: "Data is submitted",
            lines: [
                "Your data is successfully submitted to the employer.",
                "We will notify you about next steps",
            ],
            action_label: "Logout and back",
        }
    }

    /// The confirmation page's only action: return to the previous page.
    pub fn back<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.back();
    }
}

impl Default for ConfirmationView {
    fn default() -> Self {
        Self::new()
    }
}
