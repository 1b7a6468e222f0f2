use onboarding_form::workflows::registration::{
    ConfirmationView, ControlView, FieldErrors, FieldKind, FieldName, FieldRules, FieldView,
    FormView,
};
use std::io::{self, Write};

pub(crate) fn render_form(view: &FormView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "[ {} ]", view.registration_kind)?;

    for section in &view.sections {
        writeln!(out, "\n== {} ==", section.title)?;
        for field in &section.fields {
            render_field(field, out)?;
            // The switch sits right under the contract start input.
            if field.field == FieldName::ContractStart {
                if let Some(toggle) = &section.toggle {
                    let mark = if toggle.checked { "x" } else { " " };
                    writeln!(out, "  [{mark}] {}", toggle.label)?;
                }
            }
        }
    }

    writeln!(out, "\n< {} >", view.submit_label)
}

fn render_field(field: &FieldView, out: &mut impl Write) -> io::Result<()> {
    let marker = if field.required { " *" } else { "" };
    let control = match &field.control {
        ControlView::Text => "text".to_string(),
        ControlView::Date => "date".to_string(),
        ControlView::Choice { options } => options.join(" | "),
    };
    let value = field.value.as_deref().unwrap_or("-");

    writeln!(
        out,
        "  {}{} [{}] ({}): {}",
        field.label,
        marker,
        field.field.key(),
        control,
        value
    )?;
    if let Some(error) = &field.error {
        writeln!(out, "      ! {error}")?;
    }
    Ok(())
}

pub(crate) fn render_confirmation(view: &ConfirmationView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n(v) {}", view.title)?;
    for line in view.lines {
        writeln!(out, "    {line}")?;
    }
    writeln!(out, "\n< {} >  (type 'back')", view.action_label)
}

pub(crate) fn render_errors(errors: &FieldErrors, out: &mut impl Write) -> io::Result<()> {
    for (field, error) in errors.iter() {
        writeln!(out, "- {} ({}): {}", field.label(), field.key(), error)?;
    }
    Ok(())
}

pub(crate) fn render_schema(rules: &FieldRules, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Schema variant: {}", rules.variant().label())?;
    for (field, rule) in rules.iter() {
        let presence = if rule.required { "required" } else { "optional" };
        let kind = match rule.kind {
            FieldKind::Text => "text".to_string(),
            FieldKind::Date => "date".to_string(),
            FieldKind::Choice(options) => format!("one of {}", options.join(", ")),
        };
        let length = match (rule.min_len, rule.max_len) {
            (Some(min), Some(max)) => format!(", length {min}-{max}"),
            (Some(min), None) => format!(", min length {min}"),
            (None, Some(max)) => format!(", max length {max}"),
            (None, None) => String::new(),
        };
        writeln!(out, "- {}: {presence} {kind}{length}", field.key())?;
    }
    Ok(())
}
