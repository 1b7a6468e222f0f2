//! Line-driven form session: each input line is one user event, processed
//! to completion before the next one is read.

use crate::render::{render_confirmation, render_errors, render_form};
use onboarding_form::config::NavigationConfig;
use onboarding_form::workflows::registration::{
    ConfirmationView, FieldName, FormController, FormView, HistoryNavigator, Navigator,
    SubmitOutcome,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  show                    render the current page
  set <field> <value>     enter a value (field keys are shown in brackets)
  clear <field>           empty a field
  differ on|off           contract start and first day of work differ
  options <field>         list the allowed values of a choice field
  submit                  validate and submit the form
  back                    leave the confirmation page
  help                    show this help
  quit                    end the session";

/// Page the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Form,
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Show,
    Set { field: String, value: String },
    Clear { field: String },
    Differ(bool),
    Options { field: String },
    Submit,
    Back,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "show" | "" => SessionCommand::Show,
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            SessionCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "clear" => SessionCommand::Clear {
            field: required_arg(rest, "usage: clear <field>")?,
        },
        "differ" => match rest.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" => SessionCommand::Differ(true),
            "off" | "no" | "false" => SessionCommand::Differ(false),
            _ => return Err("usage: differ on|off".to_string()),
        },
        "options" => SessionCommand::Options {
            field: required_arg(rest, "usage: options <field>")?,
        },
        "submit" => SessionCommand::Submit,
        "back" => SessionCommand::Back,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{other}' (type 'help')")),
    };
    Ok(command)
}

fn required_arg(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(usage.to_string())
    } else {
        Ok(rest.to_string())
    }
}

/// One user's pass through the form and confirmation pages.
pub struct Session {
    controller: Option<FormController<HistoryNavigator>>,
    navigation: NavigationConfig,
    page: Page,
}

impl Session {
    pub fn new(navigation: NavigationConfig) -> Self {
        let navigator = HistoryNavigator::new(navigation.form_path.clone());
        let controller = mount_form(navigator, &navigation);
        Self {
            controller: Some(controller),
            navigation,
            page: Page::Form,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn controller(&self) -> Option<&FormController<HistoryNavigator>> {
        self.controller.as_ref()
    }

    /// Process events until input ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.render(out)?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.handle(command, out)?,
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        debug!(page = ?self.page, "session ended");
        Ok(())
    }

    fn handle<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<()> {
        match (self.page, command) {
            (_, SessionCommand::Show) => self.render(out),
            (_, SessionCommand::Help) => writeln!(out, "{HELP}"),
            (Page::Confirmation, SessionCommand::Back) => self.back(out),
            (Page::Form, SessionCommand::Back) => writeln!(out, "nothing to go back to"),
            (Page::Form, SessionCommand::Set { field, value }) => {
                self.edit(&field, out, |controller, field| controller.set_field(field, value))
            }
            (Page::Form, SessionCommand::Clear { field }) => {
                self.edit(&field, out, |controller, field| controller.clear_field(field))
            }
            (Page::Form, SessionCommand::Differ(differs)) => {
                if let Some(controller) = self.controller.as_mut() {
                    controller.set_differ(differs);
                }
                self.render(out)
            }
            (Page::Form, SessionCommand::Options { field }) => self.options(&field, out),
            (Page::Form, SessionCommand::Submit) => self.submit(out),
            (Page::Confirmation, _) => {
                writeln!(out, "the form is submitted; type 'back' to return")
            }
            (_, SessionCommand::Quit) => Ok(()),
        }
    }

    fn edit<W, F, E>(&mut self, key: &str, out: &mut W, apply: F) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut FormController<HistoryNavigator>, FieldName) -> Result<(), E>,
        E: std::fmt::Display,
    {
        let field = match key.parse::<FieldName>() {
            Ok(field) => field,
            Err(err) => return writeln!(out, "{err}"),
        };
        let Some(controller) = self.controller.as_mut() else {
            return Ok(());
        };
        if let Err(err) = apply(&mut *controller, field) {
            return writeln!(out, "{err}");
        }
        match controller.errors().message(field) {
            Some(message) => writeln!(out, "{}: {message}", field.label()),
            None => writeln!(out, "{}: saved", field.label()),
        }
    }

    fn options<W: Write>(&self, key: &str, out: &mut W) -> io::Result<()> {
        let field = match key.parse::<FieldName>() {
            Ok(field) => field,
            Err(err) => return writeln!(out, "{err}"),
        };
        let Some(controller) = self.controller.as_ref() else {
            return Ok(());
        };
        let options = controller.schema().rule(field).options();
        if options.is_empty() {
            writeln!(out, "{} is not a choice field", field.label())
        } else {
            writeln!(out, "{}: {}", field.label(), options.join(", "))
        }
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(controller) = self.controller.as_mut() else {
            return Ok(());
        };
        match controller.submit() {
            SubmitOutcome::Accepted { destination } => {
                info!(%destination, "form page left");
                self.page = Page::Confirmation;
                self.render(out)
            }
            SubmitOutcome::Rejected { errors } => {
                writeln!(out, "{} field(s) need attention:", errors.len())?;
                render_errors(&errors, out)
            }
            SubmitOutcome::AlreadySubmitted => writeln!(out, "already submitted"),
        }
    }

    fn back<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(controller) = self.controller.take() else {
            return Ok(());
        };
        let mut navigator = controller.into_navigator();
        ConfirmationView::new().back(&mut navigator);

        // Returning to the form page mounts a fresh, empty form.
        if navigator.current() == self.navigation.form_path {
            self.page = Page::Form;
        }
        self.controller = Some(mount_form(navigator, &self.navigation));
        self.render(out)
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match (self.page, self.controller.as_ref()) {
            (Page::Form, Some(controller)) => render_form(&FormView::build(controller), out),
            (Page::Confirmation, _) => render_confirmation(&ConfirmationView::new(), out),
            (Page::Form, None) => Ok(()),
        }
    }
}

fn mount_form(
    navigator: HistoryNavigator,
    navigation: &NavigationConfig,
) -> FormController<HistoryNavigator> {
    FormController::new(navigator).with_success_path(navigation.success_path.clone())
}
