use crate::infra::load_record;
use crate::render::{render_errors, render_schema};
use crate::session::Session;
use clap::{Args, Parser, Subcommand};
use onboarding_form::config::AppConfig;
use onboarding_form::error::AppError;
use onboarding_form::telemetry;
use onboarding_form::workflows::registration::{
    build_schema, FormController, HistoryNavigator, SubmitOutcome,
};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Exit status of a `validate` run whose record was rejected.
const REJECTED_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "onboarding",
    about = "Fill in, validate and submit the employer registration form from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the form interactively (default command)
    Form,
    /// Validate and submit a registration record stored as JSON
    Validate(ValidateArgs),
    /// Print the validation rules in force
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// JSON file keyed by field (contractStart, firstName, ...)
    record: PathBuf,
    /// Contract start and first day of work differ
    #[arg(long)]
    differs: bool,
    /// Emit the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Show the variant used when the first day of work differs
    #[arg(long)]
    differs: bool,
    /// Emit the rules as JSON
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => run_form(config),
        Command::Validate(args) => run_validate(config, args),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_form(config: AppConfig) -> Result<ExitCode, AppError> {
    info!(?config.environment, "onboarding form session started");
    let mut session = Session::new(config.navigation);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn run_validate(config: AppConfig, args: ValidateArgs) -> Result<ExitCode, AppError> {
    let ValidateArgs {
        record,
        differs,
        json,
    } = args;

    let navigator = HistoryNavigator::new(config.navigation.form_path);
    let mut controller = FormController::with_record(navigator, load_record(&record)?)
        .with_success_path(config.navigation.success_path);
    controller.set_differ(differs);

    let outcome = controller.submit();
    let mut stdout = io::stdout();
    match (&outcome, json) {
        (SubmitOutcome::Accepted { destination }, true) => {
            let body = json!({
                "status": "accepted",
                "destination": destination,
                "registration": controller.submission(),
            });
            writeln!(stdout, "{}", encode(&body)?)?;
        }
        (SubmitOutcome::Accepted { destination }, false) => {
            writeln!(stdout, "Registration accepted; navigating to {destination}")?;
        }
        (SubmitOutcome::Rejected { errors }, true) => {
            let body = json!({ "status": "rejected", "errors": errors });
            writeln!(stdout, "{}", encode(&body)?)?;
        }
        (SubmitOutcome::Rejected { errors }, false) => {
            writeln!(stdout, "Registration rejected: {} field(s) need attention", errors.len())?;
            render_errors(errors, &mut stdout)?;
        }
        (SubmitOutcome::AlreadySubmitted, _) => {}
    }

    if outcome.is_accepted() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(REJECTED_EXIT))
    }
}

fn run_schema(args: SchemaArgs) -> Result<ExitCode, AppError> {
    let rules = build_schema(args.differs);
    let mut stdout = io::stdout();
    if args.json {
        let body = serde_json::to_value(&rules).map_err(AppError::Output)?;
        writeln!(stdout, "{}", encode(&body)?)?;
    } else {
        render_schema(&rules, &mut stdout)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Pretty JSON for stdout. Failures here are ours, not the record's.
fn encode(body: &serde_json::Value) -> Result<String, AppError> {
    serde_json::to_string_pretty(body).map_err(AppError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_flags() {
        let cli = Cli::try_parse_from(["onboarding", "validate", "record.json", "--differs"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Validate(args)) => {
                assert_eq!(args.record, PathBuf::from("record.json"));
                assert!(args.differs);
                assert!(!args.json);
            }
            other => panic!("expected validate command, got {other:?}"),
        }
    }

    #[test]
    fn schema_output_is_pretty_json() {
        let rules = serde_json::to_value(build_schema(true)).expect("rules serialize");
        let text = encode(&rules).expect("encodes");
        assert!(text.contains('\n'));
        let reparsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(reparsed, rules);
    }

    #[test]
    fn defaults_to_the_interactive_form() {
        let cli = Cli::try_parse_from(["onboarding"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
