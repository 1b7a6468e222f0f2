mod cli;
mod infra;
mod render;
pub mod session;

use onboarding_form::error::AppError;
use std::process::ExitCode;

pub use session::{Page, Session};

pub fn run() -> Result<ExitCode, AppError> {
    cli::run()
}
