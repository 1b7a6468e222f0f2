use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::registration::{FormClosed, UnknownField};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Record(serde_json::Error),
    /// Encoding a result for output failed; the input itself was fine.
    Output(serde_json::Error),
    Field(UnknownField),
    Form(FormClosed),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Record(err) => write!(f, "invalid registration record: {}", err),
            AppError::Output(err) => write!(f, "failed to encode output: {}", err),
            AppError::Field(err) => write!(f, "{}", err),
            AppError::Form(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Record(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::Field(err) => Some(err),
            AppError::Form(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Record(value)
    }
}

impl From<UnknownField> for AppError {
    fn from(value: UnknownField) -> Self {
        Self::Field(value)
    }
}

impl From<FormClosed> for AppError {
    fn from(value: FormClosed) -> Self {
        Self::Form(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn decode_failures_blame_the_record() {
        let err = AppError::from(json_error());
        assert!(matches!(err, AppError::Record(_)));
        assert!(err.to_string().starts_with("invalid registration record: "));
    }

    #[test]
    fn encode_failures_are_not_reported_as_bad_input() {
        let err = AppError::Output(json_error());
        let message = err.to_string();
        assert!(message.starts_with("failed to encode output: "));
        assert!(!message.contains("registration record"));
        assert!(err.source().is_some());
    }
}
