use std::env;
use std::fmt;

use crate::workflows::registration::{FORM_PATH, SUCCESS_PATH};

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the onboarding front ends.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub navigation: NavigationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let form_path = route_var("APP_FORM_PATH", FORM_PATH)?;
        let success_path = route_var("APP_SUCCESS_PATH", SUCCESS_PATH)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            navigation: NavigationConfig {
                form_path,
                success_path,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn route_var(name: &'static str, default: &str) -> Result<String, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    let value = value.trim();
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidRoute {
            name,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Page paths the form navigates between.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    pub form_path: String,
    pub success_path: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRoute { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRoute { name, value } => {
                write!(f, "{name} must be an absolute path starting with '/', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
