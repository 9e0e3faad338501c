use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::provider::DEFAULT_MAX_TRANSLATION_LENGTH;

/// Accepted values of `log.level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "log.level")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Messages document, relative to the workspace root.
    pub document: String,

    /// Longest translation the in-memory provider accepts, in characters.
    pub max_translation_length: usize,

    /// Selector label of the native (untranslated) view.
    pub none_label: String,

    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` still takes precedence.
    pub level: String,

    /// Write logs to daily files in this directory instead of stderr.
    pub directory: Option<String>,
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Zero translation length limit
    /// - Unknown log level
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.document.trim().is_empty() {
            errors.push(ValidationError::new(
                "document",
                "The document path cannot be empty. Example: \"messages.json\"",
            ));
        }

        if self.max_translation_length == 0 {
            errors.push(ValidationError::new(
                "maxTranslationLength",
                "The limit must be greater than zero",
            ));
        }

        if self.none_label.is_empty() {
            errors.push(ValidationError::new(
                "noneLabel",
                "The label cannot be empty. Example: \"<None>\"",
            ));
        }

        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            errors.push(ValidationError::new(
                "log.level",
                format!(
                    "Unknown log level '{}'. Expected one of: {}",
                    self.log.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        if let Some(directory) = &self.log.directory
            && directory.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "log.directory",
                "The directory cannot be empty. Specify a path, or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            document: "messages.json".to_string(),
            max_translation_length: DEFAULT_MAX_TRANSLATION_LENGTH,
            none_label: "<None>".to_string(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), directory: None }
    }
}
