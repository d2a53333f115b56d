//! Configuration validation.

use url::Url;

use crate::schema::{Config, OUTPUT_FORMATS};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_output(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        let base_url = &config.server.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "server.base_url",
                "base_url must start with http:// or https://",
            ));
            return;
        }

        match Url::parse(base_url) {
            Ok(url) => {
                if url.query().is_some() {
                    result.add_warning(ValidationWarning::new(
                        "server.base_url",
                        "query string on base_url is ignored",
                    ));
                }
            }
            Err(e) => {
                result.add_error(ValidationError::new(
                    "server.base_url",
                    format!("invalid URL: {}", e),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        if !config.logging.file && config.logging.dir.is_some() {
            result.add_warning(ValidationWarning::new(
                "logging.dir",
                "logging.dir is set but file logging is disabled",
            ));
        }
    }

    fn validate_output(config: &Config, result: &mut ValidationResult) {
        if !OUTPUT_FORMATS.contains(&config.output.format.as_str()) {
            result.add_warning(ValidationWarning::new(
                "output.format",
                format!(
                    "Unknown output format '{}', valid values: {:?}",
                    config.output.format, OUTPUT_FORMATS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
