use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "supportedCultures[0]")
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
    pub host: String,
    pub port: u16,

    /// Fallback when a request carries no usable culture.
    pub default_culture: String,

    /// Cultures eligible for request negotiation. The translation catalog
    /// only covers a subset of these; the rest fall back to raw keys.
    pub supported_cultures: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            default_culture: "en-US".to_string(),
            supported_cultures: ["en-US", "it-IT", "ja-JP", "nl-NL", "ru-RU", "sv-SE", "tr-TR"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Settings {
    /// # Errors
    /// - Supported culture list is empty
    /// - Default culture is not in the supported list
    /// - A culture tag is not shaped like `ll-CC`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.supported_cultures.is_empty() {
            errors.push(ValidationError::new(
                "supportedCultures",
                "At least one culture is required. Example: [\"en-US\"]",
            ));
        }

        for (index, tag) in self.supported_cultures.iter().enumerate() {
            if !is_culture_tag(tag) {
                errors.push(ValidationError::new(
                    format!("supportedCultures[{index}]"),
                    format!("Invalid culture tag '{tag}'. Expected a tag like \"sv-SE\""),
                ));
            }
        }

        if !self
            .supported_cultures
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(&self.default_culture))
        {
            errors.push(ValidationError::new(
                "defaultCulture",
                format!(
                    "Default culture '{}' must be one of the supported cultures",
                    self.default_culture
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A tag like `sv-SE`: two lowercase letters, a hyphen, two uppercase letters.
fn is_culture_tag(tag: &str) -> bool {
    let Some((language, region)) = tag.split_once('-') else {
        return false;
    };

    language.len() == 2
        && language.chars().all(|c| c.is_ascii_lowercase())
        && region.len() == 2
        && region.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = Settings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"port": 8080}"#;

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.port, eq(8080));
        assert_that!(settings.host, eq("127.0.0.1"));
        assert_that!(settings.default_culture, eq("en-US"));
        assert_that!(settings.supported_cultures, len(eq(7)));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_culture, eq("en-US"));
        assert_that!(settings.supported_cultures, contains(eq("sv-SE")));
    }

    #[rstest]
    fn validate_invalid_supported_cultures_empty() {
        let settings = Settings { supported_cultures: vec![], ..Settings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(contains(all![
                field!(ValidationError.field_path, eq("supportedCultures")),
                field!(ValidationError.message, contains_substring("At least one culture"))
            ]))
        );
    }

    #[rstest]
    #[case::bare_language("sv")]
    #[case::wrong_case("SV-se")]
    #[case::underscore("sv_SE")]
    #[case::empty("")]
    fn validate_invalid_culture_tag(#[case] tag: &str) {
        let settings = Settings {
            supported_cultures: vec!["en-US".to_string(), tag.to_string()],
            ..Settings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("supportedCultures[1]")),
                field!(ValidationError.message, contains_substring("Invalid culture tag"))
            ]])
        );
    }

    #[rstest]
    fn validate_default_culture_must_be_supported() {
        let settings = Settings {
            default_culture: "de-DE".to_string(),
            ..Settings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultCulture")),
                field!(ValidationError.message, contains_substring("must be one of"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = Settings {
            default_culture: "de-DE".to_string(),
            supported_cultures: vec![],
            ..Settings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. supportedCultures"));
        assert_that!(error_message, contains_substring("2. defaultCulture"));
    }
}
