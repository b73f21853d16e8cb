//! User configuration loaded from `config.toml`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::AppError;

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How `generate` prints its result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    /// Copy the structured prompt after generating.
    #[serde(default)]
    pub copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter directive used when neither `RUST_LOG` nor `-v` is set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Rendering of a `generate` result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Both prompts with headings, notes and footer.
    #[default]
    Text,
    /// Both prompts as a JSON object.
    Json,
    /// Only the localized prompt.
    Localized,
    /// Only the structured prompt.
    Structured,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] =
        [OutputFormat::Text, OutputFormat::Json, OutputFormat::Localized, OutputFormat::Structured];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Localized => "localized",
            OutputFormat::Structured => "structured",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OutputFormat::ALL.into_iter().find(|format| format.name() == wanted).ok_or_else(|| {
            AppError::config_error(format!(
                "Unknown output format '{}': expected text, json, localized or structured",
                s
            ))
        })
    }
}

/// Parse `config.toml` content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}
