//! Form documents: a `FormState` serialized as TOML, YAML or JSON.

use std::path::Path;

use crate::domain::{AppError, FormState};

/// Serialization chosen from a form document's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDocumentFormat {
    Toml,
    Yaml,
    Json,
}

impl FormDocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension =
            path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_lowercase());
        match extension.as_deref() {
            Some("toml") => Ok(FormDocumentFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FormDocumentFormat::Yaml),
            Some("json") => Ok(FormDocumentFormat::Json),
            _ => Err(AppError::UnsupportedFormFormat(path.display().to_string())),
        }
    }

    pub fn parse(&self, content: &str) -> Result<FormState, AppError> {
        match self {
            FormDocumentFormat::Toml => {
                toml::from_str(content).map_err(|e| AppError::parse_error("form document", e))
            }
            FormDocumentFormat::Yaml => {
                // An empty YAML document means "all defaults".
                if content.trim().is_empty() {
                    return Ok(FormState::default());
                }
                serde_yaml::from_str(content).map_err(|e| AppError::parse_error("form document", e))
            }
            FormDocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| AppError::parse_error("form document", e))
            }
        }
    }

    pub fn serialize(&self, form: &FormState) -> Result<String, AppError> {
        match self {
            FormDocumentFormat::Toml => {
                toml::to_string_pretty(form).map_err(|e| AppError::parse_error("form state", e))
            }
            FormDocumentFormat::Yaml => {
                serde_yaml::to_string(form).map_err(|e| AppError::parse_error("form state", e))
            }
            FormDocumentFormat::Json => serde_json::to_string_pretty(form)
                .map(|json| json + "\n")
                .map_err(|e| AppError::parse_error("form state", e)),
        }
    }
}
