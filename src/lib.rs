//! veo-prompt: assemble localized and structured text-to-video prompts from
//! scene description fields.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;
use app::commands::{generate, init_form};
use services::{ArboardClipboardWriter, FilesystemFormStore};

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use app::{Action, CopyOutcome, Session};
pub use domain::{AppError, FormField, FormState, GeneratedPrompts, OutputFormat, assemble};

/// Generate prompts from a form document and `key=value` assignments.
///
/// When `options.copy` is set, the structured prompt is copied to the system
/// clipboard. A failed copy is reported in the outcome, not as an error.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let mut ctx = AppContext::new(FilesystemFormStore::new(), ArboardClipboardWriter::new());
    generate::execute(&mut ctx, options)
}

/// Write a default form document to `path`.
pub fn init_form(path: &Path, force: bool) -> Result<(), AppError> {
    init_form::execute(&FilesystemFormStore::new(), path, force)
}
