use std::path::Path;

use crate::domain::{AppError, FormState};

/// Port for loading and saving form documents.
pub trait FormStore {
    /// Read the form document at `path`.
    fn load(&self, path: &Path) -> Result<FormState, AppError>;

    /// Write `form` to `path`, replacing any existing document.
    fn save(&self, path: &Path, form: &FormState) -> Result<(), AppError>;

    fn exists(&self, path: &Path) -> bool;
}
