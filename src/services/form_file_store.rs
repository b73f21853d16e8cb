use std::fs;
use std::path::Path;

use crate::domain::{AppError, FormDocumentFormat, FormState};
use crate::ports::FormStore;

/// Filesystem-backed form document store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemFormStore;

impl FilesystemFormStore {
    pub fn new() -> Self {
        Self
    }
}

impl FormStore for FilesystemFormStore {
    fn load(&self, path: &Path) -> Result<FormState, AppError> {
        let format = FormDocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        format.parse(&content)
    }

    fn save(&self, path: &Path, form: &FormState) -> Result<(), AppError> {
        let format = FormDocumentFormat::from_path(path)?;
        let content = format.serialize(form)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormField;
    use tempfile::TempDir;

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenes/terminal.yaml");
        let store = FilesystemFormStore::new();
        let form = FormState::default().with_field(FormField::SceneTitle, "Terminal");

        store.save(&path, &form).unwrap();

        assert!(store.exists(&path));
        assert_eq!(store.load(&path).unwrap(), form);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemFormStore::new().load(&dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn unsupported_extension_is_rejected_before_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.txt");
        let err = FilesystemFormStore::new().save(&path, &FormState::default()).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormFormat(_)));
        assert!(!path.exists());
    }
}
