use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, FormDocumentFormat, FormState};
use crate::ports::FormStore;

/// In-memory form store keyed by path. Documents are kept serialized so that
/// format detection and parsing run exactly as they do on disk.
#[derive(Default)]
pub struct MemoryFormStore {
    documents: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: &str, content: &str) -> Self {
        self.documents.borrow_mut().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn document(&self, path: &str) -> Option<String> {
        self.documents.borrow().get(Path::new(path)).cloned()
    }
}

impl FormStore for MemoryFormStore {
    fn load(&self, path: &Path) -> Result<FormState, AppError> {
        let format = FormDocumentFormat::from_path(path)?;
        let documents = self.documents.borrow();
        let content = documents.get(path).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        })?;
        format.parse(content)
    }

    fn save(&self, path: &Path, form: &FormState) -> Result<(), AppError> {
        let content = FormDocumentFormat::from_path(path)?.serialize(form)?;
        self.documents.borrow_mut().insert(path.to_path_buf(), content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.documents.borrow().contains_key(path)
    }
}
