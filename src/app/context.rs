use crate::ports::{ClipboardWriter, FormStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: FormStore, C: ClipboardWriter> {
    forms: S,
    clipboard: C,
}

impl<S: FormStore, C: ClipboardWriter> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(forms: S, clipboard: C) -> Self {
        Self { forms, clipboard }
    }

    /// Get a reference to the form document store.
    pub fn forms(&self) -> &S {
        &self.forms
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
