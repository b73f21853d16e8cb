use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// The system clipboard is opened on first write so that commands which never
/// copy work on machines without a display.
#[derive(Default)]
pub struct ArboardClipboardWriter {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboardWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::ClipboardError(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("clipboard unavailable".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard()?.set_text(text).map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
