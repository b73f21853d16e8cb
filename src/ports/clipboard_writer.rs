use crate::domain::AppError;

/// Destination for the structured prompt when the user asks to copy it.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`, verbatim.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
