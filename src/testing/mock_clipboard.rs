use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    pub written_text: Option<String>,
    pub should_fail: bool,
    pub writes: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.writes += 1;
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.written_text = Some(text.to_string());
        Ok(())
    }
}
