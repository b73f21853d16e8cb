//! Session state: the form, both derived prompts and the status line.

use std::time::Instant;

use crate::domain::status::{COPY_FAILURE_MESSAGE, COPY_SUCCESS_MESSAGE};
use crate::domain::{FormField, FormState, StatusKind, StatusLine, StatusMessage, assemble};
use crate::ports::ClipboardWriter;

/// A state transition applied to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace one form field.
    SetField(FormField, String),
    /// Regenerate both prompts from the current form.
    Generate,
    /// Replace the localized prompt with user-edited text.
    EditLocalized(String),
    /// Restore defaults and clear every output.
    Reset,
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard rejected the write. Carries the underlying reason.
    Failed(String),
    /// No structured prompt has been generated yet.
    NothingToCopy,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FormState,
    localized_prompt: String,
    structured_prompt: String,
    status: StatusLine,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing form with no derived outputs.
    pub fn with_form(form: FormState) -> Self {
        Self { form, ..Self::default() }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn localized_prompt(&self) -> &str {
        &self.localized_prompt
    }

    pub fn structured_prompt(&self) -> &str {
        &self.structured_prompt
    }

    /// True once a prompt has been generated and not reset.
    pub fn has_output(&self) -> bool {
        !self.localized_prompt.is_empty() || !self.structured_prompt.is_empty()
    }

    /// Drop an expired status message and return what is visible at `now`.
    pub fn status(&mut self, now: Instant) -> Option<&StatusMessage> {
        self.status.tick(now);
        self.status.visible(now)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetField(field, value) => {
                self.form = std::mem::take(&mut self.form).with_field(field, value);
            }
            Action::Generate => {
                let prompts = assemble(&self.form);
                tracing::debug!(
                    localized_len = prompts.localized.len(),
                    structured_len = prompts.structured.len(),
                    "generated prompts"
                );
                self.localized_prompt = prompts.localized;
                self.structured_prompt = prompts.structured;
                self.status.clear();
            }
            Action::EditLocalized(text) => {
                self.localized_prompt = text;
            }
            Action::Reset => {
                *self = Self::default();
            }
        }
    }

    /// Copy the structured prompt and post the matching status message.
    pub fn copy_structured<C: ClipboardWriter>(
        &mut self,
        clipboard: &mut C,
        now: Instant,
    ) -> CopyOutcome {
        if self.structured_prompt.is_empty() {
            return CopyOutcome::NothingToCopy;
        }

        match clipboard.write_text(&self.structured_prompt) {
            Ok(()) => {
                self.status.post(StatusKind::Success, COPY_SUCCESS_MESSAGE, now);
                CopyOutcome::Copied
            }
            Err(err) => {
                tracing::debug!(error = %err, "clipboard write failed");
                self.status.post(StatusKind::Failure, COPY_FAILURE_MESSAGE, now);
                CopyOutcome::Failed(err.to_string())
            }
        }
    }
}
