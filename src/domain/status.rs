//! Transient status line with timed auto-clear.

use std::time::{Duration, Instant};

/// How long a status message stays visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(2);

pub const COPY_SUCCESS_MESSAGE: &str = "Prompt Veo 3 (Format Final) Tersalin!";
pub const COPY_FAILURE_MESSAGE: &str = "Gagal menyalin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    posted_at: Instant,
}

impl StatusMessage {
    /// Instant at which the message clears itself.
    pub fn expires_at(&self) -> Instant {
        self.posted_at + STATUS_CLEAR_DELAY
    }
}

/// Holds at most one status message. Posting supersedes the previous one
/// and restarts the delay.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    /// Post a message at `now`, replacing whatever was shown.
    pub fn post(&mut self, kind: StatusKind, text: impl Into<String>, now: Instant) {
        self.current = Some(StatusMessage { kind, text: text.into(), posted_at: now });
    }

    /// Clear the current message if its delay has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(message) if now >= message.expires_at() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The message visible at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|message| now < message.expires_at())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_visible_until_delay_elapses() {
        let start = Instant::now();
        let mut line = StatusLine::default();
        line.post(StatusKind::Success, COPY_SUCCESS_MESSAGE, start);

        let visible = line.visible(start + Duration::from_millis(1999)).map(|m| m.text.as_str());
        assert_eq!(visible, Some(COPY_SUCCESS_MESSAGE));
        assert!(line.visible(start + STATUS_CLEAR_DELAY).is_none());
    }

    #[test]
    fn tick_clears_only_expired_messages() {
        let start = Instant::now();
        let mut line = StatusLine::default();
        line.post(StatusKind::Failure, COPY_FAILURE_MESSAGE, start);

        assert!(!line.tick(start + Duration::from_secs(1)));
        assert!(!line.is_empty());
        assert!(line.tick(start + Duration::from_secs(2)));
        assert!(line.is_empty());
    }

    #[test]
    fn older_deadline_does_not_clear_newer_message() {
        let start = Instant::now();
        let mut line = StatusLine::default();
        line.post(StatusKind::Failure, COPY_FAILURE_MESSAGE, start);
        line.post(StatusKind::Success, COPY_SUCCESS_MESSAGE, start + Duration::from_secs(1));

        assert!(!line.tick(start + STATUS_CLEAR_DELAY));
        let still = line.visible(start + STATUS_CLEAR_DELAY).map(|m| m.kind);
        assert_eq!(still, Some(StatusKind::Success));
    }

    #[test]
    fn newer_message_restarts_the_delay() {
        let start = Instant::now();
        let mut line = StatusLine::default();
        line.post(StatusKind::Success, COPY_SUCCESS_MESSAGE, start);
        line.post(StatusKind::Success, COPY_SUCCESS_MESSAGE, start + Duration::from_millis(1500));

        assert!(!line.tick(start + Duration::from_millis(2500)));
        assert!(line.tick(start + Duration::from_millis(3500)));
    }
}
