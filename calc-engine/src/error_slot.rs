//! Transient error display
//!
//! At most one error message is live at a time. Instead of owning a timer, the
//! slot records a deadline; the message is visible until the deadline passes or
//! until the next submission clears it, whichever comes first. Hosts that want
//! to redraw on expiry can read the deadline from `pending_expiry`.

use crate::types::Timestamp;
use chrono::{DateTime, Duration, Utc};

/// A live error message with its expiry deadline
#[derive(Debug, Clone, PartialEq)]
pub struct TransientError {
    /// Message shown to the user
    pub message: String,
    /// When the error was raised
    pub raised_at: Timestamp,
    /// When the message stops being shown
    pub expires_at: Timestamp,
}

/// Holder for the single live error message
#[derive(Debug, Clone)]
pub struct ErrorSlot {
    timeout: Duration,
    current: Option<TransientError>,
}

impl ErrorSlot {
    /// Create an empty slot whose errors live for `timeout_ms`
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::milliseconds(timeout_ms.min(i64::MAX as u64) as i64),
            current: None,
        }
    }

    /// Show a message, replacing any live one
    pub fn show(&mut self, message: impl Into<String>, now: Timestamp) {
        let message = message.into();
        log::warn!("Calculator error: {}", message);
        self.current = Some(TransientError {
            message,
            raised_at: now,
            expires_at: now
                .checked_add_signed(self.timeout)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
    }

    /// Drop the live message, cancelling its pending expiry
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the message if its deadline has passed
    ///
    /// Returns true when a message was expired.
    pub fn expire(&mut self, now: Timestamp) -> bool {
        match &self.current {
            Some(err) if now >= err.expires_at => {
                log::trace!("Error display expired: {}", err.message);
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The message visible at `now`, if any
    pub fn text_at(&self, now: Timestamp) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|err| now < err.expires_at)
            .map(|err| err.message.as_str())
    }

    /// Deadline of the live message
    pub fn pending_expiry(&self) -> Option<Timestamp> {
        self.current.as_ref().map(|err| err.expires_at)
    }

    /// The live error, regardless of its deadline
    pub fn current(&self) -> Option<&TransientError> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> Timestamp {
        Utc.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
    }

    #[test]
    fn test_message_visible_until_deadline() {
        let mut slot = ErrorSlot::new(3000);
        slot.show("Cannot divide by zero", at(0));

        assert_eq!(slot.text_at(at(0)), Some("Cannot divide by zero"));
        assert_eq!(slot.text_at(at(2999)), Some("Cannot divide by zero"));
        assert_eq!(slot.text_at(at(3000)), None);
        assert_eq!(slot.pending_expiry(), Some(at(3000)));
    }

    #[test]
    fn test_new_error_replaces_old() {
        let mut slot = ErrorSlot::new(3000);
        slot.show("first", at(0));
        slot.show("second", at(1000));

        assert_eq!(slot.text_at(at(3500)), Some("second"));
        assert_eq!(slot.pending_expiry(), Some(at(4000)));
    }

    #[test]
    fn test_clear_cancels_expiry() {
        let mut slot = ErrorSlot::new(3000);
        slot.show("oops", at(0));
        slot.clear();

        assert_eq!(slot.text_at(at(1)), None);
        assert_eq!(slot.pending_expiry(), None);
    }

    #[test]
    fn test_unbounded_timeout_saturates() {
        let mut slot = ErrorSlot::new(u64::MAX);
        slot.show("oops", at(0));

        assert_eq!(slot.pending_expiry(), Some(DateTime::<Utc>::MAX_UTC));
        assert_eq!(slot.text_at(at(1_000_000)), Some("oops"));
    }

    #[test]
    fn test_expire() {
        let mut slot = ErrorSlot::new(100);
        slot.show("oops", at(0));

        assert!(!slot.expire(at(50)));
        assert!(slot.current().is_some());
        assert!(slot.expire(at(100)));
        assert!(slot.current().is_none());
        assert!(!slot.expire(at(200)));
    }
}
