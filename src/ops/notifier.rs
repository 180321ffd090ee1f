use std::time::{Duration, Instant};

/// Default time a notice stays visible
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Single-slot, auto-expiring status message.
///
/// Showing a message replaces whatever is displayed and restarts the
/// visibility window. Expiry is a deadline on the current message, not a
/// timer per message.
#[derive(Debug, Clone)]
pub struct Notifier {
    duration: Duration,
    slot: Option<Shown>,
}

#[derive(Debug, Clone)]
struct Shown {
    message: String,
    /// None when the window is too long to represent; the message stays
    /// until replaced or cleared
    until: Option<Instant>,
}

impl Shown {
    fn visible_at(&self, now: Instant) -> bool {
        self.until.is_none_or(|until| now < until)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new(DEFAULT_NOTICE_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Notifier {
            duration,
            slot: None,
        }
    }

    /// Display `message`, replacing any current one
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.slot = Some(Shown {
            message: message.into(),
            until: now.checked_add(self.duration),
        });
    }

    /// The message visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|s| s.visible_at(now))
            .map(|s| s.message.as_str())
    }

    /// Drop an expired message. Returns true if the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.slot {
            Some(shown) if !shown.visible_at(now) => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
