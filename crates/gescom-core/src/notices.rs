//! Non-blocking, user-facing notices.
//!
//! The gate does not render anything on denial; it hands a message to a
//! [`NoticeSink`] and lets the surrounding layer decide how to surface it
//! (flash message, JSON error body, ...). [`FlashBag`] is the standard
//! in-memory sink, modeled on a session flash bag.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// One message destined for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Receiver for notices emitted as side effects of core operations.
pub trait NoticeSink {
    fn add_warning(&mut self, message: &str);
}

/// Accumulates notices for the caller to surface after the check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashBag {
    notices: Vec<Notice>,
}

impl FlashBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains the accumulated notices, leaving the bag empty.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl NoticeSink for FlashBag {
    fn add_warning(&mut self, message: &str) {
        self.notices.push(Notice {
            level: NoticeLevel::Warning,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_bag_accumulates_and_drains() {
        let mut bag = FlashBag::new();
        assert!(bag.is_empty());

        bag.add_warning("first");
        bag.add_warning("second");
        assert_eq!(bag.notices().len(), 2);
        assert_eq!(bag.notices()[0].level, NoticeLevel::Warning);
        assert_eq!(bag.notices()[0].message, "first");

        let drained = bag.take();
        assert_eq!(drained.len(), 2);
        assert!(bag.is_empty());
    }
}
