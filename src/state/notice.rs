/// Non-blocking status notices ("Link copied to clipboard!")
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Older notices are dropped beyond this many
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub posted_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.queue.push_back(Notice {
            kind,
            message: message.into(),
            posted_at: now,
        });

        while self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    /// Drop every notice older than [`NOTICE_TTL`]
    pub fn expire(&mut self, now: Instant) {
        self.queue
            .retain(|notice| now.saturating_duration_since(notice.posted_at) < NOTICE_TTL);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let start = Instant::now();
        let mut notices = Notices::new();
        notices.push(NoticeKind::Success, "copied", start);
        notices.push(NoticeKind::Error, "failed", start + Duration::from_secs(2));

        notices.expire(start + Duration::from_secs(1));
        assert_eq!(notices.iter().count(), 2);

        notices.expire(start + NOTICE_TTL);
        assert_eq!(notices.iter().count(), 1);
        assert_eq!(notices.iter().next().unwrap().message, "failed");

        notices.expire(start + Duration::from_secs(10));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_notices_are_capped() {
        let now = Instant::now();
        let mut notices = Notices::new();
        for i in 0..5 {
            notices.push(NoticeKind::Success, format!("notice {}", i), now);
        }

        assert_eq!(notices.iter().count(), MAX_VISIBLE);
        assert_eq!(notices.iter().next().unwrap().message, "notice 2");
    }
}
