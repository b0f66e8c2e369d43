/// Share link hand-off
///
/// A share copies the meme's link to a clipboard-like target. The write
/// runs on tokio's blocking pool since platform clipboards may block, and
/// every call is an independent task: two quick shares issue two writes.

use thiserror::Error;
use tokio::task;

/// Why a share hand-off failed
///
/// `Clone` so it can travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the link: {0}")]
    Rejected(String),
    #[error("share task failed: {0}")]
    TaskFailed(String),
}

/// Anything that accepts a share link
pub trait ShareTarget: Send + 'static {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError>;
}

/// The operating system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ShareTarget for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Rejected(e.to_string()))
    }
}

/// Hand `link` to `target` off the UI thread
///
/// Resolves to the link that was shared, so the caller can report it.
pub async fn hand_off<T: ShareTarget>(mut target: T, link: String) -> Result<String, ShareError> {
    task::spawn_blocking(move || {
        target.write_text(&link)?;
        Ok::<_, ShareError>(link)
    })
    .await
    .map_err(|e| ShareError::TaskFailed(e.to_string()))?
}

/// Copy a link to the system clipboard
pub async fn copy_link(link: String) -> Result<String, ShareError> {
    tracing::debug!(%link, "copying share link");
    hand_off(SystemClipboard, link).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every write, for asserting on what was shared
    #[derive(Debug, Clone, Default)]
    pub struct RecordingTarget {
        pub written: Arc<Mutex<Vec<String>>>,
    }

    impl ShareTarget for RecordingTarget {
        fn write_text(&mut self, text: &str) -> Result<(), ShareError> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Always refuses the write
    #[derive(Debug, Clone, Default)]
    pub struct FailingTarget;

    impl ShareTarget for FailingTarget {
        fn write_text(&mut self, _text: &str) -> Result<(), ShareError> {
            Err(ShareError::Unavailable(String::from("no display")))
        }
    }

    #[tokio::test]
    async fn test_hand_off_success() {
        let target = RecordingTarget::default();
        let written = target.written.clone();

        let result = hand_off(target, String::from("http://localhost:3000/meme/1")).await;

        assert_eq!(result, Ok(String::from("http://localhost:3000/meme/1")));
        assert_eq!(*written.lock().unwrap(), vec!["http://localhost:3000/meme/1"]);
    }

    #[tokio::test]
    async fn test_hand_off_failure() {
        let result = hand_off(FailingTarget, String::from("http://localhost:3000/meme/1")).await;
        assert_eq!(result, Err(ShareError::Unavailable(String::from("no display"))));
    }

    #[tokio::test]
    async fn test_shares_are_independent() {
        let target = RecordingTarget::default();
        let written = target.written.clone();

        let (a, b) = tokio::join!(
            hand_off(target.clone(), String::from("a")),
            hand_off(target, String::from("b")),
        );

        assert!(a.is_ok() && b.is_ok());
        let mut seen = written.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec!["a", "b"]);
    }
}
