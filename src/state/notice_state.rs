//! NoticeState - Pending Acknowledgment Dialog
//!
//! Backs the notification primitive. At most one notice is pending; it stays
//! until the user picks one of its options.

use tracing::debug;

/// One dismiss option of a notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeOption {
    pub label: String,
}

impl NoticeOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub options: Vec<NoticeOption>,
}

/// Fire-and-forget notification primitive
pub trait Notifier {
    fn notify(&mut self, title: &str, message: &str, options: Vec<NoticeOption>);
}

/// Holds the notice currently shown, if any
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    /// The notice awaiting acknowledgment
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }

    /// Dismiss the pending notice; no-op when nothing is shown
    pub fn acknowledge(&mut self) -> Option<Notice> {
        let dismissed = self.current.take();
        if let Some(notice) = &dismissed {
            debug!(title = %notice.title, "Notice acknowledged");
        }
        dismissed
    }
}

impl Notifier for NoticeState {
    fn notify(&mut self, title: &str, message: &str, options: Vec<NoticeOption>) {
        // A notice without options could never be dismissed
        let options = if options.is_empty() {
            vec![NoticeOption::new("OK")]
        } else {
            options
        };

        self.current = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
            options,
        });
    }
}
