//! History panel state: which dialog is open and copy feedback

use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::domain::{HistoryMetadata, HistoryTotals};
use crate::gui::clipboard::Clipboard;

/// How long the "copied" check mark stays visible
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// The one dialog the panel can have open, keyed by item timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenDialog {
    Prompt { timestamp: i64 },
    Cost { timestamp: i64 },
    TotalCost,
}

/// What the caller should do after a frame
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryPanelAction {
    /// An image of this entry was clicked
    SelectImage(HistoryMetadata),
    /// "Clear History" was clicked
    ClearHistory,
}

/// Transient "copied" marker.
///
/// Expiry is computed from the stored instant, so there is no timer to cancel
/// when the panel goes away.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    copied: Option<(i64, Instant)>,
}

impl CopyFeedback {
    pub fn mark(&mut self, timestamp: i64, now: Instant) {
        self.copied = Some((timestamp, now));
    }

    /// Whether `timestamp` was copied less than [`COPY_FEEDBACK_DURATION`] ago
    pub fn is_copied(&self, timestamp: i64, now: Instant) -> bool {
        match self.copied {
            Some((copied, at)) => {
                copied == timestamp && now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION
            }
            None => false,
        }
    }

    /// Time until the marker expires, if one is active
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, at) = self.copied?;
        COPY_FEEDBACK_DURATION
            .checked_sub(now.saturating_duration_since(at))
            .filter(|d| !d.is_zero())
    }

    /// Drop an expired marker
    pub fn expire(&mut self, now: Instant) {
        if self.remaining(now).is_none() {
            self.copied = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct HistoryPanelState {
    open_dialog: Option<OpenDialog>,
    copy_feedback: CopyFeedback,
}

impl HistoryPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dialog(&self) -> Option<OpenDialog> {
        self.open_dialog
    }

    pub fn open(&mut self, dialog: OpenDialog) {
        self.open_dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.open_dialog = None;
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    pub fn is_copied(&self, timestamp: i64, now: Instant) -> bool {
        self.copy_feedback.is_copied(timestamp, now)
    }

    /// Close dialogs that no longer have anything to show and drop stale
    /// copy feedback.
    pub fn reconcile(&mut self, history: &[HistoryMetadata], now: Instant) {
        self.copy_feedback.expire(now);

        let still_valid = match self.open_dialog {
            None => true,
            Some(OpenDialog::TotalCost) => HistoryTotals::from_history(history).has_cost(),
            Some(OpenDialog::Prompt { timestamp }) => {
                history.iter().any(|item| item.timestamp == timestamp)
            }
            Some(OpenDialog::Cost { timestamp }) => history
                .iter()
                .any(|item| item.timestamp == timestamp && item.cost_details.is_some()),
        };

        if !still_valid {
            debug!("Closing stale history dialog {:?}", self.open_dialog);
            self.open_dialog = None;
        }
    }

    /// Copy a prompt to the clipboard.
    ///
    /// Absent or empty prompts are ignored without touching the clipboard.
    /// Failures are logged only. Returns true when the text was copied.
    pub fn copy_prompt(
        &mut self,
        prompt: Option<&str>,
        timestamp: i64,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> bool {
        let Some(text) = prompt.filter(|p| !p.is_empty()) else {
            return false;
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                self.copy_feedback.mark(timestamp, now);
                true
            }
            Err(e) => {
                error!("Failed to copy text: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::clipboard::ClipboardError;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn test_copy_marks_then_expires() {
        let mut state = HistoryPanelState::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        assert!(state.copy_prompt(Some("a cat"), 42, &mut clipboard, t0));
        assert_eq!(clipboard.writes, vec!["a cat".to_string()]);
        assert!(state.is_copied(42, t0));
        assert!(!state.is_copied(43, t0));
        assert!(state.is_copied(42, t0 + Duration::from_millis(1499)));
        assert!(!state.is_copied(42, t0 + COPY_FEEDBACK_DURATION));
    }

    #[test]
    fn test_copy_none_is_noop() {
        let mut state = HistoryPanelState::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        assert!(!state.copy_prompt(None, 1, &mut clipboard, now));
        assert!(!state.copy_prompt(Some(""), 1, &mut clipboard, now));
        assert!(clipboard.writes.is_empty());
        assert!(!state.is_copied(1, now));
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let mut state = HistoryPanelState::new();
        let now = Instant::now();
        assert!(!state.copy_prompt(Some("text"), 1, &mut BrokenClipboard, now));
        assert!(!state.is_copied(1, now));
    }

    #[test]
    fn test_remaining_and_expire() {
        let mut feedback = CopyFeedback::default();
        let t0 = Instant::now();
        assert_eq!(feedback.remaining(t0), None);

        feedback.mark(7, t0);
        assert_eq!(
            feedback.remaining(t0 + Duration::from_millis(500)),
            Some(Duration::from_millis(1000))
        );

        feedback.expire(t0 + Duration::from_millis(500));
        assert!(feedback.is_copied(7, t0 + Duration::from_millis(500)));

        feedback.expire(t0 + Duration::from_secs(2));
        assert_eq!(feedback.remaining(t0), None);
    }

    #[test]
    fn test_dialog_is_keyed_by_timestamp() {
        let mut state = HistoryPanelState::new();
        state.open(OpenDialog::Prompt { timestamp: 5 });
        assert_eq!(state.open_dialog(), Some(OpenDialog::Prompt { timestamp: 5 }));
        state.open(OpenDialog::TotalCost);
        assert_eq!(state.open_dialog(), Some(OpenDialog::TotalCost));
        state.close();
        assert_eq!(state.open_dialog(), None);
    }
}
