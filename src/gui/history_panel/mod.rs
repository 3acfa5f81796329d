//! History panel
//!
//! Read-only list over a caller-owned history slice:
//! - Aggregate cost badge with a summary dialog
//! - Per-entry cost breakdown and prompt dialogs
//! - Thumbnail grid; clicking an image selects its entry
//! - "Clear History" without confirmation
//!
//! The panel never mutates history. It reports what happened through
//! [`HistoryPanelAction`] and the caller decides what to do.

mod dialogs;
mod render;
mod state;

pub use render::render_history_panel;
pub use state::{
    COPY_FEEDBACK_DURATION, CopyFeedback, HistoryPanelAction, HistoryPanelState, OpenDialog,
};
