use crate::report::LogEntry;
use crate::state::{SessionState, StatusTone};

/// Everything a front end needs to render one frame. Derived from
/// `AppState::view`; owns its data so rendering never borrows state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub session: SessionState,
    /// The submit control is disabled and shows a busy label while true.
    pub busy: bool,
    pub status_text: String,
    pub status_tone: StatusTone,
    pub log: Vec<LogEntry>,
    /// The log panel appears once processing starts and stays visible.
    pub show_log: bool,
    /// Aggregated document; present only when at least one fetch succeeded.
    pub output: Option<String>,
    pub show_output: bool,
    /// Transient feedback, e.g. "copied to clipboard."
    pub notice: Option<String>,
    /// Blocking user-visible alert, e.g. a clipboard failure.
    pub alert: Option<String>,
}
