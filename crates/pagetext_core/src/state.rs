use crate::report;
use crate::view_model::AppViewModel;

/// Lifecycle phase of the current conversion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Done,
}

/// Severity of the status line; front ends pick colors from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    /// Every fetch succeeded.
    Ok,
    /// Some fetches succeeded, some failed.
    Partial,
    /// Nothing succeeded, or the action itself was rejected.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: "ready.".to_string(),
            tone: StatusTone::Neutral,
        }
    }
}

/// Per-URL result as seen by the pure core. The `url` is the input entry
/// verbatim; the platform layer maps engine outcomes into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub url: String,
    pub kind: OutcomeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    Success { content: String },
    Failure { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    session: SessionState,
    outcomes: Vec<Outcome>,
    status: StatusLine,
    notice: Option<String>,
    alert: Option<String>,
    log_visible: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn view(&self) -> AppViewModel {
        let output = report::aggregate_document(&self.outcomes);
        AppViewModel {
            session: self.session,
            busy: self.session == SessionState::Running,
            status_text: self.status.text.clone(),
            status_tone: self.status.tone,
            log: report::log_entries(&self.outcomes),
            show_log: self.log_visible,
            show_output: output.is_some(),
            output,
            notice: self.notice.clone(),
            alert: self.alert.clone(),
        }
    }

    /// Returns whether a render is due, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// The current aggregated document, if any fetch has succeeded.
    pub(crate) fn document(&self) -> Option<String> {
        report::aggregate_document(&self.outcomes)
    }

    /// Discards the previous batch and enters the running phase.
    pub(crate) fn begin_batch(&mut self, url_count: usize) {
        self.outcomes.clear();
        self.session = SessionState::Running;
        self.status = StatusLine {
            text: format!("processing {url_count} urls..."),
            tone: StatusTone::Neutral,
        };
        self.notice = None;
        self.alert = None;
        self.log_visible = true;
        self.dirty = true;
    }

    pub(crate) fn finish_batch(&mut self, outcomes: Vec<Outcome>) {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        let failed = outcomes.len() - succeeded;
        self.outcomes = outcomes;
        self.session = SessionState::Done;
        self.status = StatusLine {
            text: report::status_line(succeeded, failed),
            tone: report::status_tone(succeeded, failed),
        };
        self.dirty = true;
    }

    /// Empty-input rejection: only the status line changes; the previous
    /// log and output stay on screen.
    pub(crate) fn reject_empty_input(&mut self) {
        self.status = StatusLine {
            text: "enter at least one URL.".to_string(),
            tone: StatusTone::Failed,
        };
        self.notice = None;
        self.alert = None;
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, text: String) {
        self.notice = Some(text);
        self.alert = None;
        self.dirty = true;
    }

    pub(crate) fn set_alert(&mut self, text: String) {
        self.alert = Some(text);
        self.notice = None;
        self.dirty = true;
    }

    pub(crate) fn clear_transients(&mut self) {
        if self.notice.is_some() || self.alert.is_some() {
            self.notice = None;
            self.alert = None;
            self.dirty = true;
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success { .. })
    }
}
