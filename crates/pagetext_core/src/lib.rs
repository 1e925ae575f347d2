//! Pagetext core: pure state machine and report rendering.
mod effect;
mod msg;
mod report;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use report::{
    aggregate_document, log_entries, status_line, status_tone, LogEntry, LogKind, BLOCK_DELIMITER,
};
pub use state::{AppState, Outcome, OutcomeKind, SessionState, StatusLine, StatusTone};
pub use update::update;
pub use view_model::AppViewModel;
