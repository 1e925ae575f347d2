use crate::{AppState, Effect, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ConvertClicked => {
            // A batch starts only from Idle or Done; a submit while one is
            // running is dropped, UI affordance or not.
            if state.session() == SessionState::Running {
                return (state, Vec::new());
            }
            let urls = parse_urls(state.input());
            if urls.is_empty() {
                state.reject_empty_input();
                Vec::new()
            } else {
                state.begin_batch(urls.len());
                vec![Effect::RunBatch { urls }]
            }
        }
        Msg::BatchCompleted { outcomes } => {
            if state.session() != SessionState::Running {
                return (state, Vec::new());
            }
            state.finish_batch(outcomes);
            Vec::new()
        }
        Msg::CopyClicked => match state.document() {
            Some(text) => {
                state.clear_transients();
                vec![Effect::CopyDocument { text }]
            }
            None => Vec::new(),
        },
        Msg::SaveClicked => match state.document() {
            Some(text) => {
                state.clear_transients();
                vec![Effect::SaveDocument { text }]
            }
            None => Vec::new(),
        },
        Msg::CopyFinished { result } => {
            match result {
                Ok(()) => state.set_notice("copied to clipboard.".to_string()),
                Err(reason) => state.set_alert(format!("copy failed: {reason}")),
            }
            Vec::new()
        }
        Msg::SaveFinished { result } => {
            match result {
                Ok(path) => state.set_notice(format!("saved to {path}.")),
                Err(reason) => state.set_alert(format!("save failed: {reason}")),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Splits raw input into trimmed non-empty lines. Order is preserved,
/// duplicates are kept, and no URL validation happens here; a malformed
/// URL surfaces later as a fetch failure.
fn parse_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
