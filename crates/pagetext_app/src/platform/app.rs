use std::sync::mpsc;
use std::time::Duration;

use pagetext_core::{update, AppState, Msg, SessionState};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::{self, Action};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx);
    let mut state = AppState::new();

    println!("pagetext: batch URL to text converter");

    loop {
        match ui::read_action(&state.view())? {
            Action::Quit => break,
            Action::Convert(raw) => {
                state = dispatch(state, Msg::InputChanged(raw), &runner);
                state = dispatch(state, Msg::ConvertClicked, &runner);
                state = await_batch(state, &msg_rx, &runner);
            }
            Action::Copy => state = dispatch(state, Msg::CopyClicked, &runner),
            Action::Save => state = dispatch(state, Msg::SaveClicked, &runner),
        }
        state = drain_pending(state, &msg_rx, &runner);
    }

    Ok(())
}

/// Applies one message, runs its effects, and renders when the view changed.
fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        ui::render(&state.view());
    }
    state
}

/// Pumps engine messages until the running batch settles. The submit prompt
/// is simply not offered during this phase, so a second batch cannot start
/// while one is in flight.
fn await_batch(mut state: AppState, msg_rx: &mpsc::Receiver<Msg>, runner: &EffectRunner) -> AppState {
    while state.session() == SessionState::Running {
        match msg_rx.recv() {
            Ok(msg) => state = dispatch(state, msg, runner),
            Err(_) => break,
        }
    }
    state
}

/// Picks up completions that arrive right after an action, e.g. the
/// clipboard result of a copy effect.
fn drain_pending(
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> AppState {
    while let Ok(msg) = msg_rx.recv_timeout(Duration::from_millis(50)) {
        state = dispatch(state, msg, runner);
    }
    state
}
