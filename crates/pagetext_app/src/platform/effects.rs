use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chrono::Local;
use engine_logging::{engine_info, engine_warn};
use pagetext_core::{Effect, Msg, Outcome, OutcomeKind};
use pagetext_engine::{ClientSettings, EngineEvent, EngineHandle, Exporter, FetchOutcome};

use super::export::PlatformSink;

/// Executes core effects against the engine and exporter, and pumps engine
/// events back into the message channel as core messages.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    exporter: Exporter,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let output_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let sink = Arc::new(PlatformSink::new(output_dir));
        let exporter = Exporter::new(sink, Arc::new(local_date));

        let engine = Arc::new(EngineHandle::new(ClientSettings::default()));
        let runner = Self {
            engine,
            exporter,
            msg_tx,
        };
        runner.spawn_event_pump();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunBatch { urls } => {
                    engine_info!("batch submitted: {} urls", urls.len());
                    self.engine.run_batch(urls);
                }
                Effect::CopyDocument { text } => {
                    let result = self
                        .exporter
                        .copy(Some(text.as_str()))
                        .map(|_| ())
                        .map_err(|err| err.to_string());
                    if let Err(reason) = &result {
                        engine_warn!("clipboard copy failed: {}", reason);
                    }
                    let _ = self.msg_tx.send(Msg::CopyFinished { result });
                }
                Effect::SaveDocument { text } => {
                    let result = match self.exporter.save(Some(text.as_str())) {
                        Ok(Some(path)) => Ok(path.display().to_string()),
                        // The core only emits the effect when a document
                        // exists, so an empty save never reaches here.
                        Ok(None) => continue,
                        Err(err) => {
                            engine_warn!("save failed: {}", err);
                            Err(err.to_string())
                        }
                    };
                    let _ = self.msg_tx.send(Msg::SaveFinished { result });
                }
            }
        }
    }

    fn spawn_event_pump(&self) {
        let engine = Arc::clone(&self.engine);
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::BatchCompleted { result } => {
                        let outcomes = result.outcomes.into_iter().map(map_outcome).collect();
                        if msg_tx.send(Msg::BatchCompleted { outcomes }).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn local_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn map_outcome(outcome: FetchOutcome) -> Outcome {
    match outcome.result {
        Ok(content) => Outcome {
            url: outcome.url,
            kind: OutcomeKind::Success { content },
        },
        Err(err) => {
            engine_warn!("extraction failed for {}: {}", outcome.url, err);
            Outcome {
                url: outcome.url,
                kind: OutcomeKind::Failure {
                    reason: err.to_string(),
                },
            }
        }
    }
}
