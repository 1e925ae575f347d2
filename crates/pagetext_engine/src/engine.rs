use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::engine_info;

use crate::{BatchFetcher, BatchResult, ClientSettings, ReaderClient};

enum EngineCommand {
    RunBatch { urls: Vec<String> },
}

/// Events emitted by the engine thread back to the platform layer. The
/// batch reports nothing until every fetch has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    BatchCompleted { result: BatchResult },
}

/// Handle to the engine thread. Commands go in over a channel; events come
/// back the same way, so the caller never blocks on network IO.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReaderClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = BatchFetcher::new(client.clone());
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn run_batch(&self, urls: Vec<String>) {
        let _ = self.cmd_tx.send(EngineCommand::RunBatch { urls });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let event_rx = self.event_rx.lock().ok()?;
        event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: BatchFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::RunBatch { urls } => {
            engine_info!("batch started: {} urls", urls.len());
            let result = fetcher.run(&urls).await;
            engine_info!(
                "batch finished: {} ok, {} failed",
                result.success_count(),
                result.failure_count()
            );
            let _ = event_tx.send(EngineEvent::BatchCompleted { result });
        }
    }
}
