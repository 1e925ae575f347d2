//! Pagetext engine: network IO, batch fan-out, and export plumbing.
mod batch;
mod client;
mod engine;
mod export;
mod persist;
mod types;

pub use batch::BatchFetcher;
pub use client::{ClientSettings, ExtractClient, ReaderClient};
pub use engine::{EngineEvent, EngineHandle};
pub use export::{export_filename, ExportError, ExportSink, Exporter};
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use types::{BatchResult, ExtractError, FailureKind, FetchOutcome};
