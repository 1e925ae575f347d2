use std::path::PathBuf;
use std::sync::Arc;

use crate::persist::PersistError;

/// Filename for a saved export on the given local date (`YYYY-MM-DD`).
pub fn export_filename(local_date: &str) -> String {
    format!("content-{local_date}.txt")
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Platform capability behind the exporter: a clipboard target and a file
/// target. Each environment supplies its own adapter.
pub trait ExportSink: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ExportError>;
    fn write_file(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError>;
}

/// Offers the aggregated document for clipboard copy and dated file save.
/// Both operations are no-ops when there is no document. The local date is
/// injected so tests stay deterministic.
pub struct Exporter {
    sink: Arc<dyn ExportSink>,
    local_date: Arc<dyn Fn() -> String + Send + Sync>,
}

impl Exporter {
    pub fn new(
        sink: Arc<dyn ExportSink>,
        local_date: Arc<dyn Fn() -> String + Send + Sync>,
    ) -> Self {
        Self { sink, local_date }
    }

    /// Returns `Ok(true)` when text was actually copied; `Ok(false)` means
    /// there was nothing to copy and the sink was not touched.
    pub fn copy(&self, document: Option<&str>) -> Result<bool, ExportError> {
        match document {
            Some(text) if !text.is_empty() => {
                self.sink.copy_text(text)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Returns the written path, or `None` when there was nothing to save.
    pub fn save(&self, document: Option<&str>) -> Result<Option<PathBuf>, ExportError> {
        match document {
            Some(text) if !text.is_empty() => {
                let filename = export_filename(&(self.local_date)());
                let path = self.sink.write_file(&filename, text)?;
                Ok(Some(path))
            }
            _ => Ok(None),
        }
    }
}
