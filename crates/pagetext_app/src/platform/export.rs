//! Platform export sink: the OS clipboard plus dated text files in the
//! working directory.

use std::path::PathBuf;

use pagetext_engine::{write_atomic, ExportError, ExportSink};

pub struct PlatformSink {
    output_dir: PathBuf,
}

impl PlatformSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl ExportSink for PlatformSink {
    fn copy_text(&self, text: &str) -> Result<(), ExportError> {
        // Clipboard handles are not shareable across threads; open one per
        // copy instead of holding it in the sink.
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
        Ok(write_atomic(&self.output_dir, filename, content)?)
    }
}
