#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch every URL concurrently and report back with `Msg::BatchCompleted`.
    RunBatch { urls: Vec<String> },
    /// Put the aggregated document on the clipboard.
    CopyDocument { text: String },
    /// Write the aggregated document to a dated text file.
    SaveDocument { text: String },
}
