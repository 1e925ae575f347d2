#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for conversion.
    ConvertClicked,
    /// Engine settled every fetch of the current batch.
    BatchCompleted { outcomes: Vec<crate::Outcome> },
    /// User asked to copy the aggregated document to the clipboard.
    CopyClicked,
    /// User asked to save the aggregated document to a file.
    SaveClicked,
    /// Platform reports the clipboard write result.
    CopyFinished { result: Result<(), String> },
    /// Platform reports the file write result; `Ok` carries the path.
    SaveFinished { result: Result<String, String> },
    /// Fallback for placeholder wiring.
    NoOp,
}
