//! Report rendering: the status line, the per-URL log, and the aggregated
//! document assembled from successful fetches.

use crate::state::{Outcome, OutcomeKind, StatusTone};

/// Delimiter between source blocks in the aggregated document.
pub const BLOCK_DELIMITER: &str = "\n\n---\n\n";

/// One line of the per-URL log. `kind` drives styling; `text` is the full
/// human-readable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub kind: LogKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Success,
    Failure,
}

pub fn status_line(succeeded: usize, failed: usize) -> String {
    format!("done. succeeded {succeeded}, failed {failed}.")
}

pub fn status_tone(succeeded: usize, failed: usize) -> StatusTone {
    if failed == 0 {
        StatusTone::Ok
    } else if succeeded == 0 {
        StatusTone::Failed
    } else {
        StatusTone::Partial
    }
}

/// One entry per outcome, in outcome order. Failure lines carry the error
/// reason verbatim.
pub fn log_entries(outcomes: &[Outcome]) -> Vec<LogEntry> {
    outcomes
        .iter()
        .map(|outcome| match &outcome.kind {
            OutcomeKind::Success { .. } => LogEntry {
                text: format!("ok: {}", outcome.url),
                kind: LogKind::Success,
            },
            OutcomeKind::Failure { reason } => LogEntry {
                text: format!("failed: {} ({reason})", outcome.url),
                kind: LogKind::Failure,
            },
        })
        .collect()
}

/// Joins every successful outcome's content, each prefixed with a source
/// header, in outcome order. `None` when nothing succeeded; the document is
/// never an empty string.
pub fn aggregate_document(outcomes: &[Outcome]) -> Option<String> {
    let blocks: Vec<String> = outcomes
        .iter()
        .filter_map(|outcome| match &outcome.kind {
            OutcomeKind::Success { content } => {
                Some(format!("--- source: {} ---\n\n{content}", outcome.url))
            }
            OutcomeKind::Failure { .. } => None,
        })
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join(BLOCK_DELIMITER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(url: &str, content: &str) -> Outcome {
        Outcome {
            url: url.to_string(),
            kind: OutcomeKind::Success {
                content: content.to_string(),
            },
        }
    }

    fn failed(url: &str, reason: &str) -> Outcome {
        Outcome {
            url: url.to_string(),
            kind: OutcomeKind::Failure {
                reason: reason.to_string(),
            },
        }
    }

    #[test]
    fn document_absent_without_successes() {
        assert_eq!(aggregate_document(&[]), None);
        assert_eq!(aggregate_document(&[failed("https://a.example", "timeout")]), None);
    }

    #[test]
    fn document_for_single_success_has_header_and_no_delimiter() {
        let outcomes = [
            failed("https://a.example", "timeout"),
            ok("https://b.example", "Hello"),
        ];
        assert_eq!(
            aggregate_document(&outcomes).as_deref(),
            Some("--- source: https://b.example ---\n\nHello")
        );
    }

    #[test]
    fn document_joins_successes_in_input_order() {
        let outcomes = [ok("https://a.example", "A"), ok("https://b.example", "B")];
        assert_eq!(
            aggregate_document(&outcomes).as_deref(),
            Some("--- source: https://a.example ---\n\nA\n\n---\n\n--- source: https://b.example ---\n\nB")
        );
    }

    #[test]
    fn log_lines_name_url_and_reason() {
        let entries = log_entries(&[
            ok("https://b.example", "Hello"),
            failed("https://a.example", "server returned status 404"),
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "ok: https://b.example");
        assert_eq!(entries[0].kind, LogKind::Success);
        assert_eq!(
            entries[1].text,
            "failed: https://a.example (server returned status 404)"
        );
        assert_eq!(entries[1].kind, LogKind::Failure);
    }

    #[test]
    fn status_line_summarizes_counts() {
        assert_eq!(status_line(2, 1), "done. succeeded 2, failed 1.");
    }

    #[test]
    fn status_tone_splits_on_failure_share() {
        assert_eq!(status_tone(3, 0), StatusTone::Ok);
        assert_eq!(status_tone(2, 1), StatusTone::Partial);
        assert_eq!(status_tone(0, 3), StatusTone::Failed);
    }
}
