//! Terminal rendering and input prompts.

use std::io::{self, BufRead, Write};

use pagetext_core::{AppViewModel, LogKind, SessionState, StatusTone};

const PREVIEW_LIMIT: usize = 2_000;
const TRUNCATED_MARKER: &str = "\n.[shortened for display]";

/// One user action read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw multi-line URL input, submitted for conversion.
    Convert(String),
    Copy,
    Save,
    Quit,
}

pub fn render(view: &AppViewModel) {
    println!();
    println!("status: {}{}", view.status_text, tone_tag(view.status_tone));

    if view.show_log && !view.log.is_empty() {
        println!("log:");
        for entry in &view.log {
            let bullet = match entry.kind {
                LogKind::Success => '+',
                LogKind::Failure => '!',
            };
            println!("  {bullet} {}", entry.text);
        }
    }

    if view.show_output {
        if let Some(document) = &view.output {
            println!("output ({} chars):", document.chars().count());
            println!("{}", preview(document));
        }
    }

    if let Some(notice) = &view.notice {
        println!("{notice}");
    }
    if let Some(alert) = &view.alert {
        println!("ALERT: {alert}");
    }
}

/// Reads the next user action. While a conversion just finished, the
/// copy/save/new commands are offered; otherwise URL input is prompted.
pub fn read_action(view: &AppViewModel) -> io::Result<Action> {
    if view.session == SessionState::Done {
        loop {
            print!("[n]ew  [c]opy  [s]ave  [q]uit > ");
            io::stdout().flush()?;
            let Some(line) = read_line()? else {
                return Ok(Action::Quit);
            };
            match line.trim() {
                "c" | "copy" => return Ok(Action::Copy),
                "s" | "save" => return Ok(Action::Save),
                "q" | "quit" => return Ok(Action::Quit),
                "n" | "new" => break,
                other => println!("unknown command: {other}"),
            }
        }
    }

    println!("paste URLs, one per line; finish with an empty line:");
    match read_urls()? {
        Some(raw) => Ok(Action::Convert(raw)),
        None => Ok(Action::Quit),
    }
}

fn tone_tag(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Neutral => "",
        StatusTone::Ok => " [ok]",
        StatusTone::Partial => " [partial]",
        StatusTone::Failed => " [failed]",
    }
}

fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Collects lines until a blank line. `None` on end-of-input with nothing
/// collected; an immediately blank line yields empty input, which the core
/// rejects with its own message.
fn read_urls() -> io::Result<Option<String>> {
    let mut raw = String::new();
    loop {
        match read_line()? {
            None => {
                if raw.is_empty() {
                    return Ok(None);
                }
                break;
            }
            Some(line) => {
                if line.trim().is_empty() {
                    break;
                }
                raw.push_str(&line);
            }
        }
    }
    Ok(Some(raw))
}

/// Shortens a long document for terminal display. Display only; the
/// exported document is never truncated.
fn preview(document: &str) -> String {
    if document.len() <= PREVIEW_LIMIT {
        return document.to_string();
    }
    let mut end = PREVIEW_LIMIT;
    while end > 0 && !document.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{TRUNCATED_MARKER}", &document[..end])
}
