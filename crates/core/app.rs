use std::fmt::Write;

use bulksearch::enrich::{Resolved, Session, Source};
use colored::Colorize;

/// How the report is styled on the terminal.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn unresolved(self, line: &str) -> String {
        if self.color {
            line.red().to_string()
        } else {
            line.to_owned()
        }
    }
}

pub fn progress_line(resolved: &Resolved) -> String {
    let by = match resolved.source {
        Source::Isbn => "ISBN",
        Source::Title => "Title",
    };
    format!(
        "Retrieved by {by}: **{}** (ISBN: {})",
        resolved.title, resolved.identifier
    )
}

/// Lists resolved entries followed by unresolved ones.
///
/// Numbering carries on from the resolved list into the unresolved list so every number picks
/// out exactly one entry, matching the selection made in [`crate::commands::Choice`].
pub fn report(session: &Session, palette: Palette) -> String {
    let mut out = String::from("\nBooks retrieved:\n");

    for (i, entry) in session.resolved.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. **{}** (ISBN: {})",
            i + 1,
            entry.title,
            entry.identifier
        );
    }

    if !session.unresolved.is_empty() {
        out.push_str("\nBooks not retrieved:\n");
        let offset = session.resolved.len();
        for (i, entry) in session.unresolved.iter().enumerate() {
            let line = format!(
                "{}. **{}** (ISBN: {})",
                offset + i + 1,
                entry.label,
                entry.identifier
            );
            out.push_str(&palette.unresolved(&line));
            out.push('\n');
        }
    }

    out
}
