//! Fatal, caret-pointed diagnostics.
//!
//! Every stage of the compiler shares one `Handler` borrowing the whole
//! source buffer. There is no accumulation and no recovery: the first
//! diagnostic raised anywhere prints its message and terminates the
//! process. This mirrors the source compiler's `error`/`error_at` pair
//! exactly, down to the `filename:line: <source line>` plus caret layout.

use crate::span::Span;
use std::process::exit;

/// Severity of a diagnostic. `nanoc` only ever raises `Error`-level
/// diagnostics — every one of them is fatal — but the type stays an enum
/// rather than a unit struct so the shape matches the rest of the
/// diagnostic-handling idiom used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// Holds the filename and full source text so any later stage can turn a
/// byte offset or `Span` into a `filename:line: <line>` + caret report.
pub struct Handler<'a> {
    filename: &'a str,
    source: &'a str,
}

impl<'a> Handler<'a> {
    pub fn new(filename: &'a str, source: &'a str) -> Self {
        Self { filename, source }
    }

    /// Reports an error with no particular source location and exits.
    pub fn error(&self, message: impl AsRef<str>) -> ! {
        eprintln!("{}: {}", self.filename, message.as_ref());
        exit(1)
    }

    /// Reports an error at a single byte offset, printing the containing
    /// source line and a caret under the offending byte, then exits.
    pub fn error_at(&self, offset: usize, message: impl AsRef<str>) -> ! {
        let bytes = self.source.as_bytes();
        let offset = offset.min(bytes.len());

        let mut line_start = offset;
        while line_start > 0 && bytes[line_start - 1] != b'\n' {
            line_start -= 1;
        }
        let mut line_end = offset;
        while line_end < bytes.len() && bytes[line_end] != b'\n' {
            line_end += 1;
        }

        let line_no = 1 + self.source[..line_start].bytes().filter(|&b| b == b'\n').count();
        let line_text = &self.source[line_start..line_end];

        let prefix = format!("{}:{}: ", self.filename, line_no);
        eprint!("{prefix}");
        eprintln!("{line_text}");

        let col = offset - line_start;
        eprintln!("{}^ {}", " ".repeat(prefix.len() + col), message.as_ref());
        exit(1)
    }

    /// Reports an error covering a [`Span`], caret-pointing at its start.
    pub fn error_span(&self, span: Span, message: impl AsRef<str>) -> ! {
        self.error_at(span.start, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(Level::Error.to_string(), "error");
    }
}
