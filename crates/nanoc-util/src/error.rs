//! Shared error-reporting glue.
//!
//! Each pipeline crate below the driver defines its own `thiserror` enum
//! for the diagnostics it can raise (`nanoc_lex::LexError`,
//! `nanoc_par::ParseError`, `nanoc_gen::GenError`). None of them is ever
//! propagated as a `Result` up to the driver: the instant one is
//! constructed it is handed straight to the [`Handler`], which prints the
//! caret-pointed report and terminates the process. [`Diagnostic`] is the
//! seam that lets every crate do that the same way.

use crate::diagnostic::Handler;
use crate::span::Span;

/// A diagnostic-shaped error a pipeline crate can hand straight to a
/// [`Handler`] instead of threading a `Result` up through the driver.
pub trait Diagnostic: std::error::Error {
    /// The source location the diagnostic points at, if any.
    fn span(&self) -> Option<Span> {
        None
    }
}

impl Handler<'_> {
    /// Reports a [`Diagnostic`] and exits: at its span if it carries one,
    /// otherwise as an unlocated message.
    pub fn report(&self, err: &dyn Diagnostic) -> ! {
        match err.span() {
            Some(span) => self.error_span(span, err.to_string()),
            None => self.error(err.to_string()),
        }
    }
}
