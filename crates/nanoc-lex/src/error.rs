//! Lexical diagnostics.

use nanoc_util::{Diagnostic, Span};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("unterminated block comment")]
    UnterminatedBlockComment(Span),
    #[error("unterminated string literal")]
    UnterminatedString(Span),
    #[error("invalid integer literal")]
    InvalidNumber(Span),
    #[error("cannot tokenize")]
    CannotTokenize(Span),
}

impl Diagnostic for LexError {
    fn span(&self) -> Option<Span> {
        let (LexError::UnterminatedBlockComment(s)
        | LexError::UnterminatedString(s)
        | LexError::InvalidNumber(s)
        | LexError::CannotTokenize(s)) = self;
        Some(*s)
    }
}
