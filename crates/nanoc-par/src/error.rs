//! Syntactic and semantic diagnostics.

use nanoc_util::{Diagnostic, Span};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// Expected-token mismatch; names the expected literal spelling.
    #[error("expected '{expected}'")]
    ExpectedToken { expected: String, span: Span },

    /// `primary` reached a token that starts no valid expression.
    #[error("expected an expression")]
    ExpectedExpression(Span),

    #[error("expected a type")]
    ExpectedType(Span),

    #[error("expected a variable name")]
    ExpectedIdent(Span),

    #[error("too many {what} (max 6)")]
    TooMany { what: &'static str, span: Span },

    #[error("undefined variable")]
    UndefinedVariable(Span),

    #[error("not an lvalue")]
    NotAnLvalue(Span),

    #[error("invalid pointer arithmetic")]
    InvalidPointerArithmetic(Span),

    #[error("invalid pointer dereference")]
    InvalidDereference(Span),

    #[error("cannot assign to an array")]
    AssignToArray(Span),
}

impl Diagnostic for ParseError {
    fn span(&self) -> Option<Span> {
        use ParseError::*;
        Some(match self {
            ExpectedToken { span, .. }
            | ExpectedExpression(span)
            | ExpectedType(span)
            | ExpectedIdent(span)
            | TooMany { span, .. }
            | UndefinedVariable(span)
            | NotAnLvalue(span)
            | InvalidPointerArithmetic(span)
            | InvalidDereference(span)
            | AssignToArray(span) => *span,
        })
    }
}
