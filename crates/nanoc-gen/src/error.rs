//! Codegen-time diagnostics.
//!
//! Almost every invalid shape the code generator could encounter is
//! already ruled out by `nanoc_par`'s `add_type` pass; the one case it
//! doesn't check is the operand of `&`, which `add_type` happily types
//! without requiring it to be an lvalue. `gen_addr` is the actual
//! lvalue gate, so that's where this diagnostic belongs.

use nanoc_util::{Diagnostic, Span};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("not an lvalue")]
    NotAnLvalue(Span),
}

impl Diagnostic for GenError {
    fn span(&self) -> Option<Span> {
        let GenError::NotAnLvalue(span) = self;
        Some(*span)
    }
}
