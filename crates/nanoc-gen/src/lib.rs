//! `nanoc`'s code generator: a direct typed-AST-to-text-assembly walk,
//! no intermediate representation. GNU-assembler, Intel-syntax x86-64,
//! targeting the System V AMD64 ABI.
//!
//! The teacher's own codegen (`faxc-gen`) lowers through `faxc-mir` and
//! `faxc-lir` into LLVM IR via `inkwell`; nanoc's grammar and ABI surface
//! are small enough that a single stack-machine tree walk covers the
//! whole language, so there is no IR lowering stage here at all — the
//! ABI register order and stack-frame arithmetic the teacher's
//! `faxc-lir` computes are ported in directly (see `frame.rs`).

mod addr;
mod emitter;
mod error;
mod expr;
mod frame;
mod program;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use error::GenError;
pub use program::generate;
