//! Shared infrastructure for the `nanoc` compiler: source spans, identifier
//! interning, and the fatal diagnostic handler every pipeline stage reports
//! through.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Handler, Level};
pub use error::Diagnostic;
pub use span::Span;
pub use symbol::{Interner, Symbol};
