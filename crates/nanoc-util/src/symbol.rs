//! Identifier interning.
//!
//! Every spelling the lexer reads for an `IDENT` token is interned here so
//! that the parser and codegen can compare identifiers by a cheap `Copy`
//! key instead of re-comparing strings. Unlike the leak-based, process-
//! lifetime string tables used for multi-file, incremental builds, `nanoc`
//! compiles a single translation unit once per process, so the interner
//! just owns its strings in a `Vec` — they already live exactly as long as
//! the compilation does.

use rustc_hash::FxHashMap;

/// An interned identifier spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.lookup.get(text) {
            return *sym;
        }
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.lookup.insert(text.to_string(), sym);
        sym
    }

    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        assert_eq!(a, b);
        assert_eq!(interner.resolve(a), "foo");
    }

    #[test]
    fn distinct_strings_get_distinct_symbols() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
        assert_eq!(interner.resolve(a), "foo");
        assert_eq!(interner.resolve(b), "bar");
    }
}
