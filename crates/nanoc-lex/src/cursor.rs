//! Byte cursor over the source buffer.
//!
//! The accepted identifier/keyword/punctuator set is pure ASCII, so the
//! cursor works over raw bytes rather than `char`s — there is no
//! multi-byte decoding to get right, only array indexing.

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    pub fn peek(&self, offset: usize) -> u8 {
        self.source.get(self.pos + offset).copied().unwrap_or(0)
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        self.source[self.pos..].starts_with(needle.as_bytes())
    }

    /// Byte slice `[start, self.position())`, as `&str`. Panics if the
    /// range does not fall on a UTF-8 boundary — unreachable for this
    /// language's ASCII-only lexemes.
    pub fn slice_from(&self, start: usize) -> &'a str {
        std::str::from_utf8(&self.source[start..self.pos]).expect("ASCII-only lexeme")
    }
}
