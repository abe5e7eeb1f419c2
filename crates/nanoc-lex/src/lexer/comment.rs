//! Line and block comment skipping.

use nanoc_util::Span;

use super::core::Lexer;
use crate::error::LexError;

impl<'a> Lexer<'a> {
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
    }

    pub(crate) fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance_n(2);
        loop {
            if self.cursor.is_at_end() {
                self.handler
                    .report(&LexError::UnterminatedBlockComment(Span::at(start)));
            }
            if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                self.cursor.advance_n(2);
                return;
            }
            self.cursor.advance();
        }
    }
}
