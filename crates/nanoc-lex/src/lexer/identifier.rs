//! Identifiers. Keyword re-tagging is a separate whole-stream pass; see
//! [`crate::tokenize`].

use nanoc_util::Span;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_ident(&mut self, start: usize) -> Token {
        loop {
            let c = self.cursor.current();
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start).to_string();
        Token::new(TokenKind::Ident, Span::new(start, self.cursor.position()), text)
    }
}
