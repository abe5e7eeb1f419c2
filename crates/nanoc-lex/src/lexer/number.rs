//! Decimal integer literals.

use nanoc_util::Span;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self, start: usize) -> Token {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        let span = Span::new(start, self.cursor.position());
        let text = self.cursor.slice_from(start).to_string();
        let value = text
            .parse::<u64>()
            .unwrap_or_else(|_| self.handler.report(&LexError::InvalidNumber(span)));

        let mut tok = Token::new(TokenKind::Num, span, text);
        tok.value = value;
        tok
    }
}
