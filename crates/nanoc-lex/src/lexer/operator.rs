//! Punctuators: two-character operators tried before single-character
//! ones, matching spec.md's stated attempt order.

use nanoc_util::Span;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

const TWO_CHAR_PUNCT: [&str; 4] = ["==", "!=", "<=", ">="];

impl<'a> Lexer<'a> {
    pub(crate) fn lex_punct(&mut self, start: usize) -> Token {
        for op in TWO_CHAR_PUNCT {
            if self.cursor.starts_with(op) {
                self.cursor.advance_n(2);
                return Token::new(TokenKind::Punct, Span::new(start, self.cursor.position()), op.to_string());
            }
        }

        let c = self.cursor.current();
        if c.is_ascii() && (c as char).is_ascii_punctuation() {
            self.cursor.advance();
            return Token::new(
                TokenKind::Punct,
                Span::new(start, self.cursor.position()),
                (c as char).to_string(),
            );
        }

        self.handler.report(&LexError::CannotTokenize(Span::at(start)));
    }
}
