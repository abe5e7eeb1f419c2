//! String literal lexing and escape decoding.

use std::rc::Rc;

use nanoc_types::Type;
use nanoc_util::Span;

use super::core::Lexer;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self, start: usize) -> Token {
        self.cursor.advance(); // opening quote
        let mut decoded = Vec::new();

        loop {
            if self.cursor.is_at_end() || self.cursor.current() == b'\n' {
                self.handler.report(&LexError::UnterminatedString(Span::at(start)));
            }
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    decoded.push(decode_escape(self.cursor.current()));
                    self.cursor.advance();
                }
                c => {
                    decoded.push(c);
                    self.cursor.advance();
                }
            }
        }

        let span = Span::new(start, self.cursor.position());
        let text = self.cursor.slice_from(start).to_string();
        let mut tok = Token::new(TokenKind::Str, span, text);
        decoded.push(0); // trailing NUL
        let array_len = decoded.len();
        tok.str_value = decoded;
        tok.str_type = Some(Rc::new(Type::array_of(Type::ty_char(), array_len)));
        tok
    }
}

/// Named escapes fall back to `\X -> X` for any other `X`, per spec.md.
fn decode_escape(c: u8) -> u8 {
    match c {
        b'a' => 0x07,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'v' => 0x0b,
        b'f' => 0x0c,
        b'r' => b'\r',
        b'e' => 0x1b,
        other => other,
    }
}
