//! Core lexer: trivia skipping and single-token dispatch.

use nanoc_util::Handler;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Tokenizer for one compilation unit.
///
/// Holds only a cursor over the source bytes and a reference to the
/// shared diagnostic [`Handler`] — there is no other mutable state, since
/// `nanoc` tokenizes a whole source buffer in a single pass and never
/// resumes a `Lexer` across calls once [`Lexer::tokenize`] returns.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'a Handler<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler<'a>) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
        }
    }

    /// Runs the lexer to completion, returning every token including the
    /// terminating `Eof`. Keyword re-tagging is a whole-stream second
    /// pass and lives one level up, in [`crate::tokenize`].
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn next_token(&mut self) -> Token {
        self.skip_trivia();
        let start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::eof(start);
        }

        match self.cursor.current() {
            b'"' => self.lex_string(start),
            c if c.is_ascii_digit() => self.lex_number(start),
            c if c.is_ascii_alphabetic() || c == b'_' => self.lex_ident(start),
            _ => self.lex_punct(start),
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => self.cursor.advance(),
                b'/' if self.cursor.peek(1) == b'/' => self.skip_line_comment(),
                b'/' if self.cursor.peek(1) == b'*' => self.skip_block_comment(),
                _ => return,
            }
        }
    }
}
