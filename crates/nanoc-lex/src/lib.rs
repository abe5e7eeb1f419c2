//! `nanoc`'s tokenizer: source text to a stream of tagged, positioned
//! tokens.
//!
//! Recognized lexemes, tried in the order spec.md lists them: whitespace,
//! line and block comments, decimal integer literals, string literals
//! with escape decoding, identifiers, then two- and one-character
//! punctuators. A keyword re-tagging pass runs over the finished stream
//! afterward, turning `Ident` tokens whose spelling is a reserved word
//! into `Keyword` tokens.

pub mod cursor;
mod error;
mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{equal, Token, TokenKind};

/// Reserved spellings re-tagged from `Ident` to `Keyword` after
/// tokenization.
pub const KEYWORDS: &[&str] = &["return", "if", "else", "for", "while", "int", "char", "sizeof"];

/// Tokenizes `source`, returning the complete token stream (terminated by
/// `Eof`) with keywords already re-tagged.
pub fn tokenize(source: &str, handler: &nanoc_util::Handler) -> Vec<Token> {
    let mut tokens = Lexer::new(source, handler).tokenize();
    for tok in &mut tokens {
        if tok.kind == TokenKind::Ident && KEYWORDS.contains(&tok.text.as_str()) {
            tok.kind = TokenKind::Keyword;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanoc_util::Handler;

    fn lex(src: &str) -> Vec<Token> {
        let handler = Handler::new("test.c", src);
        tokenize(src, &handler)
    }

    #[test]
    fn tokenizes_arithmetic_expression() {
        let toks = lex("1 + 2 * 3");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Num,
                TokenKind::Punct,
                TokenKind::Num,
                TokenKind::Punct,
                TokenKind::Num,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_retagging_only_touches_exact_spellings() {
        let toks = lex("int returnValue;");
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[1].kind, TokenKind::Ident); // "returnValue" is not "return"
    }

    #[test]
    fn round_trip_spelling() {
        let src = "foo123 + 0xDEAD"; // 0xDEAD lexes as NUM "0", IDENT "xDEAD"
        let toks = lex(src);
        for tok in &toks {
            if tok.kind == TokenKind::Eof {
                continue;
            }
            assert_eq!(&src[tok.span.start..tok.span.end], tok.text);
        }
    }

    #[test]
    fn two_char_punct_beats_one_char() {
        let toks = lex("a<=b");
        assert_eq!(toks[1].kind, TokenKind::Punct);
        assert_eq!(toks[1].text, "<=");
    }

    #[test]
    fn string_literal_decodes_escapes_and_adds_nul() {
        let toks = lex("\"a\\nb\"");
        assert_eq!(toks[0].kind, TokenKind::Str);
        assert_eq!(toks[0].str_value, vec![b'a', b'\n', b'b', 0]);
        assert_eq!(toks[0].str_type.as_ref().unwrap().size(), 4);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use nanoc_util::Handler;
    use proptest::prelude::*;

    fn lex(src: &str) -> Vec<Token> {
        let handler = Handler::new("prop.c", src);
        tokenize(src, &handler)
    }

    proptest! {
        /// spec.md §8: for every token `t`, the source substring its span
        /// covers equals the literal spelling the tokenizer recognized.
        #[test]
        fn ident_tokens_round_trip(ident in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
            let toks = lex(&ident);
            let expected_kind = if KEYWORDS.contains(&ident.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Ident
            };
            prop_assert_eq!(toks[0].kind, expected_kind);
            prop_assert_eq!(&ident[toks[0].span.start..toks[0].span.end], toks[0].text.as_str());
        }

        #[test]
        fn decimal_literals_round_trip(digits in "[0-9]{1,18}") {
            let toks = lex(&digits);
            prop_assert_eq!(toks[0].kind, TokenKind::Num);
            prop_assert_eq!(&digits[toks[0].span.start..toks[0].span.end], toks[0].text.as_str());
            prop_assert_eq!(toks[0].value, digits.parse::<u64>().unwrap());
        }

        #[test]
        fn plain_string_literals_decode_to_their_contents(body in "[A-Za-z0-9 ,.!?]{0,40}") {
            let src = format!("\"{body}\"");
            let toks = lex(&src);
            prop_assert_eq!(toks[0].kind, TokenKind::Str);
            let mut expected = body.into_bytes();
            expected.push(0);
            prop_assert_eq!(toks[0].str_value.as_slice(), expected.as_slice());
        }
    }
}
