//! Boundary conditions for the tokenizer, kept as a standalone module
//! alongside `lib.rs`'s own `#[cfg(test)] mod tests`, matching the
//! teacher's convention of a dedicated `edge_cases.rs` per pipeline crate.
//!
//! Error paths (unterminated comment/string, unrecognized byte) are not
//! exercised here: [`nanoc_util::Handler::error_at`] calls
//! `std::process::exit`, which would tear down the test binary. Those are
//! covered end-to-end via `assert_cmd` in `nanoc-drv`'s integration tests,
//! where each case runs in its own child process.

use nanoc_util::Handler;

use crate::{tokenize, TokenKind};

fn lex(src: &str) -> Vec<crate::Token> {
    let handler = Handler::new("edge.c", src);
    tokenize(src, &handler)
}

#[test]
fn empty_source_is_just_eof() {
    let toks = lex("");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind, TokenKind::Eof);
}

#[test]
fn only_whitespace_is_just_eof() {
    let toks = lex("   \n\t\n  ");
    assert_eq!(toks.len(), 1);
}

#[test]
fn line_comment_without_trailing_newline() {
    let toks = lex("1 // trailing comment, no newline");
    assert_eq!(toks.len(), 2); // NUM, EOF
}

#[test]
fn block_comment_between_tokens() {
    let toks = lex("1 /* skip me */ + 2");
    let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Num, TokenKind::Punct, TokenKind::Num, TokenKind::Eof]);
}

#[test]
fn adjacent_block_comments() {
    let toks = lex("/*a*//*b*/1");
    assert_eq!(toks[0].kind, TokenKind::Num);
}

#[test]
fn four_candidate_two_char_puncts_all_recognized() {
    for (src, expected) in [("==", "=="), ("!=", "!="), ("<=", "<="), (">=", ">=")] {
        let toks = lex(src);
        assert_eq!(toks[0].text, expected, "lexing {src}");
    }
}

#[test]
fn single_equals_is_not_confused_with_equality() {
    let toks = lex("=");
    assert_eq!(toks[0].text, "=");
    assert_eq!(toks[0].span.len(), 1);
}

#[test]
fn empty_string_literal_decodes_to_nul_only() {
    let toks = lex("\"\"");
    assert_eq!(toks[0].str_value, vec![0]);
    assert_eq!(toks[0].str_type.as_ref().unwrap().size(), 1);
}

#[test]
fn unknown_escape_falls_back_to_the_literal_byte() {
    let toks = lex("\"\\q\"");
    assert_eq!(toks[0].str_value, vec![b'q', 0]);
}

#[test]
fn named_escapes_decode_to_their_control_bytes() {
    let toks = lex("\"\\a\\b\\t\\n\\v\\f\\r\\e\"");
    assert_eq!(
        toks[0].str_value,
        vec![0x07, 0x08, b'\t', b'\n', 0x0b, 0x0c, b'\r', 0x1b, 0]
    );
}

#[test]
fn identifier_allows_leading_underscore_and_digits_after() {
    let toks = lex("_foo9");
    assert_eq!(toks[0].kind, TokenKind::Ident);
    assert_eq!(toks[0].text, "_foo9");
}

#[test]
fn number_followed_directly_by_identifier_splits_into_two_tokens() {
    let toks = lex("3abc");
    assert_eq!(toks[0].kind, TokenKind::Num);
    assert_eq!(toks[0].text, "3");
    assert_eq!(toks[1].kind, TokenKind::Ident);
    assert_eq!(toks[1].text, "abc");
}

#[test]
fn all_keywords_are_retagged() {
    for kw in crate::KEYWORDS {
        let toks = lex(kw);
        assert_eq!(toks[0].kind, TokenKind::Keyword, "{kw} should be a keyword");
    }
}
