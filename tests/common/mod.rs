#![allow(dead_code)]

use imp_lex::{LexError, TokenKind, tokenize};

/// Lex `input` and return only the token kinds.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize("test.imp", input)
        .unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Lex `input` and return each token's `(line, column)`.
pub fn positions(input: &str) -> Vec<(usize, usize)> {
    tokenize("test.imp", input)
        .unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"))
        .into_iter()
        .map(|t| (t.location.line, t.location.column))
        .collect()
}

/// Lex `input`, expecting it to fail.
pub fn lex_error(input: &str) -> LexError {
    match tokenize("test.imp", input) {
        Ok(tokens) => panic!("expected {input:?} to fail, got {tokens:?}"),
        Err(e) => e,
    }
}

pub fn ident(text: &str) -> TokenKind {
    TokenKind::Ident(text.to_string())
}

pub fn string(text: &str) -> TokenKind {
    TokenKind::String(text.to_string())
}
