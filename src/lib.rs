//! Lexer for the IMP language.
//!
//! Turns IMP source text into a stream of tokens, each stamped with
//! the source name, line, and column where it starts. The lexer is a
//! pull cursor: it always holds a current token and scans the next
//! one on [`Lexer::advance`].
//!
//! # Quick start
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use imp_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_source("main.imp", "x = 42;").unwrap();
//! assert_eq!(lexer.token().as_ident(), Some("x"));
//! assert_eq!(lexer.advance().unwrap().kind, TokenKind::Equal);
//! assert_eq!(lexer.advance().unwrap().as_integer(), Some(42));
//! ```
//!
//! ## Lex a whole source
//!
//! ```
//! use imp_lex::tokenize;
//!
//! let tokens = tokenize("main.imp", "func f() { return 1; }").unwrap();
//! let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered.first().map(String::as_str), Some("func"));
//! assert_eq!(rendered.last().map(String::as_str), Some("END"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]
// The keyword table is built with `lazy_static`.
#![allow(clippy::non_std_lazy_statics)]

use std::path::PathBuf;

pub mod lexer;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer, SourceChars, SourceLexer, tokenize};
pub use token::{Location, Token, TokenKind};

/// Unified error type covering source loading and lexing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Read and lex the file at `path` in one step.
pub fn tokenize_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Token>, Error> {
    Ok(Lexer::open(path)?.into_tokens()?)
}
