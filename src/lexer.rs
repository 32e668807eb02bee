use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, trace};

use crate::token::{Location, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// End of input inside a double-quoted string.
    UnterminatedString,
    /// Character that cannot start any token.
    UnknownCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "string not terminated")
            }
            Self::UnknownCharacter(ch) => {
                write!(f, "unknown character '{ch}'")
            }
        }
    }
}

/// Error produced during lexing. Always fatal for the lexer that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{location}] {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: Location,
}

/// Lex a whole source string, including the trailing `END` token.
///
/// # Errors
///
/// Returns `LexError` on the first unterminated string or unknown
/// character.
pub fn tokenize(name: &str, input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(name, input.chars())?.into_tokens()
}

/// Lexer that owns its source text.
pub type SourceLexer = Lexer<SourceChars>;

/// Owning character iterator over a source string.
#[derive(Debug, Clone)]
pub struct SourceChars {
    text: String,
    pos: usize,
}

impl SourceChars {
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for SourceChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.text.get(self.pos..)?.chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}

/// Pull-based lexer over a stream of characters.
///
/// The lexer always holds a current token: construction scans the
/// first one, and every [`advance`](Self::advance) replaces it.
#[derive(Debug)]
pub struct Lexer<I> {
    chars: I,
    lookahead: Option<char>,
    location: Location,
    token: Token,
}

impl SourceLexer {
    /// Lexer over an in-memory source.
    ///
    /// # Errors
    ///
    /// Returns `LexError` if the first token is malformed.
    pub fn from_source(
        name: impl Into<Arc<str>>,
        text: impl Into<String>,
    ) -> Result<Self, LexError> {
        Self::new(name, SourceChars::new(text.into()))
    }

    /// Read the file at `path` and lex it, using the path as source name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, or `Error::Lex` if
    /// the first token is malformed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened {} ({} bytes)", path.display(), text.len());
        Ok(Self::from_source(path.display().to_string(), text)?)
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Create a lexer over `chars` and scan the first token.
    ///
    /// # Errors
    ///
    /// Returns `LexError` if the first token is malformed.
    pub fn new(name: impl Into<Arc<str>>, mut chars: I) -> Result<Self, LexError> {
        let location = Location::start(name);
        let lookahead = chars.next();
        let mut lexer = Self {
            chars,
            lookahead,
            token: Token::end(location.clone()),
            location,
        };
        debug!("lexing {}", lexer.location.name);
        lexer.advance()?;
        Ok(lexer)
    }

    /// The current token.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Location of the next unconsumed character.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Scan the next token and make it current.
    ///
    /// At end of input this keeps producing `END`. After an error the
    /// lexer must not be used further.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an unterminated string or a character that
    /// cannot start a token.
    pub fn advance(&mut self) -> Result<&Token, LexError> {
        while self.lookahead.is_some_and(is_space) {
            self.bump();
        }

        let location = self.location.clone();
        let kind = self.scan()?;
        self.token = Token::new(kind, location);
        trace!("{} {}", self.token.location, self.token);
        Ok(&self.token)
    }

    /// Drain the lexer: the current token and every one after it, up
    /// to and including `END`.
    pub fn into_tokens(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while !self.token.is_end() {
            tokens.push(self.token.clone());
            self.advance()?;
        }
        tokens.push(self.token);
        Ok(tokens)
    }

    fn scan(&mut self) -> Result<TokenKind, LexError> {
        let Some(ch) = self.lookahead else {
            return Ok(TokenKind::End);
        };

        if let Some(kind) = TokenKind::punctuation(ch) {
            self.bump();
            return Ok(kind);
        }

        match ch {
            '=' => {
                self.bump();
                if self.lookahead == Some('=') {
                    self.bump();
                    Ok(TokenKind::Equality)
                } else {
                    Ok(TokenKind::Equal)
                }
            }
            '"' => self.read_string(),
            _ if is_ident_start(ch) => Ok(self.read_word()),
            _ if ch.is_ascii_digit() => Ok(self.read_integer()),
            _ => Err(self.error(LexErrorKind::UnknownCharacter(ch))),
        }
    }

    fn bump(&mut self) {
        if let Some(ch) = self.lookahead {
            self.location.step(ch);
            self.lookahead = self.chars.next();
        }
    }

    fn read_string(&mut self) -> Result<TokenKind, LexError> {
        self.bump(); // opening quote

        let mut text = String::new();
        loop {
            match self.lookahead {
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
                Some('"') => {
                    self.bump();
                    return Ok(TokenKind::String(text));
                }
                Some(ch) => {
                    text.push(ch);
                    self.bump();
                }
            }
        }
    }

    fn read_word(&mut self) -> TokenKind {
        let mut word = String::new();
        while let Some(ch) = self.lookahead.filter(|&c| is_ident_char(c)) {
            word.push(ch);
            self.bump();
        }
        TokenKind::keyword(&word).unwrap_or(TokenKind::Ident(word))
    }

    // Overflow wraps silently; long digit runs are not diagnosed.
    fn read_integer(&mut self) -> TokenKind {
        let mut value: u64 = 0;
        while let Some(digit) = self.lookahead.and_then(|c| c.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(u64::from(digit));
            self.bump();
        }
        TokenKind::Int(value)
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        let error = LexError {
            kind,
            location: self.location.clone(),
        };
        debug!("{error}");
        error
    }
}

/// The C-locale space class.
const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

const fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

const fn is_ident_char(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}
