use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

/// Source location of a token or error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Name of the source unit, usually a file path.
    pub name: Arc<str>,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Location {
    /// Location of the first character of the source `name`.
    #[must_use]
    pub fn start(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            line: 1,
            column: 1,
        }
    }

    /// Move past `ch`.
    pub(crate) const fn step(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
///
/// Literal kinds carry their payload, so a payload can only be read
/// from a token that has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    End,
    /// Identifier.
    Ident(String),
    /// Double-quoted string, contents taken verbatim.
    String(String),
    /// Unsigned decimal integer.
    Int(u64),

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `:`
    Colon,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Equal,
    /// `==`
    Equality,

    /// `func`
    Func,
    /// `return`
    Return,
    /// `while`
    While,
    /// `if`
    If,
    /// `else`
    Else,
}

impl TokenKind {
    /// Look up a reserved word.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        KEYWORDS.get(word).cloned()
    }

    /// Kind of a single-character punctuation token.
    #[must_use]
    pub const fn punctuation(ch: char) -> Option<Self> {
        let kind = match ch {
            '(' => Self::LParen,
            ')' => Self::RParen,
            '{' => Self::LBrace,
            '}' => Self::RBrace,
            ':' => Self::Colon,
            ';' => Self::Semi,
            ',' => Self::Comma,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '*' => Self::Star,
            '/' => Self::Slash,
            '%' => Self::Percent,
            _ => return None,
        };
        Some(kind)
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::End => "END",
            Self::Ident(_) => "IDENT",
            Self::String(_) => "STRING",
            Self::Int(_) => "INT",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Colon => ":",
            Self::Semi => ";",
            Self::Comma => ",",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equal => "=",
            Self::Equality => "==",
            Self::Func => "func",
            Self::Return => "return",
            Self::While => "while",
            Self::If => "if",
            Self::Else => "else",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(text) | Self::String(text) => {
                write!(f, "{}(\"{text}\")", self.name())
            }
            Self::Int(value) => write!(f, "{}({value})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// A single token with its kind and the location of its first character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

macro_rules! fixed_tokens {
    ($($(#[$doc:meta])* $name:ident => $kind:ident,)*) => {
        impl Token {
            $(
                $(#[$doc])*
                #[must_use]
                pub const fn $name(location: Location) -> Self {
                    Self::new(TokenKind::$kind, location)
                }
            )*
        }
    };
}

fixed_tokens! {
    /// End of input.
    end => End,
    /// `(`
    lparen => LParen,
    /// `)`
    rparen => RParen,
    /// `{`
    lbrace => LBrace,
    /// `}`
    rbrace => RBrace,
    /// `:`
    colon => Colon,
    /// `;`
    semi => Semi,
    /// `,`
    comma => Comma,
    /// `+`
    plus => Plus,
    /// `-`
    minus => Minus,
    /// `*`
    star => Star,
    /// `/`
    slash => Slash,
    /// `%`
    percent => Percent,
    /// `=`
    equal => Equal,
    /// `==`
    equality => Equality,
    /// `func`
    func => Func,
    /// `return`
    return_ => Return,
    /// `while`
    while_ => While,
    /// `if`
    if_ => If,
    /// `else`
    else_ => Else,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Identifier token.
    #[must_use]
    pub fn ident(location: Location, text: impl Into<String>) -> Self {
        Self::new(TokenKind::Ident(text.into()), location)
    }

    /// String literal token.
    #[must_use]
    pub fn string(location: Location, text: impl Into<String>) -> Self {
        Self::new(TokenKind::String(text.into()), location)
    }

    /// Integer literal token.
    #[must_use]
    pub const fn integer(location: Location, value: u64) -> Self {
        Self::new(TokenKind::Int(value), location)
    }

    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }

    /// Name of an identifier token.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(text) => Some(text),
            _ => None,
        }
    }

    /// Contents of a string literal token.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::String(text) => Some(text),
            _ => None,
        }
    }

    /// Value of an integer literal token.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self.kind {
            TokenKind::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> Location {
        Location::start("test.imp")
    }

    #[test]
    fn render_fixed_kinds() {
        assert_eq!(Token::lparen(here()).to_string(), "(");
        assert_eq!(Token::equality(here()).to_string(), "==");
        assert_eq!(Token::percent(here()).to_string(), "%");
        assert_eq!(Token::while_(here()).to_string(), "while");
        assert_eq!(Token::end(here()).to_string(), "END");
    }

    #[test]
    fn render_literals() {
        assert_eq!(Token::ident(here(), "x").to_string(), "IDENT(\"x\")");
        assert_eq!(Token::string(here(), "a b").to_string(), "STRING(\"a b\")");
        assert_eq!(Token::integer(here(), 42).to_string(), "INT(42)");
    }

    #[test]
    fn payload_follows_kind() {
        let ident = Token::ident(here(), "name");
        assert_eq!(ident.as_ident(), Some("name"));
        assert_eq!(ident.as_string(), None);
        assert_eq!(ident.as_integer(), None);

        let int = Token::integer(here(), 7);
        assert_eq!(int.as_integer(), Some(7));
        assert_eq!(int.as_ident(), None);

        assert_eq!(Token::plus(here()).as_string(), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = Token::string(here(), "abc");
        let mut copy = original.clone();
        if let TokenKind::String(text) = &mut copy.kind {
            text.push('d');
        }
        assert_eq!(original.as_string(), Some("abc"));
        assert_eq!(copy.as_string(), Some("abcd"));
    }

    #[test]
    fn keyword_table() {
        assert_eq!(TokenKind::keyword("func"), Some(TokenKind::Func));
        assert_eq!(TokenKind::keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::keyword("else"), Some(TokenKind::Else));
        assert_eq!(TokenKind::keyword("Func"), None);
        assert_eq!(TokenKind::keyword("func2"), None);
    }

    #[test]
    fn location_steps() {
        let mut loc = here();
        loc.step('a');
        assert_eq!((loc.line, loc.column), (1, 2));
        loc.step('\n');
        assert_eq!((loc.line, loc.column), (2, 1));
        assert_eq!(loc.to_string(), "test.imp:2:1");
    }
}
