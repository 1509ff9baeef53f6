//! # Token Model
//!
//! A [`Token`] names one classified span of the source text. Offsets are rune
//! offsets (`start` inclusive, `end` exclusive), matching the cursor of the
//! [`Scanner`](super::scanner::Scanner).
//!
//! Tokens own a copy of their text, so they stay valid after the source string
//! is dropped.
//!
//! ## Splitting and Joining
//!
//! [`Token::split`] cuts a token's text at every rune (other than the first)
//! where a predicate holds. Nothing is dropped: every rune lands in exactly one
//! sub-token. [`Token::join`] pairs a split strategy with a per-segment
//! transform and concatenates the results, which is all a casing convention
//! needs.

use std::fmt;

use super::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of letters
    Identifier,
    /// Maximal run of decimal digits
    Number,
    Whitespace,
    /// `{...}` span, delimiters included
    Placeholder,
    Symbol(Symbol),
    /// Single rune the tokenizer does not recognize
    Invalid,
    EndOfInput,
    /// Literal run between placeholders
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => f.write_str("IDENT"),
            TokenKind::Number => f.write_str("NUMBER"),
            TokenKind::Whitespace => f.write_str("SPACE"),
            TokenKind::Placeholder => f.write_str("PLACEHOLDER"),
            TokenKind::Symbol(symbol) => write!(f, "{}", symbol),
            TokenKind::Invalid => f.write_str("INVALID"),
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Text => f.write_str("TEXT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// Set by the segment scanner on the final token it emits.
    pub is_last: bool,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}:{}]", self.kind, self.text, self.start, self.end)
    }
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
            is_last: false,
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), position, position)
    }

    /// Number of runes covered by the token.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn trim(&self) -> &str {
        self.text.trim()
    }

    /// The lookup key of a placeholder: surrounding whitespace trimmed, one
    /// leading and one trailing delimiter stripped, then trimmed again.
    ///
    /// # Examples
    ///
    /// ```
    /// # use runecase::tokenizer::token::{Token, TokenKind};
    /// let token = Token::new(TokenKind::Placeholder, "{ NAME }", 0, 8);
    /// assert_eq!(token.key(), "NAME");
    /// ```
    pub fn key(&self) -> &str {
        let mut chars = self.trim().chars();
        chars.next();
        chars.next_back();
        chars.as_str().trim()
    }

    pub fn is_upper(&self) -> bool {
        self.first_rune_is(char::is_uppercase)
    }

    pub fn is_lower(&self) -> bool {
        self.first_rune_is(char::is_lowercase)
    }

    pub fn is_digit(&self) -> bool {
        self.first_rune_is(is_digit)
    }

    pub fn is_letter(&self) -> bool {
        self.first_rune_is(char::is_alphabetic)
    }

    fn first_rune_is(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.text.chars().next().is_some_and(predicate)
    }

    /// Splits the token at every rune index past the first where `boundary`
    /// holds.
    ///
    /// Sub-tokens keep the parent's kind and carry absolute rune offsets into
    /// the original source. An empty token yields no sub-tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use runecase::tokenizer::token::{Token, TokenKind};
    /// let token = Token::new(TokenKind::Identifier, "parseHttpRequest", 0, 16);
    /// let parts: Vec<_> = token
    ///     .split(char::is_uppercase)
    ///     .into_iter()
    ///     .map(|t| t.text)
    ///     .collect();
    /// assert_eq!(parts, ["parse", "Http", "Request"]);
    /// ```
    pub fn split<P>(&self, boundary: P) -> Vec<Token>
    where
        P: Fn(char) -> bool,
    {
        let runes: Vec<char> = self.text.chars().collect();
        let mut tokens = Vec::new();
        let mut start = 0;

        for (i, &c) in runes.iter().enumerate().skip(1) {
            if boundary(c) {
                tokens.push(self.sub_token(&runes, start, i));
                start = i;
            }
        }

        if start < runes.len() {
            tokens.push(self.sub_token(&runes, start, runes.len()));
        }

        tokens
    }

    fn sub_token(&self, runes: &[char], start: usize, end: usize) -> Token {
        Token::new(
            self.kind,
            runes[start..end].iter().collect::<String>(),
            self.start + start,
            self.start + end,
        )
    }

    pub fn split_upper(&self) -> Vec<Token> {
        self.split(char::is_uppercase)
    }

    pub fn split_lower(&self) -> Vec<Token> {
        self.split(char::is_lowercase)
    }

    pub fn split_digit(&self) -> Vec<Token> {
        self.split(is_digit)
    }

    pub fn split_letter(&self) -> Vec<Token> {
        self.split(char::is_alphabetic)
    }

    pub fn split_space(&self) -> Vec<Token> {
        self.split(char::is_whitespace)
    }

    pub fn split_punct(&self) -> Vec<Token> {
        self.split(is_punctuation)
    }

    /// Splits with `splitter`, maps every segment through `transform`, and
    /// concatenates the results with no separator.
    ///
    /// `transform` receives the segment index within this token, so
    /// separators can be injected per position.
    pub fn join<S, T>(&self, splitter: S, mut transform: T) -> String
    where
        S: Fn(&Token) -> Vec<Token>,
        T: FnMut(usize, &str) -> String,
    {
        splitter(self)
            .iter()
            .enumerate()
            .map(|(index, segment)| transform(index, &segment.text))
            .collect()
    }

    pub fn join_upper(&self) -> String {
        self.join(Token::split_upper, |_, s| uppercase(s))
    }

    pub fn join_lower(&self) -> String {
        self.join(Token::split_lower, |_, s| lowercase(s))
    }

    pub fn join_digit(&self) -> String {
        self.join(Token::split_digit, |_, s| s.to_string())
    }

    pub fn join_letter(&self) -> String {
        self.join(Token::split_letter, |_, s| s.to_string())
    }

    /// Uppercases the first rune of every uppercase-delimited segment.
    pub fn upper_first(&self) -> String {
        self.join(Token::split_upper, |_, s| upper_first(s))
    }

    /// Lowercases the first rune of every uppercase-delimited segment.
    pub fn lower_first(&self) -> String {
        self.join(Token::split_upper, |_, s| lower_first(s))
    }
}

/// Decimal digits `0-9`. Fractions, superscripts and other numeric
/// symbols are not digits.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII punctuation. Non-ASCII punctuation is not classified.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

// Per-rune mappings, no final-sigma context handling.
pub(crate) fn lowercase(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

pub(crate) fn uppercase(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
