//! # Symbol Token Handling
//!
//! Every punctuation or operator rune the tokenizer distinguishes gets its own
//! [`Symbol`] tag. Symbols are always a single rune wide; there are no
//! multi-character operators.
//!
//! Each variant parses from its rune (`"{"`) and from its tag name
//! (`"LBRACE"`), and displays as the tag name.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Punctuation and operator runes recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Symbol {
    /// `{`
    #[strum(to_string = "LBRACE", serialize = "{")]
    LeftBrace,
    /// `}`
    #[strum(to_string = "RBRACE", serialize = "}")]
    RightBrace,
    /// `(`
    #[strum(to_string = "LPAREN", serialize = "(")]
    LeftParen,
    /// `)`
    #[strum(to_string = "RPAREN", serialize = ")")]
    RightParen,
    /// `=`
    #[strum(to_string = "ASSIGN", serialize = "=")]
    Assign,
    /// `:`
    #[strum(to_string = "COLON", serialize = ":")]
    Colon,
    /// `,`
    #[strum(to_string = "COMMA", serialize = ",")]
    Comma,
    /// `;`
    #[strum(to_string = "SEMICOLON", serialize = ";")]
    Semicolon,
    /// `|`
    #[strum(to_string = "PIPE", serialize = "|")]
    Pipe,
    /// `"`
    #[strum(to_string = "QUOTE", serialize = "\"")]
    Quote,
    /// `'`
    #[strum(to_string = "APOSTROPHE", serialize = "'")]
    Apostrophe,
    /// `-`
    #[strum(to_string = "MINUS", serialize = "-")]
    Minus,
    /// `+`
    #[strum(to_string = "PLUS", serialize = "+")]
    Plus,
    /// `*`
    #[strum(to_string = "ASTERISK", serialize = "*")]
    Asterisk,
    /// `/`
    #[strum(to_string = "SLASH", serialize = "/")]
    Slash,
    /// `%`
    #[strum(to_string = "PERCENT", serialize = "%")]
    Percent,
    /// `^`
    #[strum(to_string = "CARET", serialize = "^")]
    Caret,
    /// `&`
    #[strum(to_string = "AMPERSAND", serialize = "&")]
    Ampersand,
    /// `_`
    #[strum(to_string = "UNDERSCORE", serialize = "_")]
    Underscore,
    /// `@`
    #[strum(to_string = "AT", serialize = "@")]
    At,
    /// `!`
    #[strum(to_string = "EXCLAMATION", serialize = "!")]
    Exclamation,
    /// `.`
    #[strum(to_string = "PERIOD", serialize = ".")]
    Period,
    /// `?`
    #[strum(to_string = "QUESTION", serialize = "?")]
    Question,
}

impl Symbol {
    /// Classifies a single rune.
    ///
    /// # Examples
    ///
    /// ```
    /// # use runecase::tokenizer::symbol::Symbol;
    /// assert_eq!(Symbol::from_char('{'), Some(Symbol::LeftBrace));
    /// assert_eq!(Symbol::from_char('a'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        let s: &str = c.encode_utf8(&mut buf);
        // Tag names are several runes long, so a single rune only ever
        // matches a symbol serialization.
        Symbol::from_str(s).ok()
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::LeftBrace => '{',
            Symbol::RightBrace => '}',
            Symbol::LeftParen => '(',
            Symbol::RightParen => ')',
            Symbol::Assign => '=',
            Symbol::Colon => ':',
            Symbol::Comma => ',',
            Symbol::Semicolon => ';',
            Symbol::Pipe => '|',
            Symbol::Quote => '"',
            Symbol::Apostrophe => '\'',
            Symbol::Minus => '-',
            Symbol::Plus => '+',
            Symbol::Asterisk => '*',
            Symbol::Slash => '/',
            Symbol::Percent => '%',
            Symbol::Caret => '^',
            Symbol::Ampersand => '&',
            Symbol::Underscore => '_',
            Symbol::At => '@',
            Symbol::Exclamation => '!',
            Symbol::Period => '.',
            Symbol::Question => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_symbols() {
        let test_cases = [
            ('{', Symbol::LeftBrace),
            ('}', Symbol::RightBrace),
            ('(', Symbol::LeftParen),
            (')', Symbol::RightParen),
            ('=', Symbol::Assign),
            (':', Symbol::Colon),
            ('|', Symbol::Pipe),
            ('"', Symbol::Quote),
            ('\'', Symbol::Apostrophe),
            ('_', Symbol::Underscore),
            ('?', Symbol::Question),
        ];

        for (input, expected) in test_cases.iter() {
            assert_eq!(Symbol::from_char(*input), Some(*expected));
        }
    }

    // every symbol must classify back from its own rune
    #[test]
    fn test_all_symbols() {
        for symbol in Symbol::iter() {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }
    }

    #[test]
    fn test_display_uses_tag_name() {
        assert_eq!(Symbol::LeftBrace.to_string(), "LBRACE");
        assert_eq!(Symbol::Underscore.to_string(), "UNDERSCORE");
        assert_eq!(Symbol::from_str("LBRACE").unwrap(), Symbol::LeftBrace);
    }

    #[test]
    fn test_unknown_runes() {
        for c in ['a', '1', ' ', '#', '$', '[', '<', 'é'] {
            assert_eq!(Symbol::from_char(c), None, "{c:?}");
        }
    }
}
