use super::{
    scanner::{ReadOutcome, Scanner},
    symbol::Symbol,
    token::{is_digit, Token, TokenKind},
};

const PLACEHOLDER_OPEN: char = '{';
const PLACEHOLDER_CLOSE: char = '}';

/// Single-pass tokenizer over one input string.
///
/// A tokenizer is consumed by whichever mode runs first; build a fresh one per
/// input (or use the free functions [`tokenize`], [`tokenize_placeholders`]
/// and [`tokenize_segments`]).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    scanner: Scanner,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Classifies the whole input. The last token is always
    /// [`TokenKind::EndOfInput`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Scans the next token at the cursor.
    ///
    /// Priority: whitespace run, letter run, digit run, single-rune symbol,
    /// and finally a one-rune [`TokenKind::Invalid`].
    pub fn next_token(&mut self) -> Token {
        let start = self.scanner.position();
        let Some(c) = self.scanner.peek() else {
            return Token::end_of_input(start);
        };

        let kind = if c.is_whitespace() {
            self.scanner.consume_while(char::is_whitespace);
            TokenKind::Whitespace
        } else if c.is_alphabetic() {
            self.scanner.consume_while(char::is_alphabetic);
            TokenKind::Identifier
        } else if is_digit(c) {
            self.scanner.consume_while(is_digit);
            TokenKind::Number
        } else {
            self.scanner.advance();
            match Symbol::from_char(c) {
                Some(symbol) => TokenKind::Symbol(symbol),
                None => {
                    tracing::trace!(position = start, "invalid rune {:?}", c);
                    TokenKind::Invalid
                }
            }
        };

        let end = self.scanner.position();
        Token::new(kind, self.scanner.slice(start, end), start, end)
    }

    /// Emits only the `{...}` spans of the input, in scan order.
    ///
    /// Text between placeholders is not emitted; use each token's offsets
    /// against the original string to recover it. An unterminated `{` ends
    /// the scan.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tokenize_placeholders(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_placeholder().found() {
            tokens.push(token);
        }
        tokens
    }

    /// Skips ahead to the next `{` and reads through the matching `}`.
    pub fn next_placeholder(&mut self) -> ReadOutcome {
        self.scanner.consume_while(|c| c != PLACEHOLDER_OPEN);
        if self.scanner.is_at_end() {
            return ReadOutcome::Exhausted(Token::end_of_input(self.scanner.position()));
        }

        let outcome = self.scanner.read_until(
            PLACEHOLDER_OPEN,
            PLACEHOLDER_CLOSE,
            TokenKind::Placeholder,
        );
        if !outcome.is_found() {
            tracing::debug!(
                start = outcome.token().start,
                "unterminated placeholder, ending scan"
            );
        }
        outcome
    }

    /// Splits the input into alternating [`TokenKind::Text`] and
    /// [`TokenKind::Placeholder`] tokens that cover it contiguously.
    ///
    /// The final token has `is_last` set. An unterminated `{` and everything
    /// after it become one trailing text token. Empty input yields nothing.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn tokenize_segments(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.scanner.is_at_end() {
            let start = self.scanner.position();
            self.scanner.consume_while(|c| c != PLACEHOLDER_OPEN);
            if let Some(text) = self.text_since(start) {
                tokens.push(text);
            }
            if self.scanner.is_at_end() {
                break;
            }

            let open = self.scanner.position();
            match self
                .scanner
                .read_until(PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE, TokenKind::Placeholder)
            {
                ReadOutcome::Found(token) => tokens.push(token),
                // the scanner is now at end of input
                ReadOutcome::Exhausted(_) => {
                    if let Some(text) = self.text_since(open) {
                        tokens.push(text);
                    }
                }
            }
        }

        if let Some(last) = tokens.last_mut() {
            last.is_last = true;
        }
        tokens
    }

    fn text_since(&self, start: usize) -> Option<Token> {
        let end = self.scanner.position();
        (end > start).then(|| {
            Token::new(TokenKind::Text, self.scanner.slice(start, end), start, end)
        })
    }
}

/// Classifies `input` into a flat token sequence ending in
/// [`TokenKind::EndOfInput`].
///
/// # Examples
///
/// ```
/// # use runecase::tokenizer::{tokenize, TokenKind, Symbol};
/// let kinds: Vec<_> = tokenize("id: 42").into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Symbol(Symbol::Colon),
///         TokenKind::Whitespace,
///         TokenKind::Number,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize()
}

pub fn tokenize_placeholders(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize_placeholders()
}

pub fn tokenize_segments(input: &str) -> Vec<Token> {
    Tokenizer::new(input).tokenize_segments()
}
