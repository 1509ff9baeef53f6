//! # Rune Scanner
//!
//! The [`Scanner`] is the cursor every tokenizing mode is built on. It owns the
//! input as a sequence of `char`s so that positions are always rune offsets,
//! never byte offsets, and multi-byte characters can never be split.
//!
//! ## Cursor Model
//!
//! * [`Scanner::peek`] looks at the rune under the cursor
//! * [`Scanner::next`] returns it and moves one rune forward
//! * [`Scanner::rewind`] / [`Scanner::rewind_by`] step back for lookahead correction
//!
//! Exhaustion is never an error: reads past the end return `None`, and a
//! delimited read that runs out of input reports [`ReadOutcome::Exhausted`].

use super::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Scanner {
    input: Vec<char>,
    position: usize,
}

/// Result of [`Scanner::read_until`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The closing delimiter was consumed; the token spans both delimiters.
    Found(Token),
    /// Input ran out first. The token is tagged [`TokenKind::EndOfInput`] and
    /// carries whatever was consumed.
    Exhausted(Token),
}

impl ReadOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ReadOutcome::Found(_))
    }

    pub fn token(&self) -> &Token {
        match self {
            ReadOutcome::Found(token) | ReadOutcome::Exhausted(token) => token,
        }
    }

    pub fn into_token(self) -> Token {
        match self {
            ReadOutcome::Found(token) | ReadOutcome::Exhausted(token) => token,
        }
    }

    /// Returns the token only when the read succeeded.
    pub fn found(self) -> Option<Token> {
        match self {
            ReadOutcome::Found(token) => Some(token),
            ReadOutcome::Exhausted(_) => None,
        }
    }
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Returns the rune under the cursor and advances past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Looks `n` runes ahead of the cursor without moving it.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Moves the cursor forward, stopping at the end of input.
    pub fn advance_by(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    pub fn rewind(&mut self) {
        self.rewind_by(1);
    }

    pub fn rewind_by(&mut self, n: usize) {
        self.position = self.position.saturating_sub(n);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of runes in the input.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Copies the runes in `start..end` into a `String`. Bounds are clamped
    /// to the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.input.len());
        let start = start.min(end);
        self.input[start..end].iter().collect()
    }

    pub fn skip_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// Advances over a maximal run of runes matching `predicate` and returns
    /// how many were consumed.
    pub fn consume_while<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.position += 1;
        }
        self.position - start
    }

    /// Reads a delimited span such as `{NAME}`.
    ///
    /// Usually called with the cursor just past `open`, in which case the
    /// span starts at that opening rune. Otherwise leading whitespace is
    /// skipped and an `open` under the cursor is consumed. Runes are then
    /// consumed up to and including the first `close`, and the returned
    /// token is tagged `kind`.
    ///
    /// If input ends before `close`, the cursor is left at the end of input
    /// and an [`ReadOutcome::Exhausted`] token holds the partial span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use runecase::tokenizer::scanner::Scanner;
    /// # use runecase::tokenizer::token::TokenKind;
    /// let mut scanner = Scanner::new("{ID}/rest");
    /// scanner.advance();
    /// let outcome = scanner.read_until('{', '}', TokenKind::Placeholder);
    /// assert!(outcome.is_found());
    /// assert_eq!(outcome.token().text, "{ID}");
    /// assert_eq!(scanner.position(), 4);
    /// ```
    #[tracing::instrument(level = "trace", skip(self, kind))]
    pub fn read_until(&mut self, open: char, close: char, kind: TokenKind) -> ReadOutcome {
        let after_open = self.position > 0
            && self.input.get(self.position - 1) == Some(&open)
            && self.peek() != Some(open);

        let start = if after_open {
            self.position - 1
        } else {
            self.skip_whitespace();
            let start = self.position;
            if self.peek() == Some(open) {
                self.position += 1;
            }
            start
        };

        loop {
            match self.next() {
                Some(c) if c == close => break,
                Some(_) => continue,
                None => {
                    tracing::trace!(start, "no closing `{}` before end of input", close);
                    let partial = self.slice(start, self.position);
                    return ReadOutcome::Exhausted(Token::new(
                        TokenKind::EndOfInput,
                        partial,
                        start,
                        self.position,
                    ));
                }
            }
        }

        let end = self.position;
        ReadOutcome::Found(Token::new(kind, self.slice(start, end), start, end))
    }
}
