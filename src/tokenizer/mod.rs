//! # Tokenizer Component
//!
//! The tokenizer turns raw text into classified, positioned [`Token`]s that the
//! case converter and the placeholder substitutor work from.
//!
//! ## Design Principles
//!
//! * **Rune offsets**: every position is counted in `char`s, so multi-byte
//!   input is never cut mid-character.
//! * **Tolerant scanning**: nothing here returns an error. Exhausted input and
//!   unterminated placeholders end a scan quietly, keeping what was already
//!   scanned.
//! * **No shared state**: each [`Tokenizer`] owns its [`Scanner`] and is built
//!   fresh per input.
//!
//! ## Component Structure
//!
//! * [`scanner`]: rune cursor with lookahead, rewind and delimited reads
//! * [`symbol`]: the single-rune punctuation tags
//! * [`token`]: token kinds, tokens, boundary splitting and joining
//! * [`tokenizer`]: the three scanning modes
//!
//! ## Scanning Modes
//!
//! 1. [`tokenize`]: full classification, ending in [`TokenKind::EndOfInput`]
//! 2. [`tokenize_placeholders`]: only `{...}` spans
//! 3. [`tokenize_segments`]: alternating text and placeholder spans covering the input
//!
//! ## Usage Example
//!
//! ```rust
//! use runecase::tokenizer::{tokenize_placeholders, TokenKind};
//!
//! let tokens = tokenize_placeholders("id:{ID}/name:{NAME}");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "{NAME}");
//! assert_eq!((tokens[1].start, tokens[1].end), (13, 19));
//! assert!(tokens.iter().all(|t| t.kind == TokenKind::Placeholder));
//! ```

pub mod scanner;
pub mod symbol;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use scanner::{ReadOutcome, Scanner};
pub use symbol::Symbol;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_placeholders, tokenize_segments, Tokenizer};
