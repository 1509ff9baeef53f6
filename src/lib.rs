//! # runecase: rune-safe tokenizing, case conversion and placeholder substitution
//!
//! runecase is a small text-transformation library built on one hand-rolled
//! scanner. It has two capabilities:
//!
//! - Identifier case conversion ([`case`]): camelCase, snake_case and
//!   friends, over natural-language or mixed-case input
//! - Placeholder substitution ([`substitute`]): replacing `{NAME}` spans from
//!   a table or a function while copying all other text verbatim
//!
//! ## Processing Pipeline
//!
//! ```text
//! raw text → Scanner → Tokenizer → Token sequence → { Case converter | Substitutor } → String
//! ```
//!
//! ### Stage 1: Scanning
//!
//! The [`tokenizer::scanner`] walks the input one `char` at a time. Every
//! offset in this crate is a rune offset, never a byte offset.
//!
//! ### Stage 2: Tokenization
//!
//! The [`tokenizer`] module classifies spans into [`Token`]s: identifiers,
//! numbers, whitespace, single-rune symbols, placeholders and text runs.
//!
//! ### Stage 3: Transformation
//!
//! [`case`] keeps only identifier tokens, splits them at uppercase boundaries
//! and reassembles the segments. [`substitute`] keeps only placeholder tokens
//! and interleaves looked-up values with the untouched source text.
//!
//! ## Errors
//!
//! The core never fails. [`Error`] only covers configuration loading and
//! command-line plumbing ([`config`]).
//!
//! ## Concurrency
//!
//! Every call builds its own scanner and tokens; there is no global state.

pub mod case;
pub mod config;
pub mod error;
pub mod substitute;
pub mod tokenizer;

// Re-exports
pub use case::{
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case, Case,
};
pub use error::*;
pub use substitute::{render, substitute, Replacer};
pub use tokenizer::{tokenize, tokenize_placeholders, tokenize_segments, Token, TokenKind};
