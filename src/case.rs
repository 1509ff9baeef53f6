//! # Identifier Case Conversion
//!
//! Converts free text or mixed-case identifiers into a target casing. Only
//! [`TokenKind::Identifier`] tokens contribute to the output; numbers,
//! punctuation and whitespace act as word breaks and are dropped.
//!
//! Every convention is the same two steps over each identifier: split at
//! uppercase boundaries with [`Token::split_upper`], then transform each
//! segment through [`Token::join`].

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, InternalResult},
    tokenizer::{
        token::{lowercase, upper_first, uppercase},
        tokenize, Token, TokenKind,
    },
};

/// Target casing conventions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// `fooBarBaz`
    #[default]
    Camel,
    /// `foo_bar_baz`
    Snake,
    /// `FooBarBaz`
    Pascal,
    /// `foo-bar-baz`
    Kebab,
    /// `FOO_BAR_BAZ`
    ScreamingSnake,
}

impl Case {
    /// Parses a case name such as `snake` or `screaming_snake`.
    pub fn parse(name: &str) -> InternalResult<Self> {
        name.trim()
            .parse()
            .map_err(|_| Error::UnknownCase(name.to_string()))
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Case::Camel => to_camel_case(input),
            Case::Snake => to_snake_case(input),
            Case::Pascal => to_pascal_case(input),
            Case::Kebab => to_kebab_case(input),
            Case::ScreamingSnake => to_screaming_snake_case(input),
        }
    }
}

fn identifiers(input: &str) -> impl Iterator<Item = Token> {
    tokenize(input)
        .into_iter()
        .filter(|token| token.kind == TokenKind::Identifier)
}

/// Converts `input` to camelCase.
///
/// The first segment of the first identifier is lowercased. Each later
/// identifier gets its first rune uppercased. All other segments are copied
/// as scanned.
///
/// # Examples
///
/// ```
/// # use runecase::case::to_camel_case;
/// assert_eq!(to_camel_case("testing_case testing"), "testingCaseTesting");
/// assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
/// ```
#[tracing::instrument(level = "debug")]
pub fn to_camel_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for (word, token) in identifiers(input).enumerate() {
        let converted = token.join(Token::split_upper, |segment, text| match (word, segment) {
            (0, 0) => lowercase(text),
            (_, 0) => upper_first(text),
            _ => text.to_string(),
        });
        output.push_str(&converted);
    }
    output
}

/// Converts `input` to PascalCase: like camelCase, but the first identifier
/// is capitalized too.
#[tracing::instrument(level = "debug")]
pub fn to_pascal_case(input: &str) -> String {
    identifiers(input)
        .map(|token| {
            token.join(Token::split_upper, |segment, text| match segment {
                0 => upper_first(text),
                _ => text.to_string(),
            })
        })
        .collect()
}

/// Converts `input` to snake_case.
///
/// # Examples
///
/// ```
/// # use runecase::case::to_snake_case;
/// assert_eq!(to_snake_case("TestingCase"), "testing_case");
/// assert_eq!(to_snake_case(" Testing_@@@testing _______testing"), "testing_testing_testing");
/// ```
#[tracing::instrument(level = "debug")]
pub fn to_snake_case(input: &str) -> String {
    separated(input, '_', lowercase)
}

#[tracing::instrument(level = "debug")]
pub fn to_kebab_case(input: &str) -> String {
    separated(input, '-', lowercase)
}

#[tracing::instrument(level = "debug")]
pub fn to_screaming_snake_case(input: &str) -> String {
    separated(input, '_', uppercase)
}

/// Transforms every uppercase-delimited segment and puts `separator` before
/// each one except the very first segment emitted.
fn separated<F>(input: &str, separator: char, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut output = String::with_capacity(input.len());
    let mut emitted = false;
    for token in identifiers(input) {
        let converted = token.join(Token::split_upper, |_, text| {
            let segment = transform(text);
            if std::mem::replace(&mut emitted, true) {
                format!("{separator}{segment}")
            } else {
                segment
            }
        });
        output.push_str(&converted);
    }
    output
}
