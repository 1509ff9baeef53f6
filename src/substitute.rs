//! # Placeholder Substitution
//!
//! Rebuilds a string with every `{KEY}` placeholder replaced by a looked-up
//! value while copying all other text verbatim.
//!
//! Token offsets are rune offsets, so they are mapped back to byte offsets of
//! the source before slicing. Substitution is total: it always returns a
//! string, whatever tokens or keys it is given.

use std::{collections::HashMap, fmt, iter};

use crate::tokenizer::{tokenize_placeholders, Token, TokenKind};

/// Resolves placeholder keys to replacement text.
pub enum Replacer<'a> {
    /// Exact, case-sensitive lookup. Unknown keys resolve to `""`.
    Table(&'a HashMap<String, String>),
    /// Arbitrary resolution; unknown keys are whatever the function returns.
    Func(Box<dyn Fn(&str) -> String + 'a>),
}

impl<'a> Replacer<'a> {
    pub fn table(values: &'a HashMap<String, String>) -> Self {
        Replacer::Table(values)
    }

    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + 'a,
    {
        Replacer::Func(Box::new(f))
    }

    pub fn lookup(&self, key: &str) -> String {
        match self {
            Replacer::Table(values) => match values.get(key) {
                Some(value) => value.clone(),
                None => {
                    tracing::debug!(key, "no value for placeholder");
                    String::new()
                }
            },
            Replacer::Func(f) => f(key),
        }
    }
}

impl fmt::Debug for Replacer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacer::Table(values) => f.debug_tuple("Table").field(values).finish(),
            Replacer::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<'a> From<&'a HashMap<String, String>> for Replacer<'a> {
    fn from(values: &'a HashMap<String, String>) -> Self {
        Replacer::Table(values)
    }
}

/// Replaces the placeholder tokens of `input` with values from `replacer`.
///
/// Non-placeholder tokens are ignored and the rest are applied in ascending
/// `start` order, so the order they are passed in does not matter. Each key
/// is the token text with whitespace trimmed and one delimiter pair
/// stripped (see [`Token::key`]).
///
/// # Examples
///
/// ```
/// # use std::collections::HashMap;
/// # use runecase::substitute::substitute;
/// # use runecase::tokenizer::tokenize_placeholders;
/// let input = "id:{ID}/name:{NAME}";
/// let tokens = tokenize_placeholders(input);
/// let values = HashMap::from([
///     ("ID".to_string(), "1".to_string()),
///     ("NAME".to_string(), "John".to_string()),
/// ]);
/// assert_eq!(substitute(input, &tokens, &values), "id:1/name:John");
/// ```
#[tracing::instrument(level = "debug", skip(tokens, replacer))]
pub fn substitute<'a, R>(input: &str, tokens: &[Token], replacer: R) -> String
where
    R: Into<Replacer<'a>>,
{
    let mut placeholders: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Placeholder)
        .collect();
    if placeholders.is_empty() {
        return input.to_string();
    }
    placeholders.sort_by_key(|token| token.start);

    let replacer = replacer.into();
    let offsets = RuneOffsets::new(input);
    let mut output = String::with_capacity(input.len());
    let mut previous_end = 0;

    for token in placeholders {
        let start = token.start.max(previous_end);
        output.push_str(offsets.slice(input, previous_end, start));
        output.push_str(&replacer.lookup(token.key()));
        previous_end = token.end.max(start);
    }
    output.push_str(offsets.slice(input, previous_end, usize::MAX));

    output
}

/// Tokenizes `input` for placeholders and substitutes them in one step.
///
/// # Examples
///
/// ```
/// # use runecase::substitute::{render, Replacer};
/// let greeting = render("Hello, {name}!", Replacer::func(|key| key.to_uppercase()));
/// assert_eq!(greeting, "Hello, NAME!");
/// ```
pub fn render<'a, R>(input: &str, replacer: R) -> String
where
    R: Into<Replacer<'a>>,
{
    substitute(input, &tokenize_placeholders(input), replacer)
}

/// Byte offset of every rune boundary in a string, end included.
struct RuneOffsets(Vec<usize>);

impl RuneOffsets {
    fn new(input: &str) -> Self {
        Self(
            input
                .char_indices()
                .map(|(byte, _)| byte)
                .chain(iter::once(input.len()))
                .collect(),
        )
    }

    fn byte(&self, rune: usize) -> usize {
        self.0[rune.min(self.0.len() - 1)]
    }

    /// Slices `input` by rune offsets, clamped to its length.
    fn slice<'s>(&self, input: &'s str, start: usize, end: usize) -> &'s str {
        let end = self.byte(end);
        let start = self.byte(start).min(end);
        &input[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_with_map() {
        let input = "id:{ID}/name:{NAME}/age:{AGE}/salary:{SALARY}";
        let tokens = tokenize_placeholders(input);
        let table = values(&[
            ("ID", "1"),
            ("NAME", "John"),
            ("SALARY", "50000"),
            ("AGE", "25"),
        ]);
        assert_eq!(
            substitute(input, &tokens, &table),
            "id:1/name:John/age:25/salary:50000"
        );
    }

    #[test]
    fn test_replace_with_func() {
        let input = "{a}-{b}";
        let tokens = tokenize_placeholders(input);
        let result = substitute(input, &tokens, Replacer::func(|key| format!("<{key}>")));
        assert_eq!(result, "<a>-<b>");
    }

    #[test]
    fn test_table_and_func_agree() {
        let input = "x={X}, y={ Y }, z={Z}";
        let tokens = tokenize_placeholders(input);
        let table = values(&[("X", "1"), ("Y", "2")]);
        let by_table = substitute(input, &tokens, &table);
        let by_func = substitute(
            input,
            &tokens,
            Replacer::func(|key| table.get(key).cloned().unwrap_or_default()),
        );
        assert_eq!(by_table, "x=1, y=2, z=");
        assert_eq!(by_table, by_func);
    }

    #[test]
    fn test_no_tokens_is_identity() {
        let table = values(&[("A", "1")]);
        assert_eq!(substitute("{A} text", &[], &table), "{A} text");
    }

    #[test]
    fn test_non_placeholder_tokens_ignored() {
        let input = "a {B}";
        let tokens = crate::tokenizer::tokenize(input);
        let table = values(&[("B", "1")]);
        assert_eq!(substitute(input, &tokens, &table), input);
    }

    #[test]
    fn test_unknown_key() {
        let input = "x:{MISSING}";
        let tokens = tokenize_placeholders(input);
        assert_eq!(substitute(input, &tokens, &HashMap::<String, String>::new()), "x:");
    }

    #[test]
    fn test_empty_key() {
        let input = "[{}]";
        let tokens = tokenize_placeholders(input);
        let table = values(&[("", "empty")]);
        assert_eq!(substitute(input, &tokens, &table), "[empty]");
    }

    #[test]
    fn test_unsorted_tokens() {
        let input = "{A}{B}{C}";
        let mut tokens = tokenize_placeholders(input);
        tokens.reverse();
        let table = values(&[("A", "1"), ("B", "2"), ("C", "3")]);
        assert_eq!(substitute(input, &tokens, &table), "123");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        let input = "héllo {NAME}, ça va? {X}!";
        let table = values(&[("NAME", "Zoë"), ("X", "✓")]);
        assert_eq!(render(input, &table), "héllo Zoë, ça va? ✓!");
    }

    #[test]
    fn test_dollar_prefix_is_kept() {
        let table = values(&[("AGE", "25")]);
        assert_eq!(render("age:${AGE}", &table), "age:$25");
    }

    #[test]
    fn test_unterminated_placeholder_passes_through() {
        let table = values(&[("A", "1")]);
        assert_eq!(render("{A} {B", &table), "1 {B");
    }

    #[test]
    fn test_out_of_range_tokens_do_not_panic() {
        let token = Token::new(TokenKind::Placeholder, "{A}", 50, 53);
        let table = values(&[("A", "1")]);
        assert_eq!(substitute("short", &[token], &table), "short1");
    }
}
