use nom::{
    bytes::complete::take_till1,
    character::complete::char,
    combinator::rest,
    error::{context, VerboseError},
    sequence::separated_pair,
    IResult,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use crate::{
    case::Case,
    error::{Error, InternalResult},
    substitute::Replacer,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Placeholder values, keyed by the trimmed text between the braces.
    #[serde(default)]
    pub values: HashMap<String, String>,

    #[serde(default)]
    pub case: Case,

    /// Text used for keys missing from `values`. Unset means empty string.
    #[serde(default)]
    pub missing: Option<String>,
}

/// A single `KEY=VALUE` override from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::config(format!("Failed to open config file {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> InternalResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))
    }

    /// Merges overrides into `values`; later entries win.
    pub fn apply_overrides<'o, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = &'o Override>,
    {
        for Override { key, value } in overrides {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// The replacer these settings describe: a plain table lookup, or a
    /// function that falls back to `missing` for unknown keys.
    pub fn replacer(&self) -> Replacer<'_> {
        match &self.missing {
            None => Replacer::table(&self.values),
            Some(fallback) => Replacer::func(move |key| {
                self.values
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| fallback.clone())
            }),
        }
    }
}

type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn override_parts(input: &str) -> ParserResult<(&str, &str)> {
    context(
        "override",
        separated_pair(take_till1(|c: char| c == '='), char('='), rest),
    )(input)
}

/// Parses `KEY=VALUE`. The key is trimmed and must not be empty; the value is
/// everything after the first `=` and may be empty.
///
/// # Examples
///
/// ```
/// # use runecase::config::parse_override;
/// let parsed = parse_override("NAME=John=Doe").unwrap();
/// assert_eq!(parsed.key, "NAME");
/// assert_eq!(parsed.value, "John=Doe");
/// ```
pub fn parse_override(input: &str) -> InternalResult<Override> {
    let invalid = |message: String| Error::Override {
        input: input.to_string(),
        message,
    };

    let (_, (key, value)) = override_parts(input).map_err(|e| match e {
        nom::Err::Incomplete(needed) => invalid(format!("incomplete input, {:?}", needed)),
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            invalid(nom::error::convert_error(input, e).trim_end().to_string())
        }
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(invalid("empty key".to_string()));
    }

    Ok(Override {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_override() {
        let parsed = parse_override("ID=1").unwrap();
        assert_eq!(
            parsed,
            Override {
                key: "ID".to_string(),
                value: "1".to_string()
            }
        );

        let parsed = parse_override(" NAME =John Doe").unwrap();
        assert_eq!(parsed.key, "NAME");
        assert_eq!(parsed.value, "John Doe");

        let parsed = parse_override("EMPTY=").unwrap();
        assert_eq!(parsed.value, "");
    }

    #[test]
    fn test_parse_override_errors() {
        assert!(matches!(parse_override("=1"), Err(Error::Override { .. })));
        assert!(matches!(parse_override("  =1"), Err(Error::Override { .. })));
        assert!(matches!(parse_override("NOEQ"), Err(Error::Override { .. })));
        assert!(matches!(parse_override(""), Err(Error::Override { .. })));
    }

    #[test]
    fn test_from_str_defaults() {
        let config = RenderConfig::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.case, Case::Camel);
    }

    #[test]
    fn test_from_str() {
        let config = RenderConfig::from_str(
            r#"{"values": {"ID": "1"}, "case": "screaming_snake", "missing": "?"}"#,
        )
        .unwrap();
        assert_eq!(config.values.get("ID").map(String::as_str), Some("1"));
        assert_eq!(config.case, Case::ScreamingSnake);
        assert_eq!(config.missing.as_deref(), Some("?"));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(matches!(
            RenderConfig::from_str(r#"{"case": "title"}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"values": {{"NAME": "John"}}}}"#).unwrap();
        let config = RenderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.values.get("NAME").map(String::as_str), Some("John"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = RenderConfig::from_file("/nonexistent/runecase.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = RenderConfig::default();
        config.values.insert("A".to_string(), "old".to_string());
        let overrides = vec![
            parse_override("A=new").unwrap(),
            parse_override("B=1").unwrap(),
            parse_override("B=2").unwrap(),
        ];
        config.apply_overrides(&overrides);
        assert_eq!(config.values["A"], "new");
        assert_eq!(config.values["B"], "2");
    }

    #[test]
    fn test_replacer() {
        let mut config = RenderConfig::default();
        config.values.insert("A".to_string(), "1".to_string());
        assert_eq!(config.replacer().lookup("A"), "1");
        assert_eq!(config.replacer().lookup("B"), "");

        config.missing = Some("?".to_string());
        assert_eq!(config.replacer().lookup("A"), "1");
        assert_eq!(config.replacer().lookup("B"), "?");
    }
}
