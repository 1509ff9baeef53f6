use std::collections::HashMap;

use pretty_assertions::assert_eq;
use runecase::{render, substitute, tokenize_placeholders, Replacer, TokenKind};

fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn it_finds_placeholders_with_offsets() {
    let input = "id:{ID}/name:{NAME}";
    let tokens = tokenize_placeholders(input);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "{ID}");
    assert_eq!((tokens[0].start, tokens[0].end), (3, 7));
    assert_eq!(tokens[1].text, "{NAME}");
    assert_eq!((tokens[1].start, tokens[1].end), (13, 19));
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Placeholder));
}

#[test]
fn it_substitutes_from_a_table() {
    let input = "id:{ID}/name:{NAME}";
    let tokens = tokenize_placeholders(input);
    let values = table(&[("ID", "1"), ("NAME", "John")]);

    assert_eq!(substitute(input, &tokens, &values), "id:1/name:John");
}

#[test]
fn it_substitutes_from_a_function() {
    let input = "id:{ID}/name:{NAME}";
    let tokens = tokenize_placeholders(input);
    let result = substitute(input, &tokens, Replacer::func(|key| key.to_lowercase()));

    assert_eq!(result, "id:id/name:name");
}

#[test]
fn it_finds_all_placeholders_in_a_long_template() {
    let input = "id:{ID}/name:{NAME}/age:${AGE}/salary:{SALARY}/city:{CITY}";
    let found: Vec<String> = tokenize_placeholders(input)
        .into_iter()
        .map(|t| t.text)
        .collect();

    assert_eq!(found, ["{ID}", "{NAME}", "{AGE}", "{SALARY}", "{CITY}"]);
}

#[test]
fn it_leaves_input_alone_without_placeholders() {
    let values = table(&[("X", "1")]);
    assert_eq!(substitute("plain {X}", &[], &values), "plain {X}");
    assert_eq!(render("No placeholders here", &values), "No placeholders here");
}

#[test]
fn it_resolves_unknown_keys_to_empty() {
    let input = "x:{MISSING}";
    let tokens = tokenize_placeholders(input);
    assert_eq!(substitute(input, &tokens, &HashMap::<String, String>::new()), "x:");
}

#[test]
fn it_handles_empty_input() {
    assert!(tokenize_placeholders("").is_empty());
    assert_eq!(render("", &HashMap::<String, String>::new()), "");
}
