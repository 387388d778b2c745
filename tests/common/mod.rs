#![allow(dead_code)]

use docmatch::usage::{Leaf, MatchOutcome, Value};

/// Function pointer type for asserting expected outcomes in `#[case]` attributes.
pub type OutcomeAssertion = fn(&MatchOutcome);

pub fn assert_complete(actual: &MatchOutcome) {
    assert!(actual.is_complete(), "expected complete match, got {:?}", actual);
}

pub fn assert_leftover(actual: &MatchOutcome) {
    assert!(
        actual.matched && !actual.left.is_empty(),
        "expected match with leftover tokens, got {:?}",
        actual
    );
}

pub fn assert_no_match(actual: &MatchOutcome) {
    assert!(!actual.matched, "expected no match, got {:?}", actual);
}

/// Tokenize whitespace-separated words: `--x` and `-x` become option tokens
/// with value `true`, `--x=v` an option token with value `v`, anything else a
/// positional token.
pub fn tokens(line: &str) -> Vec<Leaf> {
    line.split_whitespace()
        .map(|word| {
            if !word.starts_with('-') || word == "-" {
                return Leaf::positional(word);
            }
            match word.split_once('=') {
                Some((name, value)) => Leaf::option(name).with_value(value),
                None => Leaf::option(word).with_value(true),
            }
        })
        .collect()
}

pub fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| s.to_string()).collect())
}
