use serde::Serialize;

use super::Value;
use super::pattern_matcher::{self, MatchOutcome};

/// Kind of a terminal node. Token leaves produced by a tokenizer use the same
/// kinds: `Argument` for literal words, `Option` for parsed flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    Command,
    Argument,
    Option,
}

/// A terminal pattern, or a token to be consumed by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub kind: LeafKind,
    /// `None` for positional tokens straight out of the tokenizer
    pub name: Option<String>,
    pub value: Option<Value>,
}

impl Leaf {
    /// Command pattern. Unmatched commands bind to `false`.
    pub fn command(name: impl Into<String>) -> Self {
        Self {
            kind: LeafKind::Command,
            name: Some(name.into()),
            value: Some(Value::Bool(false)),
        }
    }

    /// Named argument pattern without a declared value.
    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            kind: LeafKind::Argument,
            name: Some(name.into()),
            value: None,
        }
    }

    /// Option pattern or option token, without a value.
    pub fn option(name: impl Into<String>) -> Self {
        Self {
            kind: LeafKind::Option,
            name: Some(name.into()),
            value: None,
        }
    }

    /// Unnamed argument token carrying a literal command-line word.
    pub fn positional(word: impl Into<String>) -> Self {
        Self {
            kind: LeafKind::Argument,
            name: None,
            value: Some(Value::Str(word.into())),
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Fold an accumulation increment into this binding's value.
    ///
    /// A binding without a value adopts the increment; an absent increment
    /// leaves the binding untouched.
    pub(crate) fn merge_value(
        &mut self,
        increment: Option<Value>,
    ) -> Result<(), super::ValueError> {
        let Some(increment) = increment else {
            return Ok(());
        };
        match &mut self.value {
            Some(existing) => existing.merge(increment),
            slot => {
                *slot = Some(increment);
                Ok(())
            }
        }
    }
}

/// Node of a usage pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// All children, in order
    Required(Vec<Pattern>),
    /// Exactly one alternative, the one consuming the most tokens
    Either(Vec<Pattern>),
    /// Children in order, each allowed to fail
    Optional(Vec<Pattern>),
    /// The child, at least once
    OneOrMore(Box<Pattern>),
    Leaf(Leaf),
}

impl Pattern {
    pub fn one_or_more(child: impl Into<Pattern>) -> Self {
        Pattern::OneOrMore(Box::new(child.into()))
    }

    /// Match this pattern against `left`, extending `collected`.
    ///
    /// Neither input is modified; the outcome owns fresh sequences.
    pub fn matches(&self, left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
        pattern_matcher::match_pattern(self, left, collected)
    }

    /// Terminal leaves in depth-first, declaration order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(pattern: &'a Pattern, out: &mut Vec<&'a Leaf>) {
    match pattern {
        Pattern::Required(children) | Pattern::Either(children) | Pattern::Optional(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
        Pattern::OneOrMore(child) => collect_leaves(child, out),
        Pattern::Leaf(leaf) => out.push(leaf),
    }
}

impl From<Leaf> for Pattern {
    fn from(leaf: Leaf) -> Self {
        Pattern::Leaf(leaf)
    }
}
