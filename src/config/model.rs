use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::usage::{Leaf, Pattern, Value};

/// A case file: one pattern tree and one already-tokenized command line.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MatchCase {
    pub pattern: PatternEntry,
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

/// Pattern node as written in a case file, keyed by node kind.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PatternEntry {
    Required(Vec<PatternEntry>),
    Either(Vec<PatternEntry>),
    Optional(Vec<PatternEntry>),
    OneOrMore(Box<PatternEntry>),
    /// Command name; the declared value defaults to `false`
    Command(String),
    Argument(LeafEntry),
    Option(LeafEntry),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LeafEntry {
    pub name: String,
    pub value: Option<Value>,
}

/// Token as produced by a tokenizer.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TokenEntry {
    /// Literal command-line word
    Argument(String),
    Option(LeafEntry),
}

impl MatchCase {
    pub fn pattern(&self) -> Pattern {
        Pattern::from(&self.pattern)
    }

    pub fn tokens(&self) -> Vec<Leaf> {
        self.tokens.iter().map(Leaf::from).collect()
    }

    /// Reject leaves that cannot bind anything, and names whose leaves
    /// disagree on how repeated matches are folded.
    pub fn validate(&self) -> Result<(), crate::config::ConfigError> {
        let mut errors = Vec::new();
        let mut declared = HashMap::new();
        validate_entry(&self.pattern, "pattern", &mut declared, &mut errors);

        for (i, token) in self.tokens.iter().enumerate() {
            if let TokenEntry::Option(leaf) = token {
                check_name(&leaf.name, &format!("tokens[{i}].option"), &mut errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::config::ConfigError::Validation(errors))
        }
    }
}

/// How a named leaf folds repeated matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Scalar,
    Counter,
    List,
}

impl Binding {
    fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Int(_)) => Binding::Counter,
            Some(Value::List(_)) => Binding::List,
            _ => Binding::Scalar,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Binding::Scalar => "scalar",
            Binding::Counter => "counter",
            Binding::List => "list",
        })
    }
}

/// First declaration seen for each name, with the path it was found at.
type Declared<'a> = HashMap<&'a str, (Binding, String)>;

fn validate_entry<'a>(
    entry: &'a PatternEntry,
    path: &str,
    declared: &mut Declared<'a>,
    errors: &mut Vec<String>,
) {
    let (kind, children): (&str, &[PatternEntry]) = match entry {
        PatternEntry::Required(children) => ("required", children),
        PatternEntry::Either(children) => ("either", children),
        PatternEntry::Optional(children) => ("optional", children),
        PatternEntry::OneOrMore(child) => {
            validate_entry(child, &format!("{path}.one_or_more"), declared, errors);
            return;
        }
        PatternEntry::Command(name) => {
            let path = format!("{path}.command");
            check_name(name, &path, errors);
            return check_binding(name, Binding::Scalar, path, declared, errors);
        }
        PatternEntry::Argument(leaf) => {
            return validate_leaf(leaf, format!("{path}.argument"), declared, errors);
        }
        PatternEntry::Option(leaf) => {
            return validate_leaf(leaf, format!("{path}.option"), declared, errors);
        }
    };

    for (i, child) in children.iter().enumerate() {
        validate_entry(child, &format!("{path}.{kind}[{i}]"), declared, errors);
    }
}

fn validate_leaf<'a>(
    leaf: &'a LeafEntry,
    path: String,
    declared: &mut Declared<'a>,
    errors: &mut Vec<String>,
) {
    check_name(&leaf.name, &path, errors);
    let binding = Binding::of(leaf.value.as_ref());
    check_binding(&leaf.name, binding, path, declared, errors);
}

/// A name bound both as a scalar and as an accumulator (or as two different
/// accumulators) cannot be folded into one value.
fn check_binding<'a>(
    name: &'a str,
    binding: Binding,
    path: String,
    declared: &mut Declared<'a>,
    errors: &mut Vec<String>,
) {
    if name.is_empty() {
        return;
    }
    match declared.get(name) {
        Some((first, first_path)) if *first != binding => errors.push(format!(
            "{path}: '{name}' declared as {binding} conflicts with {first} at {first_path}"
        )),
        Some(_) => {}
        None => {
            declared.insert(name, (binding, path));
        }
    }
}

fn check_name(name: &str, path: &str, errors: &mut Vec<String>) {
    if name.is_empty() {
        errors.push(format!("{path}: name must not be empty"));
    }
}

impl From<&PatternEntry> for Pattern {
    fn from(entry: &PatternEntry) -> Self {
        let convert = |children: &[PatternEntry]| -> Vec<Pattern> {
            children.iter().map(Pattern::from).collect()
        };
        match entry {
            PatternEntry::Required(children) => Pattern::Required(convert(children)),
            PatternEntry::Either(children) => Pattern::Either(convert(children)),
            PatternEntry::Optional(children) => Pattern::Optional(convert(children)),
            PatternEntry::OneOrMore(child) => Pattern::one_or_more(Pattern::from(child.as_ref())),
            PatternEntry::Command(name) => Leaf::command(name.as_str()).into(),
            PatternEntry::Argument(leaf) => Leaf {
                value: leaf.value.clone(),
                ..Leaf::argument(leaf.name.as_str())
            }
            .into(),
            PatternEntry::Option(leaf) => Leaf {
                value: leaf.value.clone(),
                ..Leaf::option(leaf.name.as_str())
            }
            .into(),
        }
    }
}

impl From<&TokenEntry> for Leaf {
    fn from(entry: &TokenEntry) -> Self {
        match entry {
            TokenEntry::Argument(word) => Leaf::positional(word.as_str()),
            TokenEntry::Option(leaf) => Leaf {
                value: leaf.value.clone(),
                ..Leaf::option(leaf.name.as_str())
            },
        }
    }
}

pub fn parse_case(yaml: &str) -> Result<MatchCase, crate::config::ConfigError> {
    let case: MatchCase = serde_saphyr::from_str(yaml)?;
    Ok(case)
}
