//! Pattern-to-token matching engine.
//!
//! Matches a [`Pattern`] tree against tokenized command-line [`Leaf`]s,
//! threading the remaining tokens and the collected bindings through
//! composite nodes. A failed attempt always hands back the state it was given.

use tracing::trace;

use super::pattern::{Leaf, LeafKind, Pattern};
use super::value::Value;

/// Result of a match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    /// Tokens not consumed by the attempt
    pub left: Vec<Leaf>,
    /// Bindings produced so far, in encounter order
    pub collected: Vec<Leaf>,
}

impl MatchOutcome {
    fn success(left: Vec<Leaf>, collected: Vec<Leaf>) -> Self {
        Self {
            matched: true,
            left,
            collected,
        }
    }

    fn failure(left: &[Leaf], collected: &[Leaf]) -> Self {
        Self {
            matched: false,
            left: left.to_vec(),
            collected: collected.to_vec(),
        }
    }
}

/// Match `pattern` against the full token list with no prior bindings.
pub fn match_tokens(pattern: &Pattern, tokens: &[Leaf]) -> MatchOutcome {
    match_pattern(pattern, tokens, &[])
}

/// Core recursive matcher.
pub fn match_pattern(pattern: &Pattern, left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    match pattern {
        Pattern::Required(children) => match_required(children, left, collected),
        Pattern::Either(alternatives) => match_either(alternatives, left, collected),
        Pattern::Optional(children) => match_optional(children, left, collected),
        Pattern::OneOrMore(child) => match_one_or_more(child, left, collected),
        Pattern::Leaf(leaf) => match_leaf(leaf, left, collected),
    }
}

fn match_required(children: &[Pattern], left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    let mut l = left.to_vec();
    let mut c = collected.to_vec();
    for child in children {
        let outcome = match_pattern(child, &l, &c);
        if !outcome.matched {
            return MatchOutcome::failure(left, collected);
        }
        l = outcome.left;
        c = outcome.collected;
    }
    MatchOutcome::success(l, c)
}

/// Every alternative starts from the same state; the one leaving the fewest
/// tokens wins, and the first declared wins ties.
fn match_either(alternatives: &[Pattern], left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    let mut best: Option<(usize, MatchOutcome)> = None;
    for (index, alternative) in alternatives.iter().enumerate() {
        let outcome = match_pattern(alternative, left, collected);
        if !outcome.matched {
            continue;
        }
        if best
            .as_ref()
            .is_none_or(|(_, current)| outcome.left.len() < current.left.len())
        {
            best = Some((index, outcome));
        }
    }

    match best {
        Some((index, outcome)) => {
            trace!(alternative = index, left = outcome.left.len(), "either chose");
            outcome
        }
        None => MatchOutcome::failure(left, collected),
    }
}

fn match_optional(children: &[Pattern], left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    let mut l = left.to_vec();
    let mut c = collected.to_vec();
    for child in children {
        // a failed child returns the state it was given
        let outcome = match_pattern(child, &l, &c);
        l = outcome.left;
        c = outcome.collected;
    }
    MatchOutcome::success(l, c)
}

fn match_one_or_more(child: &Pattern, left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    let mut l = left.to_vec();
    let mut c = collected.to_vec();
    let mut times = 0usize;
    loop {
        let outcome = match_pattern(child, &l, &c);
        let stalled = outcome.left == l;
        if outcome.matched {
            times += 1;
        }
        let matched = outcome.matched;
        l = outcome.left;
        c = outcome.collected;
        if !matched || stalled {
            break;
        }
    }

    trace!(times, "one-or-more stopped");
    if times >= 1 {
        MatchOutcome::success(l, c)
    } else {
        MatchOutcome::failure(left, collected)
    }
}

fn match_leaf(target: &Leaf, left: &[Leaf], collected: &[Leaf]) -> MatchOutcome {
    let Some((index, mut matched)) = single_match(target, left) else {
        return MatchOutcome::failure(left, collected);
    };
    trace!(kind = ?target.kind, name = ?target.name, index, "leaf consumed token");

    let mut l = left.to_vec();
    l.remove(index);
    let mut c = collected.to_vec();

    let Some(declared) = target.value.as_ref().filter(|v| v.accumulates()) else {
        // scalar rebinding appends a duplicate entry
        c.push(matched);
        return MatchOutcome::success(l, c);
    };

    let increment = match declared {
        Value::Int(_) => Some(Value::Int(1)),
        _ => match matched.value.take() {
            Some(Value::List(items)) => Some(Value::List(items)),
            Some(scalar) => Some(Value::List(vec![scalar.to_string()])),
            None => None,
        },
    };

    match c.iter_mut().find(|binding| binding.name == target.name) {
        Some(existing) => {
            if let Err(e) = existing.merge_value(increment) {
                panic!("pattern tree binds {:?} inconsistently: {e}", target.name);
            }
        }
        None => {
            matched.value = increment;
            c.push(matched);
        }
    }
    MatchOutcome::success(l, c)
}

/// Find the one token `target` may consume: its index in `left` and the
/// leaf to bind in its place.
fn single_match(target: &Leaf, left: &[Leaf]) -> Option<(usize, Leaf)> {
    match target.kind {
        LeafKind::Command => {
            // a command has to be the very next token
            let first = left.first()?;
            if first.kind != LeafKind::Argument {
                return None;
            }
            let word = first.value.as_ref()?.to_string();
            if target.name.as_deref() != Some(word.as_str()) {
                return None;
            }
            let command = Leaf {
                kind: LeafKind::Command,
                name: target.name.clone(),
                value: Some(Value::Bool(true)),
            };
            Some((0, command))
        }

        LeafKind::Argument => {
            let index = left.iter().position(|t| t.kind == LeafKind::Argument)?;
            let argument = Leaf {
                kind: LeafKind::Argument,
                name: target.name.clone(),
                value: left[index].value.clone(),
            };
            Some((index, argument))
        }

        LeafKind::Option => {
            let name = target.name.as_deref()?;
            let index = left.iter().position(|t| t.name.as_deref() == Some(name))?;
            Some((index, left[index].clone()))
        }
    }
}
