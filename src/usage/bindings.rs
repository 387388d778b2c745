use std::collections::BTreeMap;
use std::ops::Deref;

use serde::Serialize;

use super::pattern::Pattern;
use super::pattern_matcher::MatchOutcome;
use super::value::Value;

/// Final name → value view of a match, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bindings(BTreeMap<String, Option<Value>>);

impl Bindings {
    /// Value bound to `name`, if the name is known and carries a value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.0.get(name).and_then(Option::as_ref)
    }

    fn bind(&mut self, name: Option<&str>, value: Option<&Value>) {
        if let Some(name) = name {
            self.0.insert(name.to_string(), value.cloned());
        }
    }
}

impl Deref for Bindings {
    type Target = BTreeMap<String, Option<Value>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MatchOutcome {
    /// Matched with no leftover tokens.
    pub fn is_complete(&self) -> bool {
        self.matched && self.left.is_empty()
    }

    /// Fold the outcome into a name → value map.
    ///
    /// Every leaf declared in `pattern` starts at its declared value; the
    /// collected bindings are then applied in order, so the last of several
    /// same-named scalar bindings wins.
    pub fn bindings(&self, pattern: &Pattern) -> Bindings {
        let mut bindings = Bindings::default();
        for leaf in pattern.leaves().into_iter().chain(self.collected.iter()) {
            bindings.bind(leaf.name.as_deref(), leaf.value.as_ref());
        }
        bindings
    }
}
