use serde::Serialize;
use tracing::debug;

use crate::config::MatchCase;
use crate::usage::{Bindings, Leaf, match_tokens};

pub const EXIT_MATCH: u8 = 0;
pub const EXIT_NO_MATCH: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// JSON-serializable outcome of running one case.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub matched: bool,
    /// Matched with no leftover tokens
    pub complete: bool,
    pub left: Vec<Leaf>,
    pub collected: Vec<Leaf>,
    pub bindings: Bindings,
}

impl Report {
    pub fn from_case(case: &MatchCase) -> Self {
        let pattern = case.pattern();
        let tokens = case.tokens();
        let outcome = match_tokens(&pattern, &tokens);
        debug!(
            matched = outcome.matched,
            left = outcome.left.len(),
            collected = outcome.collected.len(),
            "case matched"
        );

        Self {
            matched: outcome.matched,
            complete: outcome.is_complete(),
            bindings: outcome.bindings(&pattern),
            left: outcome.left,
            collected: outcome.collected,
        }
    }

    /// Exit status for this report. Leftover tokens count as a failure
    /// unless `allow_extra` is set.
    pub fn exit_code(&self, allow_extra: bool) -> u8 {
        if self.complete || (self.matched && allow_extra) {
            EXIT_MATCH
        } else {
            EXIT_NO_MATCH
        }
    }

    pub fn to_json(&self, compact: bool) -> Result<String, serde_json::Error> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
