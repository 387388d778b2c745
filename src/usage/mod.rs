pub mod bindings;
mod error;
pub mod pattern;
pub mod pattern_matcher;
pub mod value;

pub use bindings::Bindings;
pub use error::*;
pub use pattern::{Leaf, LeafKind, Pattern};
pub use pattern_matcher::{MatchOutcome, match_pattern, match_tokens};
pub use value::Value;
