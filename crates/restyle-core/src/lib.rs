//! restyle-core: Ordered pattern substitution over raw text
//!
//! This crate provides:
//! - `Edit`: A byte-range replacement
//! - `apply_edits()`: Function to apply non-overlapping edits
//! - `Matcher`: Literal or regex description of a text region
//! - `Rule`: A matcher paired with a literal replacement
//! - `Rewriter`: Applies an ordered rule chain, each rule seeing the previous output

mod edit;
pub mod matcher;
pub mod rewriter;
pub mod rule;

pub use edit::{apply_edits, Edit, EditError};
pub use matcher::{Matcher, MatcherError};
pub use rewriter::{apply, Rewrite, Rewriter, RuleReport};
pub use rule::{Rule, RuleOutcome};
