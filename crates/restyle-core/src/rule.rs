//! A single (matcher, replacement) rewrite rule

use crate::edit::{apply_edits, Edit};
use crate::matcher::Matcher;

/// A matcher paired with the literal text that replaces each match
///
/// The replacement is inserted verbatim. Sequences such as `$1` or
/// `${NAME}` are not capture references and survive into the output.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub description: String,
    pub matcher: Matcher,
    pub replacement: String,
}

/// The text produced by one rule, and how many regions it replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub text: String,
    pub matches: usize,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        matcher: Matcher,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            matcher,
            replacement: replacement.into(),
        }
    }

    /// Edits this rule would make to `text`
    pub fn edits(&self, text: &str) -> Vec<Edit> {
        self.matcher
            .find(text)
            .into_iter()
            .map(|range| Edit::new(range, self.replacement.as_str(), self.description.as_str()))
            .collect()
    }

    /// Apply the rule to `text`. No match leaves the text as it was.
    pub fn apply(&self, text: &str) -> RuleOutcome {
        let edits = self.edits(text);
        if edits.is_empty() {
            return RuleOutcome {
                text: text.to_string(),
                matches: 0,
            };
        }

        match apply_edits(text, &edits) {
            Ok(rewritten) => RuleOutcome {
                text: rewritten,
                matches: edits.len(),
            },
            // Matcher ranges are ordered, disjoint and on char boundaries
            Err(e) => unreachable!("rule `{}` produced invalid edits: {}", self.name, e),
        }
    }
}
