//! Rule registry for restyle rewrite rules

use restyle_core::{Matcher, Rewriter, Rule};
use serde::Serialize;

use crate::email::{self, LEGACY_STYLE_PATTERNS};
use crate::RuleError;

/// Information about a registered rule (for --list-rules)
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub name: String,
    pub description: String,
    pub matcher: &'static str,
    pub pattern: String,
}

/// Leftover legacy style declaration found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyStyleHit {
    pub selector: &'static str,
    pub count: usize,
}

/// Registry of the built-in rules, kept in application order
pub struct RuleRegistry {
    rules: Vec<Rule>,
    legacy_styles: Vec<(&'static str, Matcher)>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Result<Self, RuleError> {
        let mut registry = Self {
            rules: Vec::new(),
            legacy_styles: Vec::new(),
        };

        for rule in email::premium_rules()? {
            registry.register(rule);
        }

        for &(selector, pattern) in LEGACY_STYLE_PATTERNS {
            let matcher = Matcher::pattern(pattern).map_err(|source| RuleError::Definition {
                rule: selector,
                source,
            })?;
            registry.legacy_styles.push((selector, matcher));
        }

        Ok(registry)
    }

    /// Register a new rule at the end of the chain
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Get all rule names
    pub fn all_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Look up a rule by name
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Get all rules with their descriptions (for --list-rules)
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                name: r.name.clone(),
                description: r.description.clone(),
                matcher: r.matcher.kind(),
                pattern: r.matcher.as_str().to_string(),
            })
            .collect()
    }

    /// A rewriter over the full chain
    pub fn rewriter(&self) -> Rewriter {
        Rewriter::new(self.rules.clone())
    }

    /// Count legacy style declarations still present in `text`
    pub fn legacy_styles(&self, text: &str) -> Vec<LegacyStyleHit> {
        self.legacy_styles
            .iter()
            .map(|(selector, matcher)| LegacyStyleHit {
                selector: *selector,
                count: matcher.find(text).len(),
            })
            .filter(|hit| hit.count > 0)
            .collect()
    }
}
