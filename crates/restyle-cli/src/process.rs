//! File processing logic for restyle

use anyhow::{Context, Result};
use std::path::Path;

use restyle_rules::{LegacyStyleHit, RuleRegistry};

use crate::output::RuleResult;

/// Result of rewriting a single file
#[derive(Debug)]
pub struct ProcessResult {
    /// Replacement count for every rule, in rule order
    pub rules: Vec<RuleResult>,
    /// Original file content
    pub old_source: String,
    /// Content after the full rule chain
    pub new_source: String,
    /// Legacy style declarations that survived the rewrite
    pub legacy_styles: Vec<LegacyStyleHit>,
}

impl ProcessResult {
    pub fn changed(&self) -> bool {
        self.old_source != self.new_source
    }

    /// Names of rules that found nothing to replace
    pub fn unmatched(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.matches == 0)
            .map(|r| r.rule.as_str())
            .collect()
    }
}

/// Read `path` and run the full rule chain over it. Nothing is written.
pub fn process_file(path: &Path, registry: &RuleRegistry) -> Result<ProcessResult> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    log::debug!("read {} bytes from {}", source.len(), path.display());

    Ok(process_source(source, registry))
}

/// Run the full rule chain over already loaded content
pub fn process_source(source: String, registry: &RuleRegistry) -> ProcessResult {
    let rewrite = registry.rewriter().rewrite(&source);
    let legacy_styles = registry.legacy_styles(&rewrite.output);

    ProcessResult {
        rules: rewrite
            .reports
            .into_iter()
            .map(|r| RuleResult {
                rule: r.rule,
                matches: r.matches,
            })
            .collect(),
        old_source: source,
        new_source: rewrite.output,
        legacy_styles,
    }
}

/// Overwrite `path` with the rewritten content
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
