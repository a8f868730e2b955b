//! Output formatting for restyle
//!
//! Supports text (colored terminal), JSON and unified diff output formats.

use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::path::Path;

use restyle_rules::{LegacyStyleHit, RuleInfo};

use crate::process::ProcessResult;

/// Printed once the rewritten file has been written
pub const SUCCESS_MESSAGE: &str = "Email templates updated successfully!";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Diff,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "diff" => Some(OutputFormat::Diff),
            _ => None,
        }
    }
}

/// Replacement count for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub rule: String,
    pub matches: usize,
}

/// Outcome for the target file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub changed: bool,
    pub written: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legacy_styles: Vec<LegacyStyleHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn new(path: &Path, result: &ProcessResult, written: bool) -> Self {
        Self {
            path: path.display().to_string(),
            changed: result.changed(),
            written,
            rules: result.rules.clone(),
            unmatched: result.unmatched().iter().map(|s| s.to_string()).collect(),
            legacy_styles: result.legacy_styles.clone(),
            error: None,
        }
    }

    fn error(path: &Path, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            changed: false,
            written: false,
            rules: Vec::new(),
            unmatched: Vec::new(),
            legacy_styles: Vec::new(),
            error: Some(error),
        }
    }
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub mode: &'static str,
    pub file: Option<FileReport>,
}

/// Reporter for the single rewrite pass
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    file: Option<FileReport>,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            file: None,
        }
    }

    /// Report what a rewrite would change, without writing
    pub fn report_check(&mut self, path: &Path, result: &ProcessResult) {
        match self.format {
            OutputFormat::Text => {
                println!("{}", path.display().to_string().bold());
                if result.changed() {
                    print_diff(&result.old_source, &result.new_source);
                    println!();
                } else {
                    println!("  No changes needed");
                }
                self.print_rules(result, true);
            }
            OutputFormat::Diff => {
                if result.changed() {
                    print_unified_diff(path, &result.old_source, &result.new_source);
                }
            }
            OutputFormat::Json => {}
        }

        self.file = Some(FileReport::new(path, result, false));
    }

    /// Report a file after it has been written
    pub fn report_fix(&mut self, path: &Path, result: &ProcessResult) {
        match self.format {
            OutputFormat::Text => {
                if self.verbose {
                    println!("{}", path.display().to_string().bold());
                    self.print_rules(result, false);
                }
                println!("{}", SUCCESS_MESSAGE);
            }
            OutputFormat::Diff => {
                if result.changed() {
                    print_unified_diff(path, &result.old_source, &result.new_source);
                }
            }
            OutputFormat::Json => {}
        }

        self.file = Some(FileReport::new(path, result, true));
    }

    /// Warn about rules that found nothing to replace
    pub fn report_unmatched(&self, unmatched: &[&str]) {
        for rule in unmatched {
            if self.format == OutputFormat::Text {
                eprintln!(
                    "{}: rule '{}' matched nothing",
                    "Warning".yellow(),
                    rule
                );
            } else {
                log::warn!("rule `{}` matched nothing", rule);
            }
        }
    }

    /// Report an error processing the file
    pub fn report_error(&mut self, path: &Path, error: &str) {
        if self.format != OutputFormat::Json {
            eprintln!("{}: {} - {}", "Error".red(), path.display(), error);
        }
        self.file = Some(FileReport::error(path, error.to_string()));
    }

    /// Print final output
    pub fn finish(self, check_mode: bool) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let pending = self
                    .file
                    .as_ref()
                    .is_some_and(|f| f.changed && !f.written);
                if check_mode && pending {
                    println!("{}", "Run without --check to apply changes".yellow());
                }
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    mode: if check_mode { "check" } else { "fix" },
                    file: self.file,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Diff => {}
        }
        Ok(())
    }

    fn print_rules(&self, result: &ProcessResult, check_mode: bool) {
        for rule in &result.rules {
            if let Some(line) = rule_line(rule, check_mode, self.verbose) {
                println!("{}", line);
            }
        }
        for hit in &result.legacy_styles {
            println!(
                "  {} {} legacy `{}` declaration(s) remain",
                "!".yellow(),
                hit.count,
                hit.selector
            );
        }
    }
}

/// One summary line per rule; unmatched rules only when verbose
fn rule_line(rule: &RuleResult, check_mode: bool, verbose: bool) -> Option<String> {
    let verb = if check_mode { "would replace" } else { "replaced" };
    if rule.matches > 0 {
        Some(format!(
            "  {} {} {} {} region(s)",
            "->".green(),
            rule.rule,
            verb,
            rule.matches
        ))
    } else if verbose {
        Some(format!("  {} {} matched nothing", "-".dimmed(), rule.rule))
    } else {
        None
    }
}

/// Print the rule chain for --list-rules
pub fn print_rule_list(rules: &[RuleInfo], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rules)?);
        return Ok(());
    }

    println!("{}", "Rules (applied in this order):".bold());
    for (i, rule) in rules.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, rule.name.green(), rule.description);
    }
    Ok(())
}

/// Print a colored diff between old and new content
fn print_diff(old: &str, new: &str) {
    for diff_result in diff::lines(old, new) {
        match diff_result {
            diff::Result::Left(l) => {
                println!("  {}", format!("- {}", l).red());
            }
            diff::Result::Right(r) => {
                println!("  {}", format!("+ {}", r).green());
            }
            diff::Result::Both(_, _) => {}
        }
    }
}

/// Print unified diff format (standard diff -u compatible)
fn print_unified_diff(path: &Path, old: &str, new: &str) {
    print!("{}", unified_diff(path, old, new));
}

fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::TextDiff;

    let path_str = path.display().to_string();
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(3)
        .header(&format!("a/{}", path_str), &format!("b/{}", path_str));
    unified.to_string()
}
