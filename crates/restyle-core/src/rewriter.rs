//! Ordered application of a rule chain over a whole document
//!
//! Rules run one after another. Each rule scans the output of the rule
//! before it, never the original input. A rule that finds nothing passes
//! the text through unchanged and raises nothing; callers that want to
//! know about it read the per-rule counts from [`Rewrite`].

use crate::rule::Rule;

/// Apply `rules` in order to `text`
pub fn apply(text: &str, rules: &[Rule]) -> String {
    run(text, rules).output
}

/// How many regions a single rule replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub rule: String,
    pub matches: usize,
}

/// The result of one pass of the rule chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub output: String,
    /// One entry per rule, in rule order
    pub reports: Vec<RuleReport>,
    changed: bool,
}

impl Rewrite {
    /// Names of rules that found nothing to replace
    pub fn unmatched(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| r.matches == 0)
            .map(|r| r.rule.as_str())
            .collect()
    }

    /// Total number of replaced regions across all rules
    pub fn total_matches(&self) -> usize {
        self.reports.iter().map(|r| r.matches).sum()
    }

    /// Whether the output differs from the input
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// An ordered rule chain
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    rules: Vec<Rule>,
}

impl Rewriter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rewrite `text`, discarding match counts
    pub fn apply(&self, text: &str) -> String {
        apply(text, &self.rules)
    }

    /// Rewrite `text` and report how many regions every rule replaced
    pub fn rewrite(&self, text: &str) -> Rewrite {
        run(text, &self.rules)
    }
}

fn run(text: &str, rules: &[Rule]) -> Rewrite {
    let mut current = text.to_string();
    let mut reports = Vec::with_capacity(rules.len());

    for rule in rules {
        let outcome = rule.apply(&current);
        if outcome.matches == 0 {
            log::debug!("rule `{}` matched nothing", rule.name);
        } else {
            log::debug!("rule `{}` replaced {} region(s)", rule.name, outcome.matches);
        }
        reports.push(RuleReport {
            rule: rule.name.clone(),
            matches: outcome.matches,
        });
        current = outcome.text;
    }

    Rewrite {
        changed: current != text,
        output: current,
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;

    fn literal(name: &str, from: &str, to: &str) -> Rule {
        Rule::new(name, name, Matcher::literal(from).unwrap(), to)
    }

    fn block_rule() -> Rule {
        Rule::new(
            "block",
            "Replace style block",
            Matcher::pattern(r"(?s)<style>\s*body \{[^}]+\}.*?</style>").unwrap(),
            "<style>${STYLES}</style>",
        )
    }

    #[test]
    fn test_no_rules_returns_input() {
        assert_eq!(apply("anything", &[]), "anything");
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = vec![literal("a", "one", "two"), literal("b", "two", "three")];

        assert_eq!(apply("one", &rules), "three");
    }

    #[test]
    fn test_rule_order_changes_output() {
        // `tagline` only exists after `header` has run.
        let header = literal("header", "<h1>X Co</h1>", "<h1>X</h1><p>tagline</p>");
        let tagline = literal("tagline", "<p>tagline</p>", "<p>Welcome</p>");
        let input = "<h1>X Co</h1>";

        let forward = apply(input, &[header.clone(), tagline.clone()]);
        let reversed = apply(input, &[tagline, header]);

        assert_eq!(forward, "<h1>X</h1><p>Welcome</p>");
        assert_eq!(reversed, "<h1>X</h1><p>tagline</p>");
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_non_match_is_silent() {
        let rewriter = Rewriter::new(vec![literal("a", "missing", "x"), block_rule()]);
        let input = "<p>plain text</p>\n";

        let rewrite = rewriter.rewrite(input);
        assert_eq!(rewrite.output, input);
        assert!(!rewrite.changed());
        assert_eq!(rewrite.unmatched(), vec!["a", "block"]);
        assert_eq!(rewrite.total_matches(), 0);
    }

    #[test]
    fn test_block_replacement_spans_newlines() {
        let input = "before\n<style>\n  body { color: red; }\n  .x { a: b; }\n</style>\nafter 🔥";
        let output = apply(input, &[block_rule()]);

        assert_eq!(output, "before\n<style>${STYLES}</style>\nafter 🔥");
    }

    #[test]
    fn test_block_replacement_is_non_greedy() {
        let input = "<style> body { a } </style>mid<style> body { b } </style>";
        let rewrite = Rewriter::new(vec![block_rule()]).rewrite(input);

        assert_eq!(rewrite.output, "<style>${STYLES}</style>mid<style>${STYLES}</style>");
        assert_eq!(rewrite.reports[0].matches, 2);
    }

    #[test]
    fn test_indentation_mismatch_is_a_no_op() {
        let rule = literal(
            "footer",
            "<p>Name<br>\n          Street</p>",
            "<strong>Name</strong>",
        );
        let input = "<p>Name<br>\n    Street</p>";

        assert_eq!(apply(input, &[rule]), input);
    }

    #[test]
    fn test_second_pass_is_fixed_point() {
        let rules = vec![
            block_rule(),
            literal("header", "<h1>X Co</h1>", "<h1>X</h1>\n<p>tagline</p>"),
        ];
        let input = "<style>body { a: b; }</style>\n<h1>X Co</h1>";

        let once = apply(input, &rules);
        let twice = apply(&once, &rules);
        assert_ne!(once, input);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reports_follow_rule_order() {
        let rewriter = Rewriter::new(vec![literal("a", "x", "y"), literal("b", "y", "z")]);
        let rewrite = rewriter.rewrite("xx");

        let counts: Vec<_> = rewrite
            .reports
            .iter()
            .map(|r| (r.rule.as_str(), r.matches))
            .collect();
        assert_eq!(counts, vec![("a", 2), ("b", 2)]);
        assert_eq!(rewrite.output, "zz");
        assert!(rewrite.changed());
    }
}
