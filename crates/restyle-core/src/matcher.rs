//! Text matchers: fixed literals and regular expressions

use regex::Regex;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Errors raised while defining a matcher
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Literal matcher must not be empty")]
    EmptyLiteral,
}

/// Describes the region of text a rule targets
///
/// Literal matchers compare bytes exactly, including whitespace and
/// indentation. Pattern matchers use `regex` syntax; prefix the pattern
/// with `(?s)` to let `.` cross newlines.
#[derive(Clone)]
pub enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    /// Match an exact fragment
    pub fn literal(fragment: impl Into<String>) -> Result<Self, MatcherError> {
        let fragment = fragment.into();
        if fragment.is_empty() {
            return Err(MatcherError::EmptyLiteral);
        }
        Ok(Matcher::Literal(fragment))
    }

    /// Compile a regular expression matcher
    pub fn pattern(pattern: &str) -> Result<Self, MatcherError> {
        let regex = Regex::new(pattern).map_err(|source| MatcherError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Matcher::Pattern(regex))
    }

    /// Leftmost, non-overlapping match ranges in `text`, in order
    pub fn find(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Matcher::Literal(fragment) => text
                .match_indices(fragment.as_str())
                .map(|(start, m)| start..start + m.len())
                .collect(),
            Matcher::Pattern(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
        }
    }

    /// Whether the matcher finds anything in `text`
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Literal(fragment) => text.contains(fragment.as_str()),
            Matcher::Pattern(regex) => regex.is_match(text),
        }
    }

    /// The literal fragment or regex source
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Literal(fragment) => fragment.as_str(),
            Matcher::Pattern(regex) => regex.as_str(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Matcher::Literal(_) => "literal",
            Matcher::Pattern(_) => "pattern",
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_finds_every_occurrence() {
        let matcher = Matcher::literal("<br>").unwrap();
        let text = "a<br>b<br>c";

        assert_eq!(matcher.find(text), vec![1..5, 6..10]);
    }

    #[test]
    fn test_literal_is_whitespace_sensitive() {
        let matcher = Matcher::literal("<p>Name<br>\n    Street</p>").unwrap();

        assert!(matcher.is_match("<p>Name<br>\n    Street</p>"));
        assert!(!matcher.is_match("<p>Name<br>\n  Street</p>"));
        assert!(!matcher.is_match("<p>Name<br>\r\n    Street</p>"));
    }

    #[test]
    fn test_empty_literal_rejected() {
        assert!(matches!(
            Matcher::literal(""),
            Err(MatcherError::EmptyLiteral)
        ));
    }

    #[test]
    fn test_pattern_without_dotall_stops_at_newline() {
        let matcher = Matcher::pattern(r"<style>.*?</style>").unwrap();

        assert!(matcher.find("<style>\n</style>").is_empty());
    }

    #[test]
    fn test_pattern_with_dotall_spans_lines() {
        let matcher = Matcher::pattern(r"(?s)<style>.*?</style>").unwrap();
        let text = "x<style>\na\nb\n</style>y<style></style>";

        assert_eq!(matcher.find(text), vec![1..21, 22..37]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Matcher::pattern(r"<style>(").unwrap_err();
        assert!(matches!(err, MatcherError::InvalidPattern { .. }));
        assert!(err.to_string().contains("<style>("));
    }

    #[test]
    fn test_debug_shows_kind_and_source() {
        let matcher = Matcher::literal("x").unwrap();
        assert_eq!(format!("{:?}", matcher), "literal(\"x\")");
    }
}
