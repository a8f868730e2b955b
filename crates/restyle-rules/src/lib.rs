//! restyle-rules: Built-in rewrite rules
//!
//! Available rules, in application order:
//! - inline_styles: Replace `<style> body {...} ... </style>` with `<style>${PREMIUM_EMAIL_STYLES}</style>`
//! - premium_header: Replace the plain `INIPI Saunagus` heading with heading + tagline
//! - premium_footer: Replace the address footer with bold name, address and website link

pub mod email;
mod registry;

pub use registry::{LegacyStyleHit, RuleInfo, RuleRegistry};

use thiserror::Error;

/// Errors raised while building the rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Rule `{rule}` has an invalid matcher: {source}")]
    Definition {
        rule: &'static str,
        #[source]
        source: restyle_core::MatcherError,
    },
}
