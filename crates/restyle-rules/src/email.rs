//! Rules: Move email templates to the premium layout
//!
//! Every template in `lib/email.ts` carries its own `<style>` block, a plain
//! `INIPI Saunagus` heading and a two-line address footer. These rules swap
//! the style block for the shared `PREMIUM_EMAIL_STYLES` constant (left as a
//! `${...}` interpolation for the template literal to resolve), add the
//! tagline under the heading, and add the website link to the footer.

use restyle_core::{Matcher, Rule};

use crate::RuleError;

/// Indentation used by the template bodies in `lib/email.ts`
const INDENT: &str = "          ";

pub const INLINE_STYLES: &str = "inline_styles";
pub const PREMIUM_HEADER: &str = "premium_header";
pub const PREMIUM_FOOTER: &str = "premium_footer";

/// Placeholder emitted in place of each inline style block
pub const STYLES_PLACEHOLDER: &str = "${PREMIUM_EMAIL_STYLES}";

const INLINE_STYLES_PATTERN: &str = r"(?s)<style>\s*body \{[^}]+\}.*?</style>";
const HEADER: &str = "<h1>🔥 INIPI Saunagus</h1>";
const TAGLINE: &str = r#"<p>"Kom som du er, gå hjem som dig selv"</p>"#;
const FOOTER_PATTERN: &str = r"<p>INIPI Saunagus<br>\s*Havkajakvej, Amagerstrand</p>";
const SITE_LINK: &str =
    r#"<a href="https://inipi.dk" style="color: #502B30; text-decoration: none;">inipi.dk</a>"#;

/// Style declarations from the pre-premium templates
///
/// Not rewritten by any rule. Reported so leftovers outside a replaced
/// `<style>` block can be spotted.
pub const LEGACY_STYLE_PATTERNS: &[(&str, &str)] = &[
    (
        ".header",
        r"\.header \{ background: #502B30; color: #FFF5E1; padding: 20px; text-align: center; \}",
    ),
    (
        ".container",
        r"\.container \{ max-width: 600px; margin: 0 auto; padding: 20px; \}",
    ),
    (
        ".content",
        r"\.content \{ background: #fff; padding: 30px; border: 1px solid #ddd; \}",
    ),
    (
        ".details",
        r"\.details \{ background: #f9f9f9; padding: 15px; border-left: 4px solid #502B30; margin: 20px 0; \}",
    ),
    (
        ".footer",
        r"\.footer \{ text-align: center; padding: 20px; color: #666; font-size: 12px; \}",
    ),
];

/// `<style> body {...} ... </style>` -> `<style>${PREMIUM_EMAIL_STYLES}</style>`
pub fn inline_styles() -> Result<Rule, RuleError> {
    Ok(Rule::new(
        INLINE_STYLES,
        "Replace inline <style> blocks with ${PREMIUM_EMAIL_STYLES}",
        matcher(INLINE_STYLES, Matcher::pattern(INLINE_STYLES_PATTERN))?,
        format!("<style>{}</style>", STYLES_PLACEHOLDER),
    ))
}

/// Drop "Saunagus" from the heading and add the tagline below it
pub fn premium_header() -> Result<Rule, RuleError> {
    Ok(Rule::new(
        PREMIUM_HEADER,
        "Replace the plain heading with the premium heading and tagline",
        matcher(PREMIUM_HEADER, Matcher::literal(HEADER))?,
        format!("<h1>🔥 INIPI</h1>\n{INDENT}{TAGLINE}"),
    ))
}

/// Bold name, address and website link
pub fn premium_footer() -> Result<Rule, RuleError> {
    Ok(Rule::new(
        PREMIUM_FOOTER,
        "Replace the address footer with the premium footer and website link",
        matcher(PREMIUM_FOOTER, Matcher::pattern(FOOTER_PATTERN))?,
        format!(
            "<strong>INIPI Saunagus</strong><br>\n{INDENT}Havkajakvej, Amagerstrand<br>\n{INDENT}{SITE_LINK}"
        ),
    ))
}

/// The premium rewrite, in application order
pub fn premium_rules() -> Result<Vec<Rule>, RuleError> {
    Ok(vec![inline_styles()?, premium_header()?, premium_footer()?])
}

fn matcher(
    rule: &'static str,
    result: Result<Matcher, restyle_core::MatcherError>,
) -> Result<Matcher, RuleError> {
    result.map_err(|source| RuleError::Definition { rule, source })
}
