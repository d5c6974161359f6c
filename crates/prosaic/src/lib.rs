//! # prosaic
//!
//! Prosaic - A semantic-markup linter for JSX.
//!
//! ## Name Origin
//!
//! **Prosaic** (/proʊˈzeɪ.ɪk/) means "having the character of prose".
//! Markup trees accumulate `<div>`s and `<span>`s whose content is, on
//! inspection, nothing but prose - plain text and inline elements. Prosaic
//! finds those containers and suggests the tag that says what they are:
//! `<p>`.
//!
//! ## How it works
//!
//! The linter parses JSX/TSX with oxc and walks every position that can
//! hold renderable content: JSX children, conditional branches, logical
//! operands, array literals, call arguments, function bodies, object
//! properties. Each discovered element runs through the registered rules.
//!
//! The flagship rule, `semantic/prefer-paragraph`, classifies the full
//! reachable content of `div`, `span` and `label` containers. Expression
//! slots are resolved through an optional host-injected type oracle; when
//! no oracle is configured or a query fails, slots classify as text-like
//! (fail open - prefer suggesting over silence). Qualifying containers get
//! a warning carrying an atomic two-edit fix that renames the opening and
//! closing tag tokens in place.
//!
//! ## Usage
//!
//! ```rust
//! use prosaic::{lint, OutputFormat, format_results};
//!
//! let source = "<div>Hello world</div>;";
//! let result = lint(source, "app.jsx");
//! assert_eq!(result.warning_count, 1);
//!
//! let output = format_results(
//!     &[result],
//!     &[("app.jsx".to_string(), source.to_string())],
//!     OutputFormat::Json,
//! );
//! assert!(output.contains("semantic/prefer-paragraph"));
//! ```
//!
//! With type information, hosts implement [`TypeOracle`] and hand it to the
//! [`Linter`]; expression slots whose static type is not string-like then
//! disqualify their container.

pub mod content;
mod context;
mod diagnostic;
mod linter;
pub mod oracle;
pub mod output;
mod rule;
pub mod rules;
pub mod tags;
mod visitor;

pub use context::{ElementContext, LintContext};
pub use diagnostic::{Fix, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use linter::{LintResult, Linter};
pub use oracle::{Classification, OracleAdapter, OracleError, TypeFlags, TypeOracle};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
pub use tags::TagKind;

/// Lint a JSX/TSX source with the recommended rules.
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_function() {
        let result = lint("<div>Hello world</div>;", "test.jsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_lint_clean_source() {
        let result = lint("<article><p>Hello</p></article>;", "test.jsx");
        assert!(!result.has_diagnostics());
    }
}
