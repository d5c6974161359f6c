//! Main linter entry point.
//!
//! Parses JSX/TSX sources with oxc and runs the registered rules over each
//! program. One allocator, one context and one visited-set per file pass;
//! nothing is shared across files.

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::oracle::OracleAdapter;
use crate::rule::RuleRegistry;
use crate::visitor::LintVisitor;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use rustc_hash::FxHashSet;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    fn empty(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
///
/// Holds the rule registry and the host-injected type oracle; both are
/// shared read-only across file passes.
pub struct Linter {
    registry: RuleRegistry,
    oracle: OracleAdapter,
    /// Estimated initial allocator capacity (in bytes)
    initial_capacity: usize,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Default initial capacity for the arena (64KB)
    const DEFAULT_INITIAL_CAPACITY: usize = 64 * 1024;

    /// Create a new linter with the recommended rules and no type oracle
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_recommended())
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            oracle: OracleAdapter::none(),
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            enabled_rules: None,
        }
    }

    /// Inject a type oracle adapter.
    ///
    /// Without one, expression slots classify as text-like (fail open).
    #[inline]
    pub fn with_oracle(mut self, oracle: OracleAdapter) -> Self {
        self.oracle = oracle;
        self
    }

    /// Set the initial allocator capacity
    #[inline]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set enabled rules (if None, all rules are enabled)
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Lint a JSX/TSX source string
    #[inline]
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        // Size the arena for the source (rough heuristic: 4x source size)
        let capacity = (source.len() * 4).max(self.initial_capacity);
        let allocator = Allocator::with_capacity(capacity);

        self.lint_source_with_allocator(&allocator, source, filename)
    }

    /// Lint a source with a provided allocator (for reuse across files)
    pub fn lint_source_with_allocator(
        &self,
        allocator: &Allocator,
        source: &str,
        filename: &str,
    ) -> LintResult {
        let source_type = SourceType::from_path(filename).unwrap_or_else(|_| SourceType::jsx());
        let ret = Parser::new(allocator, source, source_type).parse();

        // A panicked parse yields no tree worth walking; the core never
        // throws past its boundary
        if ret.panicked {
            return LintResult::empty(filename);
        }

        let mut ctx = LintContext::new(allocator, source, filename, self.oracle.clone());
        ctx.set_enabled_rules(self.enabled_rules.clone());

        let mut visitor = LintVisitor::new(&mut ctx, self.registry.rules());
        visitor.visit_program(&ret.program);

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        // Reuse the allocator across files for better memory efficiency
        let mut allocator = Allocator::with_capacity(self.initial_capacity);

        for (filename, source) in files {
            let result = self.lint_source_with_allocator(&allocator, source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            results.push(result);

            allocator.reset();
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_empty_source() {
        let linter = Linter::new();
        let result = linter.lint_source("", "test.jsx");
        assert!(!result.has_errors());
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_non_jsx_source() {
        let linter = Linter::new();
        let result = linter.lint_source("const x = 1 + 1;", "test.jsx");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_broken_source_is_recovered() {
        let linter = Linter::new();
        let result = linter.lint_source("<div", "test.jsx");
        // Must not panic; a partial or failed parse produces no findings
        assert!(!result.has_errors());
    }

    #[test]
    fn test_lint_files_batch() {
        let linter = Linter::new();
        let files = vec![
            ("a.jsx".to_string(), "<div>Hello</div>;".to_string()),
            ("b.jsx".to_string(), "<article>ok</article>;".to_string()),
        ];

        let (results, summary) = linter.lint_files(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.warning_count, 1);
    }

    #[test]
    fn test_no_state_leaks_between_files() {
        let linter = Linter::new();
        let source = "<div>Hello</div>;";
        let first = linter.lint_source(source, "a.jsx");
        let second = linter.lint_source(source, "a.jsx");
        // The visited set is per-pass: the second pass reports again
        assert_eq!(first.warning_count, 1);
        assert_eq!(second.warning_count, 1);
    }

    #[test]
    fn test_enabled_rules_filter() {
        let linter = Linter::new().with_enabled_rules(Some(vec!["other/rule".to_string()]));
        let result = linter.lint_source("<div>Hello</div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_tsx_source_type() {
        let linter = Linter::new();
        let source = "const x: string = 'hi'; export const y = <div>{x}</div>;";
        let result = linter.lint_source(source, "test.tsx");
        assert_eq!(result.warning_count, 1);
    }
}
