//! Lint context for rule execution.
//!
//! The context is scoped to exactly one file pass: the element stack, the
//! reported-set and the collected diagnostics all die with it. Nothing here
//! survives across files, which makes multi-file analysis re-entrant by
//! construction.

use crate::diagnostic::{Fix, LintDiagnostic, Severity};
use crate::oracle::OracleAdapter;
use compact_str::CompactString;
use oxc_allocator::Allocator;
use oxc_span::Span;
use rustc_hash::FxHashSet;

/// Context for tracking element state during traversal.
///
/// One entry per open element on the path from the root to the node the
/// rules are currently looking at.
#[derive(Debug, Clone)]
pub struct ElementContext {
    /// Tag name, when the tag is a simple identifier
    pub tag: Option<CompactString>,
    /// Span of the whole element
    pub span: Span,
    /// Whether the element has at least one significant child and all of
    /// them satisfy the inline/text predicate
    pub children_all_inline: bool,
}

impl ElementContext {
    #[inline]
    pub fn new(tag: Option<CompactString>, span: Span, children_all_inline: bool) -> Self {
        Self {
            tag,
            span,
            children_all_inline,
        }
    }

    /// Tag name as a borrowed str, when present
    #[inline]
    pub fn tag_str(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Lint context provides utilities for rules during execution.
pub struct LintContext<'a> {
    /// Arena allocator for this lint session
    allocator: &'a Allocator,
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Type oracle adapter shared by all rules in this pass
    oracle: OracleAdapter,
    /// Collected diagnostics
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by visitor before calling rule methods)
    pub current_rule: &'static str,
    /// Open-element stack; the last entry is the element currently entered
    element_stack: Vec<ElementContext>,
    /// Elements already reported in this pass, keyed by span
    reported: FxHashSet<Span>,
    /// Optional set of enabled rule names (if None, all rules run)
    enabled_rules: Option<FxHashSet<String>>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;
    /// Initial capacity for element stack
    const INITIAL_STACK_CAPACITY: usize = 32;

    /// Create a new lint context
    #[inline]
    pub fn new(
        allocator: &'a Allocator,
        source: &'a str,
        filename: &'a str,
        oracle: OracleAdapter,
    ) -> Self {
        Self {
            allocator,
            source,
            filename,
            oracle,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            element_stack: Vec::with_capacity(Self::INITIAL_STACK_CAPACITY),
            reported: FxHashSet::default(),
            enabled_rules: None,
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Get the allocator
    #[inline]
    pub fn allocator(&self) -> &'a Allocator {
        self.allocator
    }

    /// Get the type oracle adapter
    #[inline]
    pub fn oracle(&self) -> &OracleAdapter {
        &self.oracle
    }

    /// Restrict the pass to a set of rule names
    #[inline]
    pub fn set_enabled_rules(&mut self, rules: Option<FxHashSet<String>>) {
        self.enabled_rules = rules;
    }

    /// Check if a rule should run in this pass
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report a warning at a span
    #[inline]
    pub fn warn(&mut self, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report a warning with help message
    #[inline]
    pub fn warn_with_help(
        &mut self,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, message, span.start, span.end)
                .with_help(help),
        );
    }

    /// Report a warning carrying a suggested fix
    #[inline]
    pub fn warn_with_fix(
        &mut self,
        message: impl Into<CompactString>,
        span: Span,
        help: impl Into<CompactString>,
        fix: Fix,
    ) {
        self.report(
            LintDiagnostic::warn(self.current_rule, message, span.start, span.end)
                .with_help(help)
                .with_fix(fix),
        );
    }

    /// Claim the right to report an element, keyed by its span.
    ///
    /// Idempotent: the first call for a span returns true, every later call
    /// returns false. Guarantees at most one finding per element per pass.
    #[inline]
    pub fn claim_report(&mut self, span: Span) -> bool {
        self.reported.insert(span)
    }

    /// Check whether an element was already reported in this pass
    #[inline]
    pub fn is_reported(&self, span: Span) -> bool {
        self.reported.contains(&span)
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Push an element onto the context stack
    #[inline]
    pub fn push_element(&mut self, ctx: ElementContext) {
        self.element_stack.push(ctx);
    }

    /// Pop an element from the context stack
    #[inline]
    pub fn pop_element(&mut self) -> Option<ElementContext> {
        self.element_stack.pop()
    }

    /// Get current element context (top of stack)
    #[inline]
    pub fn current_element(&self) -> Option<&ElementContext> {
        self.element_stack.last()
    }

    /// Get the parent of the current element
    #[inline]
    pub fn parent_element(&self) -> Option<&ElementContext> {
        if self.element_stack.len() >= 2 {
            self.element_stack.get(self.element_stack.len() - 2)
        } else {
            None
        }
    }

    /// Iterate the ancestors of the current element, nearest first,
    /// excluding the current element itself.
    #[inline]
    pub fn ancestors(&self) -> impl Iterator<Item = &ElementContext> {
        let end = self.element_stack.len().saturating_sub(1);
        self.element_stack[..end].iter().rev()
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
