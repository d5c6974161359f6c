//! Rule trait and registry for lint rules.

use crate::context::LintContext;
use crate::diagnostic::Severity;
use oxc_ast::ast::{JSXElement, Program};

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Semantic markup rules - prefer meaningful tags over generic ones
    Semantic,
    /// Accessibility rules
    Accessibility,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "semantic/prefer-paragraph")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules implement visitor-like methods that are called during AST
/// traversal. Each method receives a mutable reference to LintContext for
/// reporting diagnostics.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Run once per program, before any element is visited
    #[allow(unused_variables)]
    fn run_on_program<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) {}

    /// Called when entering a JSX element node.
    ///
    /// The element's own context is already on the stack, so
    /// `ctx.parent_element()` and `ctx.ancestors()` see the enclosing
    /// elements.
    #[allow(unused_variables)]
    fn enter_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {}

    /// Called when exiting a JSX element node
    #[allow(unused_variables)]
    fn exit_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {}
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with the recommended rule set
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(crate::rules::semantic::PreferParagraph));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
