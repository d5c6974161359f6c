//! semantic/prefer-paragraph
//!
//! Suggest `<p>` for generic containers whose entire reachable content is
//! purely textual or inline.
//!
//! Only `div`, `span` and `label` are evaluated; every other tag is exempt
//! by convention. The suggested fix renames the opening and closing tag
//! tokens in place, leaving attributes and children untouched.

use crate::content;
use crate::context::LintContext;
use crate::diagnostic::{Fix, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};
use oxc_ast::ast::{JSXAttributeItem, JSXAttributeName, JSXElement, JSXElementName};
use oxc_span::Span;

static META: RuleMeta = RuleMeta {
    name: "semantic/prefer-paragraph",
    description: "Prefer <p> for containers holding only text or inline content",
    category: RuleCategory::Semantic,
    fixable: true,
    default_severity: Severity::Warning,
};

/// The tag every finding proposes
const TARGET_TAG: &str = "p";

/// Prefer `<p>` over generic containers of pure text
#[derive(Default)]
pub struct PreferParagraph;

impl PreferParagraph {
    /// Tags the evaluator ever fires for
    fn is_candidate(tag: &str) -> bool {
        matches!(tag, "div" | "span" | "label")
    }

    /// Tags whose qualifying ancestors suppress nested findings.
    ///
    /// Narrower than the candidate set: label is not a suppressor.
    fn is_suppressing(tag: &str) -> bool {
        matches!(tag, "div" | "span")
    }

    /// Check if any attribute is a spread attribute
    fn has_spread_attribute(element: &JSXElement) -> bool {
        element
            .opening_element
            .attributes
            .iter()
            .any(|attr| matches!(attr, JSXAttributeItem::SpreadAttribute(_)))
    }

    /// Check if a label carries a labeling association attribute.
    ///
    /// A label bound to a control via `htmlFor` (or raw `for`) has a
    /// load-bearing semantic role; renaming it would change meaning.
    fn has_label_association(element: &JSXElement) -> bool {
        element.opening_element.attributes.iter().any(|attr| {
            if let JSXAttributeItem::Attribute(attr) = attr {
                if let JSXAttributeName::Identifier(name) = &attr.name {
                    return matches!(name.name.as_str(), "htmlFor" | "for");
                }
            }
            false
        })
    }

    /// Span of a tag-name token, when it is a simple identifier
    fn identifier_span(name: &JSXElementName) -> Option<Span> {
        match name {
            JSXElementName::Identifier(ident) => Some(ident.span),
            JSXElementName::IdentifierReference(ident) => Some(ident.span),
            _ => None,
        }
    }

    /// Build the rename edit: opening tag token, plus the closing tag token
    /// when one exists. Both replacements travel in one atomic fix.
    fn build_rename_fix(element: &JSXElement, tag: &str) -> Option<Fix> {
        let opening = Self::identifier_span(&element.opening_element.name)?;
        let mut edits = vec![TextEdit::replace(opening, TARGET_TAG)];

        if let Some(closing) = &element.closing_element {
            let closing = Self::identifier_span(&closing.name)?;
            edits.push(TextEdit::replace(closing, TARGET_TAG));
        }

        Some(Fix::with_edits(
            format!("Replace <{tag}> with <{TARGET_TAG}>"),
            edits,
        ))
    }
}

impl Rule for PreferParagraph {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        // Non-identifier tags (namespaced, member expressions) are skipped
        let Some(tag) = content::element_tag(element) else {
            return;
        };
        if !Self::is_candidate(tag) {
            return;
        }

        // A spread could hide a labeling attribute; do not risk a false
        // suggestion
        if Self::has_spread_attribute(element) {
            return;
        }
        if tag == "label" && Self::has_label_association(element) {
            return;
        }

        // Computed by the visitor with the same predicate direct children
        // use; false when no significant children remain
        let children_all_inline = ctx
            .current_element()
            .is_some_and(|current| current.children_all_inline);
        if !children_all_inline {
            return;
        }

        // Never suggest a no-op: the parent is already the target tag
        if ctx
            .parent_element()
            .is_some_and(|parent| parent.tag_str() == Some(TARGET_TAG))
        {
            return;
        }

        // Ancestor suppression: a qualifying div/span above us already
        // covers this subtree
        for ancestor in ctx.ancestors() {
            if ancestor
                .tag_str()
                .is_some_and(Self::is_suppressing)
                && ancestor.children_all_inline
            {
                return;
            }
        }

        // At most one finding per element per pass
        if !ctx.claim_report(element.span) {
            return;
        }

        let message = format!("<{tag}> containing only inline content should be a <{TARGET_TAG}>");
        let help = format!("Replace the opening and closing <{tag}> tags with <{TARGET_TAG}>");
        match Self::build_rename_fix(element, tag) {
            Some(fix) => ctx.warn_with_fix(message, element.span, help, fix),
            None => ctx.warn_with_help(message, element.span, help),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::oracle::{OracleAdapter, OracleError, TypeFlags, TypeOracle};
    use crate::rule::RuleRegistry;
    use std::sync::Arc;

    fn create_linter() -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(PreferParagraph));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_text_only_div() {
        let linter = create_linter();
        let result = linter.lint_source("<div>Hello world</div>;", "test.jsx");
        assert_eq!(result.warning_count, 1);
        assert!(result.diagnostics[0].has_fix());
    }

    #[test]
    fn test_whitespace_only_div() {
        let linter = create_linter();
        let result = linter.lint_source("<div>   \n   </div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_block_child_disqualifies() {
        let linter = create_linter();
        let result = linter.lint_source("<div><p>x</p></div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_custom_component_disqualifies() {
        let linter = create_linter();
        let result = linter.lint_source("<div><Foo/></div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_spread_attribute_exempts() {
        let linter = create_linter();
        let result = linter.lint_source("<div {...props}>Hello</div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_label_with_html_for_exempts() {
        let linter = create_linter();
        let result =
            linter.lint_source(r#"<label htmlFor="x">Name</label>;"#, "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_bare_label_is_reported() {
        let linter = create_linter();
        let source = "<label>Name</label>;";
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 1);

        let fix = result.diagnostics[0].fix.as_ref().unwrap();
        assert_eq!(fix.apply(source), "<p>Name</p>;");
    }

    #[test]
    fn test_parent_already_target_tag() {
        let linter = create_linter();
        let result = linter.lint_source("<p><span>text</span></p>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_ancestor_suppression() {
        let linter = create_linter();
        let source = "<div><span>A</span><span>B</span></div>;";
        let result = linter.lint_source(source, "test.jsx");
        // Only the outer div is reported; both spans are covered by it
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.diagnostics[0].start, 0);
    }

    #[test]
    fn test_non_qualifying_ancestor_does_not_suppress() {
        let linter = create_linter();
        // The outer div holds a block child, so it does not qualify and
        // must not shadow the inner span
        let source = "<div><ul><li><span>text</span></li></ul></div>;";
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 1);
        let diag = &result.diagnostics[0];
        assert_eq!(&source[diag.start as usize..diag.end as usize], "<span>text</span>");
    }

    #[test]
    fn test_fail_open_without_oracle() {
        let linter = create_linter();
        let result = linter.lint_source("<div>{value}</div>;", "test.jsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_oracle_rejects_non_string_expression() {
        struct NonString;
        impl TypeOracle for NonString {
            fn type_at(&self, _span: oxc_span::Span) -> Result<TypeFlags, OracleError> {
                Ok(TypeFlags::empty())
            }
        }

        let linter = create_linter().with_oracle(OracleAdapter::new(Arc::new(NonString)));
        let result = linter.lint_source("<div>{value}</div>;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_oracle_accepts_string_expression() {
        struct AllStrings;
        impl TypeOracle for AllStrings {
            fn type_at(&self, _span: oxc_span::Span) -> Result<TypeFlags, OracleError> {
                Ok(TypeFlags::STRING)
            }
        }

        let linter = create_linter().with_oracle(OracleAdapter::new(Arc::new(AllStrings)));
        let result = linter.lint_source("<div>{value}</div>;", "test.jsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_edit_correctness() {
        let linter = create_linter();
        let source = "<div>Hello</div>;";
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 1);

        let fix = result.diagnostics[0].fix.as_ref().unwrap();
        assert_eq!(fix.edits.len(), 2);
        assert_eq!(fix.apply(source), "<p>Hello</p>;");
    }

    #[test]
    fn test_self_closing_div_has_no_children() {
        let linter = create_linter();
        let result = linter.lint_source("<div />;", "test.jsx");
        assert_eq!(result.warning_count, 0);
    }

    #[test]
    fn test_elements_inside_conditional_branches() {
        let linter = create_linter();
        let source = "const x = cond ? <div>one</div> : <div>two</div>;";
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 2);
    }

    #[test]
    fn test_elements_inside_map_callback() {
        let linter = create_linter();
        let source = "items.map(item => <div>{item}</div>);";
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_elements_inside_function_component() {
        let linter = create_linter();
        let source = r#"
export default function App() {
    const body = <div>words</div>;
    return <section>{body}</section>;
}
"#;
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_at_most_one_finding_per_element() {
        let linter = create_linter();
        let source = r#"
const parts = {
    a: <div>alpha</div>,
    b: [<span key="1">beta</span> && fallback, (<label>gamma</label>)],
};
"#;
        let result = linter.lint_source(source, "test.jsx");
        let mut spans: Vec<(u32, u32)> = result
            .diagnostics
            .iter()
            .map(|d| (d.start, d.end))
            .collect();
        let total = spans.len();
        spans.sort_unstable();
        spans.dedup();
        assert_eq!(spans.len(), total, "duplicate finding for one element");
        assert_eq!(total, 3);
    }

    #[test]
    fn test_template_literal_child_is_text() {
        let linter = create_linter();
        let result = linter.lint_source("<div>{`total: ${n}`}</div>;", "test.jsx");
        assert_eq!(result.warning_count, 1);
    }
}
