//! Inline/text content predicate.
//!
//! Decides whether a JSX child counts as "inline or text": plain text runs,
//! expression slots whose static type is string-like, and inline elements
//! whose entire subtree satisfies the same predicate. Whitespace-only text
//! runs are transparent and filtered out before any of this logic sees them.

use crate::oracle::OracleAdapter;
use oxc_ast::ast::{Expression, JSXChild, JSXElement, JSXElementName, JSXExpression};
use oxc_span::GetSpan;

use crate::tags;

/// Extract the tag name of an element when it is a simple identifier.
///
/// Namespaced (`svg:path`), member (`Foo.Bar`) and `this` tags return
/// `None`; the caller skips the node.
#[inline]
pub fn element_tag<'a>(element: &'a JSXElement<'a>) -> Option<&'a str> {
    match &element.opening_element.name {
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Iterate the significant children of an element, skipping
/// whitespace-only text runs.
#[inline]
pub fn significant_children<'a, 'b>(
    element: &'b JSXElement<'a>,
) -> impl Iterator<Item = &'b JSXChild<'a>> {
    element.children.iter().filter(|child| match child {
        JSXChild::Text(text) => !text.value.trim().is_empty(),
        _ => true,
    })
}

/// Check whether an element has at least one significant child and every
/// significant child is inline or text.
pub fn all_children_inline(element: &JSXElement<'_>, oracle: &OracleAdapter) -> bool {
    let mut any = false;
    for child in significant_children(element) {
        if !is_inline_or_text(child, oracle) {
            return false;
        }
        any = true;
    }
    any
}

/// Recursive predicate over the JSX child union.
///
/// Pure and total: every child shape maps to a boolean, unknown shapes map
/// to `false`. No memoization; trees are shallow and this is a one-shot
/// static analysis.
pub fn is_inline_or_text(child: &JSXChild<'_>, oracle: &OracleAdapter) -> bool {
    match child {
        JSXChild::Text(text) => !text.value.trim().is_empty(),
        JSXChild::ExpressionContainer(container) => match &container.expression {
            // Comment containers and `{}` render nothing
            JSXExpression::EmptyExpression(_) => false,
            expr => match expr.as_expression() {
                // Text-ness of literal slots is syntactic; no oracle query
                Some(Expression::StringLiteral(_)) | Some(Expression::TemplateLiteral(_)) => true,
                Some(expr) => oracle.classify_fail_open(expr.span()).is_text_like(),
                None => false,
            },
        },
        JSXChild::Element(element) => {
            let Some(tag) = element_tag(element) else {
                return false;
            };
            // Components and block tags disqualify regardless of content
            if tags::is_component(tag) || !tags::is_inline_tag(tag) || tags::is_block_tag(tag) {
                return false;
            }
            significant_children(element).all(|child| is_inline_or_text(child, oracle))
        }
        // Fragments, spread children, anything unrecognized
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn with_first_element<F>(source: &str, f: F)
    where
        F: FnOnce(&JSXElement<'_>),
    {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_jsx(true);
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(!ret.panicked, "parse panicked for {source}");

        let stmt = ret.program.body.first().expect("no statement");
        let oxc_ast::ast::Statement::ExpressionStatement(expr_stmt) = stmt else {
            panic!("expected expression statement");
        };
        let Expression::JSXElement(element) = &expr_stmt.expression else {
            panic!("expected a JSX element");
        };
        f(element);
    }

    #[test]
    fn test_text_children_are_inline() {
        with_first_element("<div>Hello</div>;", |el| {
            assert!(all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_whitespace_only_is_not_significant() {
        with_first_element("<div>   \n  </div>;", |el| {
            assert_eq!(significant_children(el).count(), 0);
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_inline_element_child() {
        with_first_element("<div><em>hi</em> there</div>;", |el| {
            assert!(all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_block_element_child_disqualifies() {
        with_first_element("<div><p>hi</p></div>;", |el| {
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_component_child_disqualifies() {
        with_first_element("<div><Foo /></div>;", |el| {
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_string_literal_slot_is_text() {
        with_first_element("<div>{'hello'}</div>;", |el| {
            assert!(all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_comment_container_is_not_text() {
        with_first_element("<div>{/* nothing */}</div>;", |el| {
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_expression_slot_fails_open() {
        with_first_element("<div>{value}</div>;", |el| {
            assert!(all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_nested_inline_with_block_inside_disqualifies() {
        with_first_element("<div><span><div>deep</div></span></div>;", |el| {
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }

    #[test]
    fn test_member_expression_tag_has_no_name() {
        with_first_element("<div><Foo.Bar /></div>;", |el| {
            assert!(!all_children_inline(el, &OracleAdapter::none()));
        });
    }
}
