//! AST walker for lint rule execution.
//!
//! JSX elements do not hang off a single children relationship: they hide
//! inside conditional branches, short-circuit operands, array literals,
//! call arguments, function bodies and object properties. The walker
//! enumerates that closed set of shapes with one match arm per shape; any
//! other shape is a dead end, never an error. The walk is best-effort and
//! conservative, not a data-flow analysis.

use crate::content;
use crate::context::{ElementContext, LintContext};
use crate::rule::Rule;
use compact_str::CompactString;
use oxc_ast::ast::{
    Argument, ArrayExpressionElement, Declaration, ExportDefaultDeclarationKind, Expression,
    FunctionBody, JSXChild, JSXElement, JSXFragment, ObjectPropertyKind, Program, Statement,
};

/// Visit the AST and run all rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [Box<dyn Rule>],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    /// Create a new visitor
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [Box<dyn Rule>]) -> Self {
        Self { ctx, rules }
    }

    /// Visit the program and traverse every top-level entry point
    pub fn visit_program(&mut self, program: &Program<'a>) {
        for rule in self.rules.iter() {
            if !self.ctx.is_rule_enabled(rule.meta().name) {
                continue;
            }
            self.ctx.current_rule = rule.meta().name;
            rule.run_on_program(self.ctx, program);
        }

        for stmt in program.body.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::ExpressionStatement(expr_stmt) => {
                self.visit_expression(&expr_stmt.expression);
            }
            Statement::ReturnStatement(ret) => {
                if let Some(arg) = &ret.argument {
                    self.visit_expression(arg);
                }
            }
            Statement::BlockStatement(block) => {
                for stmt in block.body.iter() {
                    self.visit_statement(stmt);
                }
            }
            Statement::VariableDeclaration(decl) => {
                for declarator in decl.declarations.iter() {
                    if let Some(init) = &declarator.init {
                        self.visit_expression(init);
                    }
                }
            }
            Statement::FunctionDeclaration(func) => {
                if let Some(body) = &func.body {
                    self.visit_function_body(body);
                }
            }
            // Top-level entry points: components are usually exported
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    if let Some(body) = &func.body {
                        self.visit_function_body(body);
                    }
                }
                decl => {
                    if let Some(expr) = decl.as_expression() {
                        self.visit_expression(expr);
                    }
                }
            },
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::FunctionDeclaration(func)) => {
                    if let Some(body) = &func.body {
                        self.visit_function_body(body);
                    }
                }
                Some(Declaration::VariableDeclaration(decl)) => {
                    for declarator in decl.declarations.iter() {
                        if let Some(init) = &declarator.init {
                            self.visit_expression(init);
                        }
                    }
                }
                _ => {}
            },
            // Unknown statement shapes are dead ends
            _ => {}
        }
    }

    #[inline]
    fn visit_function_body(&mut self, body: &FunctionBody<'a>) {
        for stmt in body.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::JSXElement(element) => self.visit_jsx_element(element),
            Expression::JSXFragment(fragment) => self.visit_jsx_fragment(fragment),
            Expression::ConditionalExpression(cond) => {
                self.visit_expression(&cond.consequent);
                self.visit_expression(&cond.alternate);
            }
            Expression::LogicalExpression(logical) => {
                self.visit_expression(&logical.left);
                self.visit_expression(&logical.right);
            }
            Expression::ArrayExpression(array) => {
                for element in array.elements.iter() {
                    match element {
                        ArrayExpressionElement::SpreadElement(spread) => {
                            self.visit_expression(&spread.argument);
                        }
                        ArrayExpressionElement::Elision(_) => {}
                        _ => {
                            if let Some(expr) = element.as_expression() {
                                self.visit_expression(expr);
                            }
                        }
                    }
                }
            }
            Expression::CallExpression(call) => {
                // Follow the callee too: patterns like items.map(...) keep
                // renderable content in both positions
                self.visit_expression(&call.callee);
                for arg in call.arguments.iter() {
                    match arg {
                        Argument::SpreadElement(spread) => {
                            self.visit_expression(&spread.argument);
                        }
                        _ => {
                            if let Some(expr) = arg.as_expression() {
                                self.visit_expression(expr);
                            }
                        }
                    }
                }
            }
            Expression::ArrowFunctionExpression(arrow) => {
                // Expression-bodied arrows are wrapped in a synthetic
                // expression statement, so this covers both forms
                self.visit_function_body(&arrow.body);
            }
            Expression::FunctionExpression(func) => {
                if let Some(body) = &func.body {
                    self.visit_function_body(body);
                }
            }
            Expression::ParenthesizedExpression(paren) => {
                self.visit_expression(&paren.expression);
            }
            Expression::ObjectExpression(object) => {
                for prop in object.properties.iter() {
                    if let ObjectPropertyKind::ObjectProperty(prop) = prop {
                        self.visit_expression(&prop.value);
                    }
                }
            }
            // Unknown expression shapes are dead ends
            _ => {}
        }
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        let tag = content::element_tag(element).map(CompactString::from);
        let children_all_inline = content::all_children_inline(element, self.ctx.oracle());

        self.ctx.push_element(ElementContext::new(
            tag,
            element.span,
            children_all_inline,
        ));

        for rule in self.rules.iter() {
            if !self.ctx.is_rule_enabled(rule.meta().name) {
                continue;
            }
            self.ctx.current_rule = rule.meta().name;
            rule.enter_element(self.ctx, element);
        }

        for child in element.children.iter() {
            self.visit_jsx_child(child);
        }

        for rule in self.rules.iter() {
            if !self.ctx.is_rule_enabled(rule.meta().name) {
                continue;
            }
            self.ctx.current_rule = rule.meta().name;
            rule.exit_element(self.ctx, element);
        }

        self.ctx.pop_element();
    }

    #[inline]
    fn visit_jsx_fragment(&mut self, fragment: &JSXFragment<'a>) {
        for child in fragment.children.iter() {
            self.visit_jsx_child(child);
        }
    }

    fn visit_jsx_child(&mut self, child: &JSXChild<'a>) {
        match child {
            JSXChild::Element(element) => self.visit_jsx_element(element),
            JSXChild::Fragment(fragment) => self.visit_jsx_fragment(fragment),
            JSXChild::ExpressionContainer(container) => {
                if let Some(expr) = container.expression.as_expression() {
                    self.visit_expression(expr);
                }
            }
            JSXChild::Text(_) => {}
            // Spread children are a dead end
            _ => {}
        }
    }
}
