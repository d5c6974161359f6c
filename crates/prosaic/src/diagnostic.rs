//! Diagnostic types for the prosaic linter.
//!
//! Uses `CompactString` for efficient small string storage.

use compact_str::CompactString;
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;
use serde::Serialize;

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A text edit for auto-fixing a diagnostic.
///
/// Represents a single text replacement in the source code.
#[derive(Debug, Clone, Serialize)]
pub struct TextEdit {
    /// Start byte offset
    pub start: u32,
    /// End byte offset
    pub end: u32,
    /// Replacement text
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit
    #[inline]
    pub fn new(start: u32, end: u32, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }

    /// Create a replacement edit covering a span
    #[inline]
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self::new(span.start, span.end, text)
    }
}

/// A fix for a diagnostic, containing one or more text edits.
///
/// The edits are atomic: `apply` performs all of them or none.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    /// Description of the fix
    pub message: String,
    /// Text edits to apply
    pub edits: Vec<TextEdit>,
}

impl Fix {
    /// Create a new fix with a single edit
    #[inline]
    pub fn new(message: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            message: message.into(),
            edits: vec![edit],
        }
    }

    /// Create a new fix with multiple edits
    #[inline]
    pub fn with_edits(message: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            message: message.into(),
            edits,
        }
    }

    /// Apply the fix to a source string
    pub fn apply(&self, source: &str) -> String {
        let mut result = source.to_string();
        // Apply edits in reverse order to preserve offsets
        let mut edits = self.edits.clone();
        edits.sort_by(|a, b| b.start.cmp(&a.start));

        for edit in edits {
            let start = edit.start as usize;
            let end = edit.end as usize;
            if start <= end && end <= result.len() {
                result.replace_range(start..end, &edit.new_text);
            }
        }
        result
    }
}

/// A lint diagnostic with rich information for display.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Primary message
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
    /// Help message for fixing (optional)
    pub help: Option<CompactString>,
    /// Suggested fix for this diagnostic (optional)
    pub fix: Option<Fix>,
}

impl LintDiagnostic {
    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity: Severity::Error,
            message: message.into(),
            start,
            end,
            help: None,
            fix: None,
        }
    }

    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        rule_name: &'static str,
        message: impl Into<CompactString>,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            rule_name,
            severity: Severity::Warning,
            message: message.into(),
            start,
            end,
            help: None,
            fix: None,
        }
    }

    /// Add a help message
    #[inline]
    pub fn with_help(mut self, help: impl Into<CompactString>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a fix for this diagnostic
    #[inline]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Check if this diagnostic has a fix
    #[inline]
    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }

    /// Convert to OxcDiagnostic for rich rendering
    pub fn into_oxc_diagnostic(self) -> OxcDiagnostic {
        let mut diag = match self.severity {
            Severity::Error => OxcDiagnostic::error(self.message.to_string()),
            Severity::Warning => OxcDiagnostic::warn(self.message.to_string()),
        };

        diag = diag.with_label(Span::new(self.start, self.end));

        if let Some(help) = self.help {
            diag = diag.with_help(help.to_string());
        }

        diag
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn add(&mut self, diagnostic: &LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_apply_multiple_edits() {
        // Rename both tag name tokens without touching the content
        let source = "<div>Hello</div>";
        let fix = Fix::with_edits(
            "Replace <div> with <p>",
            vec![
                TextEdit::new(1, 4, "p"),
                TextEdit::new(12, 15, "p"),
            ],
        );
        assert_eq!(fix.apply(source), "<p>Hello</p>");
    }

    #[test]
    fn test_fix_apply_preserves_order_independence() {
        let source = "abcdef";
        let fix = Fix::with_edits(
            "swap",
            vec![TextEdit::new(0, 1, "x"), TextEdit::new(5, 6, "y")],
        );
        assert_eq!(fix.apply(source), "xbcdey");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = LintSummary::default();
        summary.add(&LintDiagnostic::error("x", "boom", 0, 1));
        summary.add(&LintDiagnostic::warn("x", "hmm", 0, 1));
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 1);
        assert!(summary.has_errors());
    }
}
