//! Type oracle adapter.
//!
//! The linter never talks to a type checker directly. The host may inject a
//! [`TypeOracle`] that answers one question: what are the type flags of the
//! expression at a given span? Everything else - absence of an oracle, query
//! failure, the fail-open fold - is handled here, at a single policy point.

use oxc_span::Span;
use std::sync::Arc;
use thiserror::Error;

bitflags::bitflags! {
    /// Flag bits of a resolved static type, mirroring the subset of
    /// type-checker flags the linter cares about.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeFlags: u8 {
        const STRING = 1 << 0;
        const STRING_LITERAL = 1 << 1;
        const TEMPLATE_LITERAL = 1 << 2;
    }
}

impl TypeFlags {
    /// A type is string-like iff any of the string flags are set.
    ///
    /// Unions that are not purely string-like must not set any of these
    /// flags; that contract is on the oracle implementation.
    #[inline]
    pub fn is_string_like(self) -> bool {
        self.intersects(Self::STRING | Self::STRING_LITERAL | Self::TEMPLATE_LITERAL)
    }
}

/// Error from a type oracle query
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle has no type-system node for this tree position
    #[error("no type information at offset {0}..{1}")]
    Unmapped(u32, u32),
    /// The underlying checker failed
    #[error("type query failed: {0}")]
    Query(String),
}

/// Static type information service, injected by the host.
///
/// Implementations resolve a tree-level span to the type system's internal
/// node and return its flags. Both steps may fail; failures are recovered
/// by the adapter, never surfaced.
pub trait TypeOracle: Send + Sync {
    fn type_at(&self, span: Span) -> Result<TypeFlags, OracleError>;
}

/// Result of classifying an expression slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    TextLike,
    NotTextLike,
    /// No oracle configured, or the query failed
    Unknown,
}

impl Classification {
    #[inline]
    pub fn is_text_like(self) -> bool {
        matches!(self, Self::TextLike)
    }
}

/// Wraps the optional host oracle and owns the fail-open policy.
#[derive(Clone, Default)]
pub struct OracleAdapter {
    oracle: Option<Arc<dyn TypeOracle>>,
}

impl OracleAdapter {
    /// Create an adapter around a host-provided oracle
    #[inline]
    pub fn new(oracle: Arc<dyn TypeOracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Create an adapter with no type information available
    #[inline]
    pub fn none() -> Self {
        Self { oracle: None }
    }

    /// Check whether a host oracle is configured
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.oracle.is_some()
    }

    /// Classify the expression at `span`.
    ///
    /// Returns `Unknown` when no oracle is configured or the query errors;
    /// no error escapes this call.
    pub fn classify(&self, span: Span) -> Classification {
        let Some(oracle) = &self.oracle else {
            return Classification::Unknown;
        };
        match oracle.type_at(span) {
            Ok(flags) if flags.is_string_like() => Classification::TextLike,
            Ok(_) => Classification::NotTextLike,
            Err(_) => Classification::Unknown,
        }
    }

    /// Classify with the fail-open fold applied: `Unknown` becomes
    /// `TextLike`. Prefer suggesting over silence.
    #[inline]
    pub fn classify_fail_open(&self, span: Span) -> Classification {
        match self.classify(span) {
            Classification::Unknown => Classification::TextLike,
            c => c,
        }
    }
}

impl std::fmt::Debug for OracleAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleAdapter")
            .field("configured", &self.oracle.is_some())
            .finish()
    }
}
