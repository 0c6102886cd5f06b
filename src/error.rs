//! Diagnostics for constructs the resolver leaves out of the schema output.
//!
//! Resolution never fails: unsupported shapes degrade to name-only schemas,
//! dropped members, or lenient fallbacks. The `_with_diags` resolver entry
//! points surface one `Diag` per degradation for hosts that want
//! visibility; the plain entry points stay silent.

use thiserror::Error;

use crate::ast::Span;

/// Reason a construct was skipped or downgraded during resolution.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    #[error("unsupported type expression")]
    UnsupportedShape,
    #[error("variadic parameter")]
    Variadic,
    #[error("map key or value did not resolve")]
    MapEntry,
    #[error("array bound is not an integer literal; treated as slice")]
    ArrayBound,
}

/// One skipped or downgraded construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub reason: SkipReason,
    pub span: Span,
    pub message: String,
}

impl Diag {
    #[inline]
    pub fn new(reason: SkipReason, span: Span, message: impl Into<String>) -> Self {
        Self {
            reason,
            span,
            message: message.into(),
        }
    }
}
