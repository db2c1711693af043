//! Spec-level error types for the AVM execution core

use crate::tag::TypeTag;
use thiserror::Error;

/// Errors raised by the tagged-value algebra.
///
/// Every ALU operation is total over matching-tag inputs; only tag violations
/// are erroneous.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("tag mismatch: expected {expected}, found {found}")]
    TagMismatch { expected: TypeTag, found: TypeTag },

    #[error("expected an integral tag, found {0}")]
    NotIntegral(TypeTag),
}
