//! Error types for structure operations

use crate::Encoding;
use thiserror::Error;

/// Error type for structure operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("duplicate field: {0}")]
    DuplicateField(String),
    #[error("invalid descriptor for {0}: {1}")]
    InvalidDescriptor(String, &'static str), // field, reason
    #[error("type mismatch for {field}: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: Encoding,
        found: &'static str,
    },
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
    #[error("capacity exceeded for {field}: {found} > {capacity}")]
    CapacityExceeded {
        field: String,
        capacity: usize,
        found: usize,
    },
}
