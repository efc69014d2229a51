//! Error types for the quote schema.
//!
//! The `SchemaError` enum covers the few ways decoding or encoding a quote can
//! fail, plus the conditions a fetch collaborator observes on a cancelled
//! request context. Callers propagate a single error type.
use std::io;

use thiserror::Error;

use crate::classification::ClassificationKind;

/// Unified error type of the quote schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// I/O error while reading or writing quote documents.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON or a field with the wrong type.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure while decoding a `bincode` snapshot (invalid or truncated payloads, etc.).
    #[error("Bincode snapshot decode error: {0}")]
    BincodeDecode(#[from] bincode::error::DecodeError),

    /// Failure while encoding a `bincode` snapshot.
    #[error("Bincode snapshot encode error: {0}")]
    BincodeEncode(#[from] bincode::error::EncodeError),

    /// A classification string outside the closed vocabulary.
    #[error("Unrecognized {kind} value: {value:?}")]
    UnrecognizedClassification {
        /// Which vocabulary was being decoded.
        kind: ClassificationKind,
        /// The raw value as received.
        value: String,
    },

    /// A required wire key is absent from the document.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A request was built with an empty symbol.
    #[error("Symbol must not be empty")]
    EmptySymbol,

    /// The request context was cancelled by its owner.
    #[error("Request cancelled")]
    Cancelled,

    /// The request context deadline has passed.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl SchemaError {
    /// Returns `true` for the classification error, the one failure intrinsic to the schema.
    pub fn is_unrecognized_classification(&self) -> bool {
        matches!(self, SchemaError::UnrecognizedClassification { .. })
    }
}
