//! Decode error taxonomy.
//!
//! Every fallible core operation returns this single enum. Each variant
//! carries the qualified name of the schema position responsible, so a
//! caller can localize the problem without inspecting decoder internals.

use thiserror::Error;

/// All errors a decode can raise.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A scalar (or scalar-leaf of a composite) required by the schema has
    /// no corresponding key in the input.
    #[error("variable '{key}' not found (required for {qual})")]
    MissingRequiredVar { key: String, qual: String },

    /// A key was claimed by two distinct schema positions.
    #[error(
        "variable '{key}' has ambiguous binding:\n\t1. {first_qual}\n\t2. {second_qual}"
    )]
    AmbiguousVarError {
        key: String,
        first_qual: String,
        second_qual: String,
    },

    /// The raw string value could not be parsed into the target type.
    #[error("variable '{key}' (for {qual}) has invalid format: {cause}")]
    InvalidVariableFormat {
        key: String,
        qual: String,
        cause: String,
    },

    /// No handler could decode this schema position.
    #[error("{qual} has unsupported type: {type_name}")]
    UnsupportedValueType {
        qual: String,
        type_name: &'static str,
    },

    /// None of the union alternatives reported present.
    #[error("none of the union alternatives could be loaded for {qual} ({type_name})")]
    UnionLoadingError {
        qual: String,
        type_name: &'static str,
    },

    /// A malformed schema description supplied by the host (programmer error).
    #[error("schema error: {0}")]
    SchemaError(String),

    /// Raised only by the opt-in strict entry point: input keys existed but
    /// were never claimed by any schema position. Caller data, not a
    /// malformed schema, so it gets its own variant rather than overloading
    /// `SchemaError`.
    #[error("unclaimed input keys: {}", .keys.join(", "))]
    UnclaimedInputKeys { keys: Vec<String> },
}
