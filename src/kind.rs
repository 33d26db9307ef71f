//! `SchemaKind`: labels a structural kind for diagnostics only. Dispatch
//! itself is resolved by the compiler through the [`crate::FromEnv`] trait
//! (see `SPEC_FULL.md` §4.13); nothing here drives control flow.

use std::fmt;

/// The closed set of structural kinds a schema position can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Scalar,
    Boolean,
    Record,
    Union,
    Optional,
    Sequence,
    FixedTuple,
    AnyLengthTuple,
    Custom,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SchemaKind::Scalar => "scalar",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Record => "record",
            SchemaKind::Union => "union",
            SchemaKind::Optional => "optional",
            SchemaKind::Sequence => "sequence",
            SchemaKind::FixedTuple => "fixed-tuple",
            SchemaKind::AnyLengthTuple => "any-length-tuple",
            SchemaKind::Custom => "custom",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_expected_labels() {
        assert_eq!(SchemaKind::Scalar.to_string(), "scalar");
        assert_eq!(SchemaKind::AnyLengthTuple.to_string(), "any-length-tuple");
    }
}
