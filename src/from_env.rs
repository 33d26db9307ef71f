//! The `FromEnv` trait: the Rust realization of the host-supplied Schema
//! Inspector (`SPEC_FULL.md` §1, §4.2), plus the two public entry points.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::DecodeError;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

/// Implemented once per decodable Rust type. The core provides impls for
/// every leaf and composite kind (`SPEC_FULL.md` §4.4-§4.12); hosts
/// implement it by hand for their own record types, driving a
/// [`crate::record::RecordCursor`] field-by-field.
pub trait FromEnv: Sized {
    /// The structural kind this type represents. Used only for
    /// diagnostics — dispatch itself is the compiler resolving this impl.
    fn kind() -> SchemaKind;

    /// Side-effect-free: could this position be decoded without raising a
    /// missing-variable error? Must never claim.
    fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool;

    /// Decode this position, claiming whatever input keys it consumes.
    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError>;
}

/// Short, unqualified name of `T` for use as the root qualified name.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Decode a value of type `T` from a flat string map.
///
/// This is the entry point of `SPEC_FULL.md` §6: constructs the root
/// position from `config`, then recurses via `T`'s [`FromEnv`] impl.
pub fn decode<T: FromEnv>(
    input: &HashMap<String, String>,
    config: &Config,
) -> Result<T, DecodeError> {
    let pos = Position::root(config, short_type_name::<T>());
    let mut ledger = Ledger::new(input);
    T::decode(&pos, &mut ledger, config)
}

/// Like [`decode`], but also fails if any input key was never claimed by
/// the schema (the opt-in strict mode `SPEC_FULL.md` §9 leaves unspecified
/// in the core but calls out as a reasonable extension).
pub fn decode_strict<T: FromEnv>(
    input: &HashMap<String, String>,
    config: &Config,
) -> Result<T, DecodeError> {
    let pos = Position::root(config, short_type_name::<T>());
    let mut ledger = Ledger::new(input);
    let value = T::decode(&pos, &mut ledger, config)?;
    let mut unclaimed = ledger.unclaimed_keys();
    if !unclaimed.is_empty() {
        unclaimed.sort_unstable();
        return Err(DecodeError::UnclaimedInputKeys {
            keys: unclaimed.into_iter().map(str::to_string).collect(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_scalar_root() {
        let config = Config::default().with_prefix("PORT");
        let input = map(&[("PORT", "8080")]);
        let value: i64 = decode(&input, &config).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_decode_strict_rejects_unclaimed_keys() {
        let config = Config::default().with_prefix("PORT");
        let input = map(&[("PORT", "8080"), ("EXTRA", "x")]);
        let err = decode_strict::<i64>(&input, &config).unwrap_err();
        match err {
            DecodeError::UnclaimedInputKeys { keys } => assert_eq!(keys, vec!["EXTRA".to_string()]),
            other => panic!("expected UnclaimedInputKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_strict_accepts_fully_claimed_input() {
        let config = Config::default().with_prefix("PORT");
        let input = map(&[("PORT", "8080")]);
        let value: i64 = decode_strict(&input, &config).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_short_type_name_strips_module_path() {
        assert_eq!(short_type_name::<i64>(), "i64");
    }
}
