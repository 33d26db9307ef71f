//! Optional handler (`SPEC_FULL.md` §4.9): `Option<T>` is a distinct kind
//! even though it could be expressed as a two-armed union, so it can carry
//! the explicit-null sentinel.

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

/// Reserved suffix for the explicit-null sentinel: `<key><sep>IS_NONE__`.
pub const IS_NONE_SUFFIX: &str = "IS_NONE__";

impl<T: FromEnv> FromEnv for Option<T> {
    fn kind() -> SchemaKind {
        SchemaKind::Optional
    }

    /// Optional never raises Missing at its own position: it can always
    /// produce `None`.
    fn is_present(_pos: &Position, _ledger: &Ledger<'_>, _config: &Config) -> bool {
        true
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        let sentinel = pos.child_suffix(config, IS_NONE_SUFFIX);
        if ledger.has_key(&sentinel.key) {
            ledger.claim(&sentinel.key, &sentinel.qual)?;
            return Ok(None);
        }

        if T::is_present(pos, ledger, config) {
            let scope = ledger.scope();
            let value = T::decode(pos, ledger, config)?;
            return if scope.footprint(ledger) > 0 {
                Ok(Some(value))
            } else {
                // Zero-footprint inner result means nothing was actually
                // provided, so Optional's own default wins.
                Ok(None)
            };
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pos() -> Position {
        Position {
            key: "VALUE".to_string(),
            qual: "root.value".to_string(),
        }
    }

    #[test]
    fn test_absent_inner_decodes_to_none() {
        let config = Config::default();
        let input = map(&[]);
        let mut ledger = Ledger::new(&input);
        assert_eq!(Option::<i64>::decode(&pos(), &mut ledger, &config).unwrap(), None);
    }

    #[test]
    fn test_present_inner_decodes_to_some() {
        let config = Config::default();
        let input = map(&[("VALUE", "42")]);
        let mut ledger = Ledger::new(&input);
        assert_eq!(
            Option::<i64>::decode(&pos(), &mut ledger, &config).unwrap(),
            Some(42)
        );
    }

    #[test]
    fn test_explicit_null_sentinel_wins_even_with_inner_present() {
        let config = Config::default();
        let input = map(&[("VALUE", "42"), ("VALUE_IS_NONE__", "")]);
        let mut ledger = Ledger::new(&input);
        assert_eq!(Option::<i64>::decode(&pos(), &mut ledger, &config).unwrap(), None);
    }

    #[test]
    fn test_sentinel_claims_its_own_key() {
        let config = Config::default();
        let input = map(&[("VALUE_IS_NONE__", "")]);
        let mut ledger = Ledger::new(&input);
        Option::<i64>::decode(&pos(), &mut ledger, &config).unwrap();
        assert!(!ledger.is_unclaimed("VALUE_IS_NONE__"));
    }

    #[test]
    fn test_is_present_always_true() {
        let config = Config::default();
        let input = map(&[]);
        let ledger = Ledger::new(&input);
        assert!(Option::<i64>::is_present(&pos(), &ledger, &config));
    }

    #[test]
    fn test_zero_footprint_nested_optional_record_yields_none() {
        // An inner Option<i64> at the same key is itself zero-footprint
        // when nothing is present, so the outer Optional should see
        // footprint 0 and collapse to None rather than Some(None).
        let config = Config::default();
        let input = map(&[]);
        let mut ledger = Ledger::new(&input);
        let outer: Option<Option<i64>> = FromEnv::decode(&pos(), &mut ledger, &config).unwrap();
        assert_eq!(outer, None);
    }
}
