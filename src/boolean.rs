//! Boolean handler (`SPEC_FULL.md` §4.5). Distinguished from the numeric
//! scalar family by its own accepted-literal parser rather than `FromStr`.

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

impl FromEnv for bool {
    fn kind() -> SchemaKind {
        SchemaKind::Boolean
    }

    fn is_present(pos: &Position, ledger: &Ledger<'_>, _config: &Config) -> bool {
        ledger.is_unclaimed(&pos.key)
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, _config: &Config) -> Result<Self, DecodeError> {
        let raw = ledger.claim(&pos.key, &pos.qual)?;
        match raw.trim().to_uppercase().as_str() {
            "TRUE" | "1" | "YES" => Ok(true),
            "FALSE" | "0" | "NO" => Ok(false),
            other => Err(DecodeError::InvalidVariableFormat {
                key: pos.key.clone(),
                qual: pos.qual.clone(),
                cause: format!("'{other}' is not a recognized boolean literal"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn decode_one(raw: &str) -> Result<bool, DecodeError> {
        let config = Config::default();
        let input: HashMap<String, String> = [("B".to_string(), raw.to_string())].into();
        let mut ledger = Ledger::new(&input);
        let pos = Position {
            key: "B".to_string(),
            qual: "root.b".to_string(),
        };
        bool::decode(&pos, &mut ledger, &config)
    }

    #[test]
    fn test_accepts_true_variants() {
        assert_eq!(decode_one("true").unwrap(), true);
        assert_eq!(decode_one("TRUE").unwrap(), true);
        assert_eq!(decode_one("1").unwrap(), true);
        assert_eq!(decode_one("yes").unwrap(), true);
        assert_eq!(decode_one(" True ").unwrap(), true);
    }

    #[test]
    fn test_accepts_false_variants() {
        assert_eq!(decode_one("false").unwrap(), false);
        assert_eq!(decode_one("0").unwrap(), false);
        assert_eq!(decode_one("no").unwrap(), false);
    }

    #[test]
    fn test_rejects_unrecognized_literal() {
        let err = decode_one("maybe").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidVariableFormat { .. }));
    }
}
