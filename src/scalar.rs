//! Scalar handlers: integer, floating-point, and string leaves
//! (`SPEC_FULL.md` §4.4).

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

/// Implement `FromEnv` for a `FromStr` numeric type: present iff the key is
/// in the raw input and unclaimed; decode claims then parses, mapping a
/// parse failure to `InvalidVariableFormat`.
macro_rules! impl_from_env_numeric {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromEnv for $ty {
                fn kind() -> SchemaKind {
                    SchemaKind::Scalar
                }

                fn is_present(pos: &Position, ledger: &Ledger<'_>, _config: &Config) -> bool {
                    ledger.is_unclaimed(&pos.key)
                }

                fn decode(pos: &Position, ledger: &mut Ledger<'_>, _config: &Config) -> Result<Self, DecodeError> {
                    let raw = ledger.claim(&pos.key, &pos.qual)?;
                    raw.parse::<$ty>().map_err(|e| DecodeError::InvalidVariableFormat {
                        key: pos.key.clone(),
                        qual: pos.qual.clone(),
                        cause: e.to_string(),
                    })
                }
            }
        )+
    };
}

impl_from_env_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl FromEnv for String {
    fn kind() -> SchemaKind {
        SchemaKind::Scalar
    }

    fn is_present(pos: &Position, ledger: &Ledger<'_>, _config: &Config) -> bool {
        ledger.is_unclaimed(&pos.key)
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, _config: &Config) -> Result<Self, DecodeError> {
        let raw = ledger.claim(&pos.key, &pos.qual)?;
        Ok(raw.to_string())
    }
}
