//! Homogeneous-sequence and any-length-tuple handlers (`SPEC_FULL.md`
//! §4.10, §4.12). Both kinds share the same element-walking algorithm and
//! differ only in their output shape, so the walk lives in one place.

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

/// Reserved suffix for the optional declared-length sentinel:
/// `<key><sep>LEN`.
pub const LEN_SUFFIX: &str = "LEN";

/// Walk `pos[0]`, `pos[1]`, ... decoding each element of type `T`.
///
/// An optional declared length is read first from `pos<sep>LEN`. Iteration
/// continues while the element is present or its index is still within the
/// declared length; inside a declared length, a zero-footprint element
/// (e.g. an absent `Optional` slot) is still produced, since the length is
/// the authority on how many elements exist. Past the declared length (or
/// when none was declared), a zero-footprint element stops the walk —
/// otherwise a type whose `is_present` is unconditionally `true` (such as
/// `Option<_>`) would loop forever manufacturing defaults.
fn decode_elements<T: FromEnv>(
    pos: &Position,
    ledger: &mut Ledger<'_>,
    config: &Config,
) -> Result<Vec<T>, DecodeError> {
    let len_pos = pos.child_suffix(config, LEN_SUFFIX);
    let declared_len = Option::<usize>::decode(&len_pos, ledger, config)?;

    let mut items = Vec::new();
    let mut index = 0usize;
    loop {
        let within_declared = declared_len.is_some_and(|n| index < n);
        let elem_pos = pos.child_index(config, index);
        if !(T::is_present(&elem_pos, ledger, config) || within_declared) {
            break;
        }

        let scope = ledger.scope();
        let value = T::decode(&elem_pos, ledger, config)?;
        if scope.footprint(ledger) == 0 && !within_declared {
            break;
        }

        items.push(value);
        index += 1;
    }
    Ok(items)
}

impl<T: FromEnv> FromEnv for Vec<T> {
    fn kind() -> SchemaKind {
        SchemaKind::Sequence
    }

    /// A sequence can always produce an empty list from no input.
    fn is_present(_pos: &Position, _ledger: &Ledger<'_>, _config: &Config) -> bool {
        true
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        decode_elements::<T>(pos, ledger, config)
    }
}

/// An any-length tuple: structurally identical to a sequence but a distinct
/// output type, since the spec draws a line between "list of T" and "tuple
/// of unknown length, each T" even though both decode the same way
/// (`SPEC_FULL.md` §4.12).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnyTuple<T>(pub Vec<T>);

impl<T> AnyTuple<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> std::ops::Deref for AnyTuple<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.0
    }
}

impl<T: FromEnv> FromEnv for AnyTuple<T> {
    fn kind() -> SchemaKind {
        SchemaKind::AnyLengthTuple
    }

    fn is_present(_pos: &Position, _ledger: &Ledger<'_>, _config: &Config) -> bool {
        true
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        decode_elements::<T>(pos, ledger, config).map(AnyTuple)
    }
}
