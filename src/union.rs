//! Union handler (`SPEC_FULL.md` §4.8): an ordered list of alternative
//! types tried in declaration order. The original host-language design
//! left this list open-ended (append any number of alternatives);
//! Rust's static typing forces a closed per-arity family of combinators
//! instead (`Union2`..`Union4`), documented as a settled Open Question in
//! `DESIGN.md`.

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

fn union_loading_error(pos: &Position, type_name: &'static str) -> DecodeError {
    DecodeError::UnionLoadingError {
        qual: pos.qual.clone(),
        type_name,
    }
}

/// Two ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Union2<A, B> {
    A(A),
    B(B),
}

impl<A: FromEnv, B: FromEnv> FromEnv for Union2<A, B> {
    fn kind() -> SchemaKind {
        SchemaKind::Union
    }

    fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool {
        A::is_present(pos, ledger, config) || B::is_present(pos, ledger, config)
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        if A::is_present(pos, ledger, config) {
            return A::decode(pos, ledger, config).map(Union2::A);
        }
        if B::is_present(pos, ledger, config) {
            return B::decode(pos, ledger, config).map(Union2::B);
        }
        Err(union_loading_error(pos, "Union2"))
    }
}

/// Three ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Union3<A, B, C> {
    A(A),
    B(B),
    C(C),
}

impl<A: FromEnv, B: FromEnv, C: FromEnv> FromEnv for Union3<A, B, C> {
    fn kind() -> SchemaKind {
        SchemaKind::Union
    }

    fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool {
        A::is_present(pos, ledger, config)
            || B::is_present(pos, ledger, config)
            || C::is_present(pos, ledger, config)
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        if A::is_present(pos, ledger, config) {
            return A::decode(pos, ledger, config).map(Union3::A);
        }
        if B::is_present(pos, ledger, config) {
            return B::decode(pos, ledger, config).map(Union3::B);
        }
        if C::is_present(pos, ledger, config) {
            return C::decode(pos, ledger, config).map(Union3::C);
        }
        Err(union_loading_error(pos, "Union3"))
    }
}

/// Four ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Union4<A, B, C, D> {
    A(A),
    B(B),
    C(C),
    D(D),
}

impl<A: FromEnv, B: FromEnv, C: FromEnv, D: FromEnv> FromEnv for Union4<A, B, C, D> {
    fn kind() -> SchemaKind {
        SchemaKind::Union
    }

    fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool {
        A::is_present(pos, ledger, config)
            || B::is_present(pos, ledger, config)
            || C::is_present(pos, ledger, config)
            || D::is_present(pos, ledger, config)
    }

    fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
        if A::is_present(pos, ledger, config) {
            return A::decode(pos, ledger, config).map(Union4::A);
        }
        if B::is_present(pos, ledger, config) {
            return B::decode(pos, ledger, config).map(Union4::B);
        }
        if C::is_present(pos, ledger, config) {
            return C::decode(pos, ledger, config).map(Union4::C);
        }
        if D::is_present(pos, ledger, config) {
            return D::decode(pos, ledger, config).map(Union4::D);
        }
        Err(union_loading_error(pos, "Union4"))
    }
}
