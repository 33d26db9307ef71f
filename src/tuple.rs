//! Fixed-arity tuple handler (`SPEC_FULL.md` §4.11): a known, fixed number
//! of positional elements, each with its own (possibly distinct) type.

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::kind::SchemaKind;
use crate::ledger::Ledger;
use crate::position::Position;

/// Implement `FromEnv` for an `N`-ary Rust tuple. Presence is the
/// conjunction of every element's presence: a tuple with any element
/// missing is not present, which is what lets a field-level default
/// absorb a partially-filled tuple without the decode attempt ever
/// running (and thus without surfacing that element's own error).
macro_rules! impl_fixed_tuple {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: FromEnv, $($rest: FromEnv),*> FromEnv for ($first, $($rest,)*) {
            fn kind() -> SchemaKind {
                SchemaKind::FixedTuple
            }

            #[allow(non_snake_case, unused_assignments)]
            fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool {
                let mut index = 0usize;
                let first_pos = pos.child_index(config, index);
                index += 1;
                if !$first::is_present(&first_pos, ledger, config) {
                    return false;
                }
                $(
                    let elem_pos = pos.child_index(config, index);
                    index += 1;
                    if !$rest::is_present(&elem_pos, ledger, config) {
                        return false;
                    }
                )*
                true
            }

            #[allow(non_snake_case, unused_assignments)]
            fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
                let mut index = 0usize;
                let $first = {
                    let elem_pos = pos.child_index(config, index);
                    index += 1;
                    $first::decode(&elem_pos, ledger, config)?
                };
                $(
                    let $rest = {
                        let elem_pos = pos.child_index(config, index);
                        index += 1;
                        $rest::decode(&elem_pos, ledger, config)?
                    };
                )*
                Ok(($first, $($rest,)*))
            }
        }
    };
}

impl_fixed_tuple!(A);
impl_fixed_tuple!(A, B);
impl_fixed_tuple!(A, B, C);
impl_fixed_tuple!(A, B, C, D);
impl_fixed_tuple!(A, B, C, D, E);
impl_fixed_tuple!(A, B, C, D, E, F);

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
            key: "PAIR".to_string(),
            qual: "root.pair".to_string(),
        }
    }

    #[test]
    fn test_two_tuple_decodes_heterogeneous_elements() {
        let config = Config::default();
        let input = map(&[("PAIR_0", "8080"), ("PAIR_1", "localhost")]);
        let mut ledger = Ledger::new(&input);
        let value = <(i64, String)>::decode(&pos(), &mut ledger, &config).unwrap();
        assert_eq!(value, (8080, "localhost".to_string()));
    }

    #[test]
    fn test_is_present_true_only_when_every_element_present() {
        let config = Config::default();
        let input = map(&[("PAIR_0", "8080"), ("PAIR_1", "localhost")]);
        let ledger = Ledger::new(&input);
        assert!(<(i64, String)>::is_present(&pos(), &ledger, &config));
    }

    #[test]
    fn test_is_present_false_when_first_element_absent() {
        let config = Config::default();
        let input = map(&[("PAIR_1", "localhost")]);
        let ledger = Ledger::new(&input);
        assert!(!<(i64, String)>::is_present(&pos(), &ledger, &config));
    }

    #[test]
    fn test_is_present_false_when_any_later_element_absent() {
        let config = Config::default();
        let input = map(&[("PAIR_0", "8080")]);
        let ledger = Ledger::new(&input);
        assert!(!<(i64, String)>::is_present(&pos(), &ledger, &config));
    }

    #[test]
    fn test_missing_second_element_raises_missing_required_var() {
        let config = Config::default();
        let input = map(&[("PAIR_0", "8080")]);
        let mut ledger = Ledger::new(&input);
        let err = <(i64, String)>::decode(&pos(), &mut ledger, &config).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredVar { .. }));
    }

    #[test]
    fn test_three_tuple_decodes_in_index_order() {
        let config = Config::default();
        let input = map(&[("PAIR_0", "1"), ("PAIR_1", "2"), ("PAIR_2", "3")]);
        let mut ledger = Ledger::new(&input);
        let value = <(i64, i64, i64)>::decode(&pos(), &mut ledger, &config).unwrap();
        assert_eq!(value, (1, 2, 3));
    }
}
