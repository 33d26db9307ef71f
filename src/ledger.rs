//! Binding Ledger: tracks which input keys have already been claimed by
//! which schema position, and the sole enforcement point of
//! at-most-one-claim.

use std::collections::HashMap;

use crate::error::DecodeError;

/// Tracks claims made against one top-level decode's input.
///
/// A ledger never unclaims. Speculative reads (`has_key`) must never mutate
/// it; `claim` is the only claiming operation.
#[derive(Debug)]
pub struct Ledger<'a> {
    input: &'a HashMap<String, String>,
    claimed: HashMap<String, String>,
    claims_taken: usize,
}

/// A footprint-tracking region opened by [`Ledger::scope`].
///
/// Not RAII: the caller explicitly reads the footprint via
/// [`Scope::footprint`] once decoding inside the scope is done.
#[derive(Debug, Clone, Copy)]
pub struct Scope {
    claims_at_open: usize,
}

impl<'a> Ledger<'a> {
    /// Create a ledger over the given read-only input mapping.
    pub fn new(input: &'a HashMap<String, String>) -> Self {
        Self {
            input,
            claimed: HashMap::new(),
            claims_taken: 0,
        }
    }

    /// Whether the raw input contains `key`, claimed or not.
    pub fn has_key(&self, key: &str) -> bool {
        self.input.contains_key(key)
    }

    /// Whether `key` is present in the input and not yet claimed — the
    /// presence predicate scalar handlers use.
    pub fn is_unclaimed(&self, key: &str) -> bool {
        self.input.contains_key(key) && !self.claimed.contains_key(key)
    }

    /// Claim `key` for the position named `qual`.
    ///
    /// Fails with [`DecodeError::MissingRequiredVar`] if the key is absent,
    /// or [`DecodeError::AmbiguousVarError`] if the key was already claimed
    /// by a different position. On success, returns the raw string value.
    pub fn claim(&mut self, key: &str, qual: &str) -> Result<&'a str, DecodeError> {
        let raw = self
            .input
            .get(key)
            .ok_or_else(|| DecodeError::MissingRequiredVar {
                key: key.to_string(),
                qual: qual.to_string(),
            })?;
        if let Some(first_qual) = self.claimed.get(key) {
            return Err(DecodeError::AmbiguousVarError {
                key: key.to_string(),
                first_qual: first_qual.clone(),
                second_qual: qual.to_string(),
            });
        }
        self.claimed.insert(key.to_string(), qual.to_string());
        self.claims_taken += 1;
        Ok(raw.as_str())
    }

    /// Open a footprint-tracking scope.
    pub fn scope(&self) -> Scope {
        Scope {
            claims_at_open: self.claims_taken,
        }
    }

    /// Keys present in the input that were never claimed. `O(n)` in input
    /// size; intended for the opt-in strict-mode post-check, not the hot
    /// decode path.
    pub fn unclaimed_keys(&self) -> Vec<&'a str> {
        self.input
            .keys()
            .filter(|k| !self.claimed.contains_key(k.as_str()))
            .map(|k| k.as_str())
            .collect()
    }
}

impl Scope {
    /// Number of new claims made since this scope was opened. Monotone,
    /// always `>= 0`.
    pub fn footprint(&self, ledger: &Ledger<'_>) -> usize {
        ledger.claims_taken - self.claims_at_open
    }
}
