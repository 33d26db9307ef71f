//! Record handler (`SPEC_FULL.md` §4.7): since Rust has no runtime
//! reflection over struct fields, a host record type does not get a
//! generated `FromEnv` impl — it writes one by hand, field by field,
//! driven by a [`RecordCursor`]. This mirrors how `serde::Deserialize` is
//! either derived or hand-written per type; the cursor plays the role the
//! host-supplied Schema Inspector plays in the original design.

use std::marker::PhantomData;

use crate::config::Config;
use crate::error::DecodeError;
use crate::from_env::FromEnv;
use crate::ledger::Ledger;
use crate::position::Position;

/// Drives one record's worth of field decoding. Constructed once per
/// `FromEnv::decode` call for a record type and consumed by repeated
/// `.field()` / `.field_with()` calls.
pub struct RecordCursor<'ledger, 'input> {
    pos: Position,
    config: Config,
    ledger: &'ledger mut Ledger<'input>,
}

impl<'ledger, 'input> RecordCursor<'ledger, 'input> {
    pub fn new(pos: &Position, ledger: &'ledger mut Ledger<'input>, config: &Config) -> Self {
        Self {
            pos: pos.clone(),
            config: config.clone(),
            ledger,
        }
    }

    /// The position this cursor is decoding fields for. Exposed so a
    /// hand-written `is_present` impl can reuse [`field_required_present`]
    /// against the same root.
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Start decoding a standard (non-custom) field.
    pub fn field<T: FromEnv>(&mut self, field_name: &str) -> FieldHandle<'_, 'input, T> {
        let pos = self.pos.child_field(&self.config, field_name);
        FieldHandle {
            pos,
            config: self.config.clone(),
            ledger: self.ledger,
            default: None,
            _marker: PhantomData,
        }
    }

    /// Start decoding a field via a user-supplied parser over its raw
    /// string value, implementing the Custom kind (`SPEC_FULL.md` §4.6).
    pub fn field_with<T, F>(&mut self, field_name: &str, parse: F) -> CustomFieldHandle<'_, 'input, T, F>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        let pos = self.pos.child_field(&self.config, field_name);
        CustomFieldHandle {
            pos,
            ledger: self.ledger,
            default: None,
            parse,
        }
    }
}

/// A field awaiting `.get()`, built from an ordinary [`FromEnv`] type.
pub struct FieldHandle<'c, 'input, T> {
    pos: Position,
    config: Config,
    ledger: &'c mut Ledger<'input>,
    default: Option<T>,
    _marker: PhantomData<T>,
}

impl<'c, 'input, T: FromEnv> FieldHandle<'c, 'input, T> {
    /// Override this field's variable key wholesale, ignoring the name
    /// the record's field normally derives.
    pub fn rename(mut self, key: impl AsRef<str>) -> Self {
        self.pos = self.pos.with_override_key(key.as_ref());
        self
    }

    /// Give this field a default value, used when the field is absent, or
    /// when the decoded value's footprint is zero (so a zero-footprint
    /// type-level default never shadows a field-level one; the field
    /// default always wins).
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Decode the field, applying the default arbitration rule.
    pub fn get(self) -> Result<T, DecodeError> {
        let FieldHandle {
            pos,
            config,
            ledger,
            default,
            ..
        } = self;
        match default {
            None => T::decode(&pos, ledger, &config),
            Some(default_value) => {
                if !T::is_present(&pos, ledger, &config) {
                    return Ok(default_value);
                }
                let scope = ledger.scope();
                let value = T::decode(&pos, ledger, &config)?;
                if scope.footprint(ledger) == 0 {
                    Ok(default_value)
                } else {
                    Ok(value)
                }
            }
        }
    }
}

/// A field awaiting `.get()`, decoded via a user-supplied raw-string
/// parser rather than a [`FromEnv`] impl.
pub struct CustomFieldHandle<'c, 'input, T, F> {
    pos: Position,
    ledger: &'c mut Ledger<'input>,
    default: Option<T>,
    parse: F,
}

impl<'c, 'input, T, F> CustomFieldHandle<'c, 'input, T, F>
where
    F: Fn(&str) -> Result<T, String>,
{
    pub fn rename(mut self, key: impl AsRef<str>) -> Self {
        self.pos = self.pos.with_override_key(key.as_ref());
        self
    }

    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    pub fn get(self) -> Result<T, DecodeError> {
        let CustomFieldHandle {
            pos,
            ledger,
            default,
            parse,
        } = self;
        if !ledger.is_unclaimed(&pos.key) {
            if let Some(default_value) = default {
                // Absent, or already claimed by something else: a claim
                // attempt below would raise the correct error in the
                // latter case, so only short-circuit on genuine absence.
                if !ledger.has_key(&pos.key) {
                    return Ok(default_value);
                }
            }
        }
        let raw = ledger.claim(&pos.key, &pos.qual)?;
        parse(raw).map_err(|cause| DecodeError::InvalidVariableFormat {
            key: pos.key.clone(),
            qual: pos.qual.clone(),
            cause,
        })
    }
}

/// Whether a required (non-defaulted) field of type `T` is present at
/// `field_name` under `pos`. A hand-written record's `FromEnv::is_present`
/// impl ANDs this across its required fields (true iff every one succeeds)
/// so composites like `Option<MyRecord>` treat a partially-filled record
/// as wholly absent rather than attempting a decode that would fail on
/// the missing remainder.
///
/// Side-effect-free like every `is_present` check: it never claims.
pub fn field_required_present<T: FromEnv>(
    pos: &Position,
    config: &Config,
    ledger: &Ledger<'_>,
    field_name: &str,
) -> bool {
    let field_pos = pos.child_field(config, field_name);
    T::is_present(&field_pos, ledger, config)
}
