//! typed-env: decode strongly-typed, nested record values out of a flat
//! environment-style string map.
//!
//! A schema is expressed as ordinary Rust types implementing [`FromEnv`]:
//! leaf kinds (numbers, strings, booleans) and the core composite kinds
//! (records, unions, optionals, sequences, tuples) ship with the crate.
//! Host record types implement `FromEnv` by hand, field by field, driven
//! by a [`record::RecordCursor`] — there is no derive macro, since the
//! point is to observe exactly which input keys a decode claims and to
//! give a hand-written `is_present` a place to live.
//!
//! ```
//! use std::collections::HashMap;
//! use typed_env::{decode, Config, DecodeError, FromEnv};
//! use typed_env::record::{field_required_present, RecordCursor};
//! use typed_env::kind::SchemaKind;
//! use typed_env::ledger::Ledger;
//! use typed_env::position::Position;
//!
//! #[derive(Debug, PartialEq, Eq)]
//! struct Settings {
//!     host: String,
//!     port: i64,
//! }
//!
//! impl FromEnv for Settings {
//!     fn kind() -> SchemaKind {
//!         SchemaKind::Record
//!     }
//!
//!     fn is_present(pos: &Position, ledger: &Ledger<'_>, config: &Config) -> bool {
//!         field_required_present::<String>(pos, config, ledger, "host")
//!             && field_required_present::<i64>(pos, config, ledger, "port")
//!     }
//!
//!     fn decode(pos: &Position, ledger: &mut Ledger<'_>, config: &Config) -> Result<Self, DecodeError> {
//!         let mut cursor = RecordCursor::new(pos, ledger, config);
//!         Ok(Settings {
//!             host: cursor.field("host").get()?,
//!             port: cursor.field("port").get()?,
//!         })
//!     }
//! }
//!
//! let input: HashMap<String, String> = [
//!     ("SETTINGS_HOST".to_string(), "example.com".to_string()),
//!     ("SETTINGS_PORT".to_string(), "8080".to_string()),
//! ]
//! .into();
//! let config = Config::default().with_prefix("SETTINGS");
//! let settings: Settings = decode(&input, &config).unwrap();
//! assert_eq!(settings.port, 8080);
//! ```

pub mod boolean;
pub mod config;
pub mod error;
pub mod from_env;
pub mod kind;
pub mod ledger;
pub mod name;
pub mod optional;
pub mod position;
pub mod record;
pub mod scalar;
pub mod sequence;
pub mod tuple;
pub mod union;

pub use config::Config;
pub use error::DecodeError;
pub use from_env::{decode, decode_strict, FromEnv};
pub use kind::SchemaKind;
pub use ledger::{Ledger, Scope};
pub use position::Position;
pub use record::{field_required_present, CustomFieldHandle, FieldHandle, RecordCursor};
pub use sequence::AnyTuple;
pub use union::{Union2, Union3, Union4};
