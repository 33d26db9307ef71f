//! Decode configuration.
//!
//! Unlike the teacher's `Config`, there is no file to load: the caller
//! builds this struct directly. No (de)serialization is needed because
//! nothing in this crate's surface reads a config file or CLI arguments —
//! that is the host's job, outside the core (see `SPEC_FULL.md` §1, §6).

/// Loading configuration shared across one [`crate::decode`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prepended to the root position's variable key. `None` means the root
    /// key starts empty.
    pub prefix: Option<String>,

    /// Separator inserted between key components.
    pub sep: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: None,
            sep: "_".to_string(),
        }
    }
}

impl Config {
    /// Configuration with no prefix and the default `_` separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Override the separator (default `_`).
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }
}
