//! Position: one node the decoder is currently trying to fill.

use crate::config::Config;
use crate::name;

/// A schema node being decoded: its variable key and qualified name.
///
/// Positions are cheap, immutable values constructed on demand during
/// recursion. The schema type itself is not a field here — it is the Rust
/// type parameter of the surrounding [`crate::FromEnv`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Flat uppercase string key that would hold this position's scalar
    /// form (or the base key composite handlers derive children from).
    pub key: String,
    /// Dotted/indexed path used purely in diagnostics.
    pub qual: String,
}

impl Position {
    /// Construct the root position for a top-level decode.
    pub fn root(config: &Config, type_name: &str) -> Self {
        Self {
            key: name::root_var_name(config),
            qual: type_name.to_string(),
        }
    }

    /// Derive a record-field child position.
    pub fn child_field(&self, config: &Config, field_name: &str) -> Self {
        Self {
            key: name::child_var_name(config, &self.key, field_name),
            qual: name::child_qual_name(&self.qual, field_name, true),
        }
    }

    /// Derive an indexed (sequence/tuple element) child position.
    pub fn child_index(&self, config: &Config, index: usize) -> Self {
        let index_str = index.to_string();
        Self {
            key: name::child_var_name(config, &self.key, &index_str),
            qual: name::child_qual_name(&self.qual, &index_str, false),
        }
    }

    /// Derive a child position for a fixed reserved suffix (`LEN`, the
    /// `IS_NONE__` sentinel), reusing this position's own qualified name
    /// since these are not separate schema positions, merely alternate keys
    /// for the same one.
    pub fn child_suffix(&self, config: &Config, suffix: &str) -> Self {
        Self {
            key: name::child_var_name(config, &self.key, suffix),
            qual: self.qual.clone(),
        }
    }

    /// Return a position whose key is replaced wholesale by a field-level
    /// override, keeping the qualified name unaffected.
    pub fn with_override_key(&self, override_key: &str) -> Self {
        Self {
            key: override_key.to_string(),
            qual: self.qual.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_position_uses_prefix_and_type_name() {
        let config = Config::default().with_prefix("APP");
        let pos = Position::root(&config, "Settings");
        assert_eq!(pos.key, "APP");
        assert_eq!(pos.qual, "Settings");
    }

    #[test]
    fn test_child_field_derives_key_and_dotted_qual() {
        let config = Config::default();
        let root = Position::root(&config, "Settings");
        let child = root.child_field(&config, "port");
        assert_eq!(child.key, "PORT");
        assert_eq!(child.qual, "Settings.port");
    }

    #[test]
    fn test_child_index_derives_key_and_bracketed_qual() {
        let config = Config::default();
        let root = Position::root(&config, "Settings");
        let list = root.child_field(&config, "list");
        let elem = list.child_index(&config, 2);
        assert_eq!(elem.key, "LIST_2");
        assert_eq!(elem.qual, "Settings.list[2]");
    }

    #[test]
    fn test_child_suffix_reuses_parent_qual() {
        let config = Config::default();
        let root = Position::root(&config, "Settings");
        let list = root.child_field(&config, "list");
        let len = list.child_suffix(&config, "LEN");
        assert_eq!(len.key, "LIST_LEN");
        assert_eq!(len.qual, "Settings.list");
    }

    #[test]
    fn test_override_key_replaces_key_but_not_qual() {
        let config = Config::default();
        let root = Position::root(&config, "Settings");
        let child = root.child_field(&config, "port");
        let overridden = child.with_override_key("APP_PORT_NUMBER");
        assert_eq!(overridden.key, "APP_PORT_NUMBER");
        assert_eq!(overridden.qual, "Settings.port");
    }

    #[test]
    fn test_nested_child_under_override_key_derives_from_override() {
        let config = Config::default();
        let root = Position::root(&config, "Settings");
        let child = root.child_field(&config, "nested").with_override_key("N");
        let grandchild = child.child_field(&config, "attr");
        assert_eq!(grandchild.key, "N_ATTR");
    }
}
