//! Name Builder: derives a child position's variable key and qualified name
//! from its parent and a reference (a record field name or a container
//! index).

use crate::config::Config;

/// Compute the child variable key from the parent key and a reference.
///
/// Indexes stringify as base-10 decimals with no padding; field names are
/// upper-cased. If `parent_key` is empty, the child key is just the
/// upper-cased reference.
pub fn child_var_name(config: &Config, parent_key: &str, reference: &str) -> String {
    let upper = reference.to_uppercase();
    if parent_key.is_empty() {
        upper
    } else {
        format!("{parent_key}{}{upper}", config.sep)
    }
}

/// Compute the child qualified name. `is_record_field` selects between dotted
/// (`parent.field`) and indexed (`parent[index]`) notation.
pub fn child_qual_name(parent_qual: &str, reference: &str, is_record_field: bool) -> String {
    if is_record_field {
        format!("{parent_qual}.{reference}")
    } else {
        format!("{parent_qual}[{reference}]")
    }
}

/// Compute the root variable key from the configured prefix.
pub fn root_var_name(config: &Config) -> String {
    config.prefix.clone().unwrap_or_default()
}
