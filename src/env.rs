//! Environment variables as a settings layer.
//!
//! `{PREFIX}__{FIELD}` maps to the lowercased settings field. Settings are all
//! strings or paths, so values are taken verbatim: `CONFIG_DIR=2024` is a
//! directory name, not a number. Empty values are treated as unset.
//!
//! The bare `CONFIG_DIR` variable is honoured as an alias for
//! `{PREFIX}__CONFIG_DIR`; the prefixed form wins when both are set.

use toml::{Table, Value};

/// Unprefixed variables accepted for a settings field.
const ALIASES: &[(&str, &str)] = &[("CONFIG_DIR", "config_dir")];

/// Build a flat `toml::Table` from environment variables.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn env_to_table(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Table {
    let needle = format!("{prefix}__");
    let mut table = Table::new();
    let mut aliased = Table::new();

    for (key, value) in vars {
        if value.is_empty() {
            continue;
        }
        if let Some(rest) = key.strip_prefix(&needle) {
            if !rest.is_empty() {
                table.insert(rest.to_lowercase(), Value::String(value));
            }
            continue;
        }
        if let Some((_, field)) = ALIASES.iter().find(|(alias, _)| *alias == key) {
            aliased.insert(field.to_string(), Value::String(value));
        }
    }

    for (field, value) in aliased {
        table.entry(field).or_insert(value);
    }
    table
}
