//! Direct overrides: `--set KEY=VALUE` input values and settings overrides.

use std::collections::HashSet;

use confique::Config;
use toml::{Table, Value};

use crate::error::EnvgenError;
use crate::merge::InputSet;
use crate::settings::Settings;

/// Parse one `KEY=VALUE` pair. The first `=` splits; the key is trimmed and
/// must be non-empty, the value is kept as given.
pub fn parse_assignment(raw: &str) -> Result<(String, String), EnvgenError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| EnvgenError::InvalidValue {
        key: raw.to_string(),
        reason: "expected KEY=VALUE".into(),
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(EnvgenError::InvalidValue {
            key: raw.to_string(),
            reason: "empty key".into(),
        });
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse every assignment into an [`InputSet`]. Later duplicates win.
pub fn parse_assignments<S: AsRef<str>>(raw: &[S]) -> Result<InputSet, EnvgenError> {
    raw.iter()
        .map(|s| parse_assignment(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map(|pairs| pairs.into_iter().collect())
}

/// Settings overrides as a flat table. If multiple entries target the same
/// key, the last one wins.
pub fn overrides_to_table(entries: &[(String, Value)]) -> Table {
    entries.iter().cloned().collect()
}

/// Field names of [`Settings`], the only keys a settings override may target.
pub fn valid_keys() -> HashSet<&'static str> {
    Settings::META.fields.iter().map(|field| field.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use confique::Config;

    #[test]
    fn assignment_splits_on_first_equals() {
        let (k, v) = parse_assignment("DATABASE_URL=a=b").unwrap();
        assert_eq!(k, "DATABASE_URL");
        assert_eq!(v, "a=b");
    }

    #[test]
    fn assignment_allows_empty_value() {
        let (k, v) = parse_assignment("REDIS_USER=").unwrap();
        assert_eq!(k, "REDIS_USER");
        assert_eq!(v, "");
    }

    #[test]
    fn assignment_without_equals_rejected() {
        let err = parse_assignment("CHAIN_ID").unwrap_err();
        assert!(matches!(err, EnvgenError::InvalidValue { .. }));
    }

    #[test]
    fn assignment_with_empty_key_rejected() {
        assert!(parse_assignment(" =x").is_err());
    }

    #[test]
    fn assignments_later_wins() {
        let set = parse_assignments(&["CHAIN_ID=1", "CHAIN_ID=97"]).unwrap();
        assert_eq!(set.get("CHAIN_ID"), Some("97"));
    }

    #[test]
    fn settings_table_last_wins() {
        let table = overrides_to_table(&[
            ("profile".into(), Value::String("bsctest".into())),
            ("profile".into(), Value::String("localhost".into())),
        ]);
        assert_eq!(table["profile"].as_str().unwrap(), "localhost");
    }

    #[test]
    fn valid_keys_are_settings_fields() {
        let keys = valid_keys();
        for key in ["config_dir", "templates_dir", "profile", "input", "output"] {
            assert!(keys.contains(key), "{key}");
        }
        assert_eq!(keys.len(), 5);
    }
}
