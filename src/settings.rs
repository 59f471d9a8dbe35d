//! The tool's own settings and their layered resolution.
//!
//! Operates on pre-loaded data (`SettingsInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Validate each file (if strict mode)
//! 2. Parse and merge settings files (later overrides earlier)
//! 3. Merge env vars on top
//! 4. Merge explicit overrides on top (highest priority)
//! 5. Deserialize merged table into the `Settings` layer
//! 6. Let confique fill defaults and validate required fields

use std::path::PathBuf;

use confique::Config;
use serde::{Deserialize, Serialize};
use toml::{Table, Value};

use crate::env;
use crate::error::EnvgenError;
use crate::overrides;
use crate::types::Profile;
use crate::validate;

/// Settings for a generation run.
#[derive(Config, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory that receives `{service}/.env`. Required for generation.
    pub config_dir: Option<PathBuf>,

    /// Where the nginx and grafana templates are copied from.
    #[config(default = "tools/templates")]
    pub templates_dir: PathBuf,

    /// Deployment profile to apply without asking.
    pub profile: Option<Profile>,

    /// Preset file (`KEY=VALUE`) to seed inputs from.
    pub input: Option<PathBuf>,

    /// Where to write the consolidated snapshot.
    pub output: Option<PathBuf>,
}

/// All pre-loaded data needed to resolve settings. No I/O happens here.
pub struct SettingsInput {
    /// File contents in precedence order: first = lowest priority, last = highest.
    pub files: Vec<(PathBuf, String)>,
    /// Raw environment variable pairs (pass `std::env::vars().collect()` or synthetic data).
    pub env_vars: Vec<(String, String)>,
    /// Env var prefix (e.g. `"ENVGEN"`). `None` means env disabled.
    pub env_prefix: Option<String>,
    /// Explicit overrides as `(field, value)` pairs.
    pub overrides: Vec<(String, Value)>,
    /// Whether to reject unknown keys in settings files.
    pub strict: bool,
}

/// Resolve settings from pre-loaded inputs.
pub fn resolve(input: SettingsInput) -> Result<Settings, EnvgenError> {
    let valid = overrides::valid_keys();
    if let Some((key, _)) = input
        .overrides
        .iter()
        .find(|(k, _)| !valid.contains(k.as_str()))
    {
        return Err(EnvgenError::InvalidValue {
            key: key.clone(),
            reason: "not a settings field".into(),
        });
    }

    let mut merged = Table::new();
    for (path, content) in &input.files {
        if input.strict {
            validate::validate_unknown_keys(content, path)?;
        }
        let table: Table = toml::from_str(content).map_err(|e| EnvgenError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        merged.extend(table);
    }

    if let Some(prefix) = &input.env_prefix {
        merged.extend(env::env_to_table(prefix, input.env_vars));
    }

    if !input.overrides.is_empty() {
        merged.extend(overrides::overrides_to_table(&input.overrides));
    }

    let layer: <Settings as Config>::Layer = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| EnvgenError::InvalidValue {
            key: "<settings>".into(),
            reason: e.to_string(),
        })?;

    Settings::builder()
        .preloaded(layer)
        .load()
        .map_err(EnvgenError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_input() -> SettingsInput {
        SettingsInput {
            files: vec![],
            env_vars: vec![],
            env_prefix: None,
            overrides: vec![],
            strict: true,
        }
    }

    fn string(s: &str) -> Value {
        Value::String(s.into())
    }

    #[test]
    fn defaults_only() {
        let settings = resolve(empty_input()).unwrap();
        assert_eq!(settings.config_dir, None);
        assert_eq!(settings.templates_dir, PathBuf::from("tools/templates"));
        assert_eq!(settings.profile, None);
    }

    #[test]
    fn file_overrides_default() {
        let input = SettingsInput {
            files: vec![("envgen.toml".into(), "templates_dir = \"/srv/tpl\"\n".into())],
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.templates_dir, PathBuf::from("/srv/tpl"));
    }

    #[test]
    fn later_file_overrides_earlier() {
        let input = SettingsInput {
            files: vec![
                ("platform.toml".into(), "profile = \"bsctest\"\n".into()),
                ("cwd.toml".into(), "profile = \"localhost\"\n".into()),
            ],
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.profile, Some(Profile::Localhost));
    }

    #[test]
    fn env_overrides_file() {
        let input = SettingsInput {
            files: vec![("envgen.toml".into(), "config_dir = \"a\"\n".into())],
            env_vars: vec![("CONFIG_DIR".into(), "b".into())],
            env_prefix: Some("ENVGEN".into()),
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.config_dir, Some(PathBuf::from("b")));
    }

    #[test]
    fn env_ignored_when_disabled() {
        let input = SettingsInput {
            env_vars: vec![("CONFIG_DIR".into(), "b".into())],
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.config_dir, None);
    }

    #[test]
    fn overrides_win() {
        let input = SettingsInput {
            files: vec![("envgen.toml".into(), "config_dir = \"a\"\n".into())],
            env_vars: vec![("ENVGEN__CONFIG_DIR".into(), "b".into())],
            env_prefix: Some("ENVGEN".into()),
            overrides: vec![("config_dir".into(), string("c"))],
            strict: true,
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.config_dir, Some(PathBuf::from("c")));
    }

    #[test]
    fn unknown_override_rejected() {
        let input = SettingsInput {
            overrides: vec![("output_dir".into(), string("x"))],
            ..empty_input()
        };
        let result = resolve(input);
        assert!(matches!(result, Err(EnvgenError::InvalidValue { .. })));
    }

    #[test]
    fn invalid_profile_value_rejected() {
        let input = SettingsInput {
            overrides: vec![("profile".into(), string("mainnet"))],
            ..empty_input()
        };
        let result = resolve(input);
        assert!(result.is_err());
    }

    #[test]
    fn strict_rejects_unknown_key() {
        let input = SettingsInput {
            files: vec![("bad.toml".into(), "typo = 1\n".into())],
            ..empty_input()
        };
        let result = resolve(input);
        assert!(matches!(result, Err(EnvgenError::UnknownKeys(_))));
    }

    #[test]
    fn lenient_allows_unknown_key() {
        let input = SettingsInput {
            files: vec![(
                "ok.toml".into(),
                "typo = 1\noutput = \"all.env\"\n".into(),
            )],
            strict: false,
            ..empty_input()
        };
        let settings = resolve(input).unwrap();
        assert_eq!(settings.output, Some(PathBuf::from("all.env")));
    }
}
