//! Strict-mode validation: detect unknown keys in settings files.
//!
//! Uses `serde_ignored` to deserialize into the settings layer (all-optional
//! fields) and capture any keys that the layer doesn't consume. Reports each
//! unknown key with its file path and best-effort line number.

use std::path::Path;

use confique::Config;

use crate::error::EnvgenError;
use crate::settings::Settings;

/// Validate that a TOML settings file contains no keys unknown to [`Settings`].
pub fn validate_unknown_keys(content: &str, path: &Path) -> Result<(), EnvgenError> {
    let mut unknown_keys: Vec<String> = Vec::new();

    let deserializer = toml::Deserializer::new(content);
    let _layer: <Settings as Config>::Layer =
        serde_ignored::deserialize(deserializer, |ignored_path| {
            unknown_keys.push(ignored_path.to_string());
        })
        .map_err(|e| EnvgenError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    if unknown_keys.is_empty() {
        return Ok(());
    }

    let errors: Vec<EnvgenError> = unknown_keys
        .into_iter()
        .map(|key| {
            let line = find_key_line(content, &key);
            EnvgenError::UnknownKey {
                key,
                path: path.to_path_buf(),
                line,
            }
        })
        .collect();

    Err(EnvgenError::UnknownKeys(errors))
}

/// 1-indexed line of `key = ...` or a `[key]` table header. Returns 0 if the
/// key cannot be located.
fn find_key_line(content: &str, key: &str) -> usize {
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('[') {
            if header.trim_end_matches(']').trim() == key {
                return i + 1;
            }
            continue;
        }
        if let Some(after_key) = trimmed.strip_prefix(key)
            && after_key.trim_start().starts_with('=')
        {
            return i + 1;
        }
    }
    0
}
