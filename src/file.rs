//! File discovery and loading.
//!
//! Two kinds of files are read:
//!
//! - **Preset files** in `KEY=VALUE` form (the same grammar the consolidated
//!   snapshot is written in). A missing or unreadable preset is not an error:
//!   it is reported with a warning and treated as empty, so generation can
//!   still proceed interactively.
//! - **Settings files** (`envgen.toml`) searched across [`SearchPath`]
//!   directories in priority-ascending order. Missing files are silently
//!   skipped; only real I/O errors (permissions, etc.) are propagated.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::EnvgenError;
use crate::merge::InputSet;
use crate::types::SearchPath;

/// Parse `KEY=VALUE` lines.
///
/// Blank lines and `#` comments are skipped. The first `=` splits key from
/// value and both sides are trimmed. A value wrapped in a matching pair of
/// `"` or `'` has the pair removed. Lines without `=` (or with an empty key)
/// are skipped. Later duplicates win.
pub fn parse_env_document(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        pairs.push((key.to_string(), strip_matching_quotes(value.trim()).to_string()));
    }
    pairs
}

fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Load a preset file into an [`InputSet`]. Never fails: missing or unreadable
/// files produce a warning and an empty set.
pub fn load_preset(path: &Path) -> InputSet {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let pairs = parse_env_document(&content);
            debug!(path = %path.display(), keys = pairs.len(), "loaded preset");
            pairs.into_iter().collect()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("preset file not found: {}", path.display());
            InputSet::new()
        }
        Err(e) => {
            warn!("failed to read preset file {}: {e}", path.display());
            InputSet::new()
        }
    }
}

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// Returns `None` if the path cannot be resolved (e.g. no home directory found).
pub fn resolve_search_path(sp: &SearchPath, app_name: &str) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Load every settings file found across `search_paths`, lowest priority first.
pub fn load_settings_files(
    search_paths: &[SearchPath],
    file_name: &str,
    app_name: &str,
) -> Result<Vec<(PathBuf, String)>, EnvgenError> {
    let mut results = Vec::new();
    for sp in search_paths {
        let Some(dir) = resolve_search_path(sp, app_name) else {
            continue;
        };
        let file_path = dir.join(file_name);
        match std::fs::read_to_string(&file_path) {
            Ok(content) => {
                debug!(path = %file_path.display(), "found settings file");
                results.push((file_path, content));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(EnvgenError::IoError {
                    path: file_path,
                    source: e,
                });
            }
        }
    }
    Ok(results)
}
