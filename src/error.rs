use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvgenError {
    #[error("Unknown service '{name}' (known services: {})", known.join(", "))]
    UnknownService { name: String, known: Vec<String> },

    #[error("Unknown profile '{name}' (known profiles: {})", known.join(", "))]
    UnknownProfile { name: String, known: Vec<String> },

    #[error(
        "No output directory configured: pass --config-dir or set the CONFIG_DIR environment variable"
    )]
    NoConfigDir,

    #[error("Unknown key '{key}' in {path} (line {line})")]
    UnknownKey {
        key: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Unknown keys in settings file")]
    UnknownKeys(Vec<EnvgenError>),

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    ConfigError(#[from] confique::Error),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Input closed while waiting for an answer to '{prompt}'")]
    InputClosed { prompt: String },

    #[error("Failed to read answer to '{prompt}': {reason}")]
    Prompt { prompt: String, reason: String },
}

impl EnvgenError {
    /// Whether `main` should print the known-service listing after this error.
    pub fn lists_services(&self) -> bool {
        matches!(self, EnvgenError::UnknownService { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_service_lists_known_names() {
        let err = EnvgenError::UnknownService {
            name: "indexer".into(),
            known: vec!["oracle".into(), "validator".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("indexer"));
        assert!(msg.contains("oracle, validator"));
        assert!(err.lists_services());
    }

    #[test]
    fn no_config_dir_mentions_both_sources() {
        let msg = EnvgenError::NoConfigDir.to_string();
        assert!(msg.contains("--config-dir"));
        assert!(msg.contains("CONFIG_DIR"));
        assert!(!EnvgenError::NoConfigDir.lists_services());
    }

    #[test]
    fn unknown_key_formats_correctly() {
        let err = EnvgenError::UnknownKey {
            key: "templates_path".into(),
            path: "/home/user/.config/envgen/envgen.toml".into(),
            line: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("templates_path"));
        assert!(msg.contains("envgen.toml"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn input_closed_names_prompt() {
        let err = EnvgenError::InputClosed {
            prompt: "Telegram Bot Token".into(),
        };
        assert!(err.to_string().contains("Telegram Bot Token"));
    }
}
