//! Writing generated files.
//!
//! Document construction is pure ([`snapshot_document`], [`redis_conf`]); the
//! `write_*` wrappers do the I/O and create parent directories as needed.
//! Existing files are overwritten.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::EnvgenError;
use crate::keys::raw;
use crate::merge::InputSet;
use crate::types::Service;

const SNAPSHOT_SECTIONS: &[(&str, &[&str])] = &[
    ("TELEGRAM", &["TG_TOKEN", "TG_INFO_CHAT_ID", "TG_ALERT_CHAT_ID"]),
    ("WALLET", &[raw::ADMIN_WALLET_PK, raw::USER_WALLET_PK]),
    (
        "BLOCKCHAIN",
        &["ETH_NODE_URL", "CHAIN_ID", "GF_NODE_URL", "ETHSCAN_API_KEY"],
    ),
    ("CONTRACTS", &["ORACLE_ADDRESS", "STORE_ADDRESS"]),
    (
        "SYNC",
        &[
            "HISTORICAL_SYNC_THRESHOLD",
            "HISTORICAL_SYNC_BLOCK",
            "CONFIRM_COUNT",
            "TX_POLL_TIMEOUT_MS",
        ],
    ),
    ("DATABASE", &["DATABASE_URL"]),
    (
        "POSTGRES",
        &[
            "POSTGRES_HOST",
            "POSTGRES_DB",
            "POSTGRES_USER",
            "POSTGRES_PASSWORD",
        ],
    ),
    (
        "SERVICES",
        &[
            "REDIS_URL",
            "CLIENT_HOST_URL",
            "FILE_STORAGE_PATH",
            raw::LOG_DIR,
            "LOG_PATH",
        ],
    ),
    ("NGINX", &["NGINX_VARIANT", "DOMAIN_NAME", "CERTBOT_EMAIL"]),
    (
        "GRAFANA",
        &[
            "GRAFANA_REMOTE_WRITE_URL",
            "GRAFANA_REMOTE_WRITE_USER",
            "GRAFANA_REMOTE_WRITE_PASSWORD",
        ],
    ),
];

/// Pure function: serialize the full input set as a reusable preset.
///
/// Section keys are written under their section only when non-empty. Every
/// other key, empty section keys included, is written under `# OTHER`, sorted
/// by name, so reloading the snapshot reproduces every input. An empty set
/// yields an empty document.
pub fn snapshot_document(inputs: &InputSet) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut written: BTreeSet<&str> = BTreeSet::new();

    for (name, keys) in SNAPSHOT_SECTIONS {
        let present: Vec<(&str, &str)> = keys
            .iter()
            .filter_map(|key| inputs.get_non_empty(key).map(|value| (*key, value)))
            .collect();
        if !present.is_empty() {
            written.extend(present.iter().map(|(key, _)| *key));
            blocks.push(block(name, present));
        }
    }

    let remaining: Vec<(&str, &str)> = inputs
        .iter()
        .filter(|(key, _)| !written.contains(key))
        .collect();
    if !remaining.is_empty() {
        blocks.push(block("OTHER", remaining));
    }

    blocks.join("\n")
}

fn block(name: &str, pairs: Vec<(&str, &str)>) -> String {
    let mut out = format!("# {name}\n");
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Pure function: `redis.conf` body for the bundled Redis server.
pub fn redis_conf(password: &str) -> String {
    let mut out = String::from("bind 0.0.0.0\n");
    if !password.is_empty() {
        out.push_str(&format!("requirepass {password}\n"));
    }
    out
}

/// Path of a service's `.env` under the output directory.
pub fn service_env_path(config_dir: &Path, service: Service) -> PathBuf {
    config_dir.join(service.as_str()).join(".env")
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<(), EnvgenError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EnvgenError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| EnvgenError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn write_service_env(
    config_dir: &Path,
    service: Service,
    content: &str,
) -> Result<PathBuf, EnvgenError> {
    let path = service_env_path(config_dir, service);
    write_file(&path, content)?;
    Ok(path)
}

pub fn write_snapshot(path: &Path, inputs: &InputSet) -> Result<(), EnvgenError> {
    write_file(path, &snapshot_document(inputs))
}

pub fn write_redis_conf(config_dir: &Path, password: &str) -> Result<PathBuf, EnvgenError> {
    let path = config_dir.join("redis").join("redis.conf");
    write_file(&path, &redis_conf(password))?;
    Ok(path)
}
