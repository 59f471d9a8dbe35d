//! Per-key value resolution.
//!
//! [`resolve`] turns one template key into the string written for a service.
//! It is a pure function of `(key, service, inputs, default)`: derived keys
//! are composed from their raw inputs, variant selectors are suppressed in
//! the service they steer, and everything else is looked up directly.
//!
//! An empty result never hides a non-empty template default.

use crate::keys::{Key, raw};
use crate::merge::InputSet;
use crate::types::Service;

const DEFAULT_SQLITE_DB: &str = "bsctest";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_REDIS_HOST: &str = "localhost";
const DEFAULT_LOG_DIR: &str = "./log";

/// Resolve `key` for `service`. `None` means the key is suppressed and must
/// not be written.
pub fn resolve(key: Key, service: Service, inputs: &InputSet, default: &str) -> Option<String> {
    let value = match key {
        Key::NginxVariant if service == Service::Nginx => return None,
        Key::GrafanaVariant if service == Service::Grafana => return None,
        Key::WalletPk => {
            let source = if service.uses_admin_wallet() {
                raw::ADMIN_WALLET_PK
            } else {
                raw::USER_WALLET_PK
            };
            inputs.get(source).unwrap_or_default().to_string()
        }
        Key::DatabaseUrl => database_url(service, inputs, default),
        Key::RedisUrl => redis_url(
            inputs.get_non_empty(raw::REDIS_HOST).unwrap_or(DEFAULT_REDIS_HOST),
            inputs.get(raw::REDIS_USER).unwrap_or_default(),
            inputs.get(raw::REDIS_PASS).unwrap_or_default(),
        ),
        Key::LogPath => log_path(service, inputs, default),
        Key::TxPollTimeoutMs
        | Key::TgToken
        | Key::TgInfoChatId
        | Key::TgAlertChatId
        | Key::EthNodeUrl
        | Key::ChainId
        | Key::GfNodeUrl
        | Key::EthscanApiKey
        | Key::OracleAddress
        | Key::StoreAddress
        | Key::HistoricalSyncThreshold
        | Key::HistoricalSyncBlock
        | Key::ConfirmCount
        | Key::FileStoragePath
        | Key::ClientHostUrl
        | Key::PostgresHost
        | Key::PostgresDb
        | Key::PostgresUser
        | Key::PostgresPassword
        | Key::DataSourceName
        | Key::DomainName
        | Key::NginxVariant
        | Key::CertbotEmail
        | Key::GrafanaVariant
        | Key::GrafanaRemoteWriteUrl
        | Key::GrafanaRemoteWriteUser
        | Key::GrafanaRemoteWritePassword => inputs.get_key(key).unwrap_or(default).to_string(),
    };

    if value.is_empty() && !default.is_empty() {
        Some(default.to_string())
    } else {
        Some(value)
    }
}

/// `DATABASE_URL` for `service`. A present-but-empty `SQLITE_DB` or
/// `POSTGRES_HOST` counts as unset and takes its default (`bsctest`,
/// `localhost`); the postgres credentials and database name are used as given.
fn database_url(service: Service, inputs: &InputSet, default: &str) -> String {
    match service {
        Service::Validator => sqlite_url(
            inputs
                .get_non_empty(raw::SQLITE_DB)
                .unwrap_or(DEFAULT_SQLITE_DB),
        ),
        Service::ApiClient | Service::DaemonClient => postgres_url(
            inputs
                .get_non_empty(Key::PostgresHost.as_str())
                .unwrap_or(DEFAULT_DB_HOST),
            inputs.get_key(Key::PostgresDb).unwrap_or_default(),
            inputs.get_key(Key::PostgresUser).unwrap_or_default(),
            inputs.get_key(Key::PostgresPassword).unwrap_or_default(),
        ),
        _ => default.to_string(),
    }
}

/// `{LOG_DIR}/{service}.log`. A present-but-empty `LOG_DIR` counts as unset
/// and gives `./log`. With no `LOG_DIR` at all a non-empty template default
/// is kept.
fn log_path(service: Service, inputs: &InputSet, default: &str) -> String {
    if !inputs.contains(raw::LOG_DIR) && !default.is_empty() {
        return default.to_string();
    }
    let dir = inputs.get_non_empty(raw::LOG_DIR).unwrap_or(DEFAULT_LOG_DIR);
    format!("{}/{service}.log", dir.trim_end_matches('/'))
}

pub fn sqlite_url(db: &str) -> String {
    format!("sqlite:///app/sqlite/{db}.db")
}

pub fn postgres_url(host: &str, db: &str, user: &str, password: &str) -> String {
    format!("postgresql://{user}:{password}@{host}:5432/{db}")
}

/// `redis://[auth]host:6379/0` where auth is `user:pass@`, `:pass@`, `user@`
/// or nothing, depending on which credentials are non-empty.
pub fn redis_url(host: &str, user: &str, password: &str) -> String {
    let auth = match (user.is_empty(), password.is_empty()) {
        (false, false) => format!("{user}:{password}@"),
        (true, false) => format!(":{password}@"),
        (false, true) => format!("{user}@"),
        (true, true) => String::new(),
    };
    format!("redis://{auth}{host}:6379/0")
}
