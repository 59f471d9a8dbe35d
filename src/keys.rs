//! The closed set of template keys, plus the raw input keys that feed them.
//!
//! Template keys are what appear in a service's `.env`. Raw input keys are
//! what the user (or a preset file) supplies. Most template keys are their own
//! raw input; the derived ones (`WALLET_PK`, `DATABASE_URL`, `REDIS_URL`,
//! `LOG_PATH`) are computed from other raw keys by the resolver.

use std::fmt;

/// Raw input keys that never appear as template keys.
pub mod raw {
    pub const ADMIN_WALLET_PK: &str = "ADMIN_WALLET_PK";
    pub const USER_WALLET_PK: &str = "USER_WALLET_PK";
    pub const SQLITE_DB: &str = "SQLITE_DB";
    pub const REDIS_HOST: &str = "REDIS_HOST";
    pub const REDIS_USER: &str = "REDIS_USER";
    pub const REDIS_PASS: &str = "REDIS_PASS";
    pub const LOG_DIR: &str = "LOG_DIR";
}

macro_rules! keys {
    ($($variant:ident => $name:literal,)+) => {
        /// A configuration key that can appear in a service template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)+
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant,)+];

            /// The `SCREAMING_SNAKE` name written to output files.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)+
                }
            }

            /// Look up a key by its output name.
            pub fn from_name(name: &str) -> Option<Key> {
                match name {
                    $($name => Some(Key::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

keys! {
    TgToken => "TG_TOKEN",
    TgInfoChatId => "TG_INFO_CHAT_ID",
    TgAlertChatId => "TG_ALERT_CHAT_ID",
    EthNodeUrl => "ETH_NODE_URL",
    ChainId => "CHAIN_ID",
    GfNodeUrl => "GF_NODE_URL",
    EthscanApiKey => "ETHSCAN_API_KEY",
    WalletPk => "WALLET_PK",
    OracleAddress => "ORACLE_ADDRESS",
    StoreAddress => "STORE_ADDRESS",
    HistoricalSyncThreshold => "HISTORICAL_SYNC_THRESHOLD",
    HistoricalSyncBlock => "HISTORICAL_SYNC_BLOCK",
    ConfirmCount => "CONFIRM_COUNT",
    TxPollTimeoutMs => "TX_POLL_TIMEOUT_MS",
    DatabaseUrl => "DATABASE_URL",
    FileStoragePath => "FILE_STORAGE_PATH",
    LogPath => "LOG_PATH",
    RedisUrl => "REDIS_URL",
    ClientHostUrl => "CLIENT_HOST_URL",
    PostgresHost => "POSTGRES_HOST",
    PostgresDb => "POSTGRES_DB",
    PostgresUser => "POSTGRES_USER",
    PostgresPassword => "POSTGRES_PASSWORD",
    DataSourceName => "DATA_SOURCE_NAME",
    DomainName => "DOMAIN_NAME",
    NginxVariant => "NGINX_VARIANT",
    CertbotEmail => "CERTBOT_EMAIL",
    GrafanaVariant => "GRAFANA_VARIANT",
    GrafanaRemoteWriteUrl => "GRAFANA_REMOTE_WRITE_URL",
    GrafanaRemoteWriteUser => "GRAFANA_REMOTE_WRITE_USER",
    GrafanaRemoteWritePassword => "GRAFANA_REMOTE_WRITE_PASSWORD",
}

/// Keys supplied as a unit by a deployment profile.
pub const PROFILE_GOVERNED: &[Key] = &[
    Key::ChainId,
    Key::OracleAddress,
    Key::StoreAddress,
    Key::HistoricalSyncBlock,
    Key::HistoricalSyncThreshold,
    Key::ConfirmCount,
    Key::GfNodeUrl,
    Key::TxPollTimeoutMs,
];

impl Key {
    pub fn is_profile_governed(self) -> bool {
        PROFILE_GOVERNED.contains(&self)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
