//! Static template and profile tables.
//!
//! Both registries are compile-time data: a lookup never allocates and the
//! tables cannot change for the life of the process. Template entry order is
//! significant. It is the order keys appear under the catch-all `# OTHER`
//! section when no named section claims them.

use std::collections::BTreeSet;

use crate::error::EnvgenError;
use crate::keys::{Key, raw};
use crate::types::{Profile, Service};

/// A service's ordered schema of keys and default values.
#[derive(Debug, PartialEq)]
pub struct Template {
    service: Service,
    entries: &'static [(Key, &'static str)],
}

impl Template {
    pub fn service(&self) -> Service {
        self.service
    }

    /// `(key, default)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Key, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn default_for(&self, key: Key) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, default)| *default)
    }
}

const TELEGRAM_INPUTS: [&str; 3] = ["TG_TOKEN", "TG_INFO_CHAT_ID", "TG_ALERT_CHAT_ID"];
const POSTGRES_INPUTS: [&str; 4] = [
    "POSTGRES_HOST",
    "POSTGRES_DB",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
];
const REDIS_INPUTS: [&str; 3] = [raw::REDIS_HOST, raw::REDIS_USER, raw::REDIS_PASS];

pub const DATA_SOURCE_NAME_TEMPLATE: &str = "postgresql://${POSTGRES_USER}:${POSTGRES_PASSWORD}@${POSTGRES_HOST}:5432/${POSTGRES_DB}?sslmode=disable";

static ORACLE: Template = Template {
    service: Service::Oracle,
    entries: &[
        (Key::TgToken, ""),
        (Key::TgInfoChatId, ""),
        (Key::TgAlertChatId, ""),
        (Key::EthNodeUrl, ""),
        (Key::ChainId, ""),
        (Key::WalletPk, ""),
        (Key::OracleAddress, ""),
        (Key::ConfirmCount, ""),
        (Key::TxPollTimeoutMs, ""),
        (Key::LogPath, ""),
    ],
};

static VALIDATOR: Template = Template {
    service: Service::Validator,
    entries: &[
        (Key::TgToken, ""),
        (Key::TgInfoChatId, ""),
        (Key::TgAlertChatId, ""),
        (Key::EthNodeUrl, ""),
        (Key::ChainId, ""),
        (Key::GfNodeUrl, ""),
        (Key::WalletPk, ""),
        (Key::OracleAddress, ""),
        (Key::StoreAddress, ""),
        (Key::HistoricalSyncThreshold, ""),
        (Key::ConfirmCount, ""),
        (Key::TxPollTimeoutMs, ""),
        (Key::DatabaseUrl, ""),
        (Key::FileStoragePath, "./tmp/"),
        (Key::LogPath, ""),
    ],
};

static DAEMON_CLIENT: Template = Template {
    service: Service::DaemonClient,
    entries: &[
        (Key::TgToken, ""),
        (Key::TgInfoChatId, ""),
        (Key::TgAlertChatId, ""),
        (Key::EthNodeUrl, ""),
        (Key::ChainId, ""),
        (Key::GfNodeUrl, ""),
        (Key::EthscanApiKey, ""),
        (Key::WalletPk, ""),
        (Key::OracleAddress, ""),
        (Key::StoreAddress, ""),
        (Key::HistoricalSyncThreshold, ""),
        (Key::HistoricalSyncBlock, ""),
        (Key::DatabaseUrl, ""),
        (Key::LogPath, ""),
    ],
};

static API_CLIENT: Template = Template {
    service: Service::ApiClient,
    entries: &[
        (Key::TgToken, ""),
        (Key::TgInfoChatId, ""),
        (Key::TgAlertChatId, ""),
        (Key::WalletPk, ""),
        (Key::DatabaseUrl, ""),
        (Key::RedisUrl, ""),
        (Key::ClientHostUrl, ""),
        (Key::LogPath, ""),
    ],
};

static POSTGRES: Template = Template {
    service: Service::Postgres,
    entries: &[
        (Key::PostgresHost, "postgres"),
        (Key::PostgresDb, ""),
        (Key::PostgresUser, ""),
        (Key::PostgresPassword, ""),
        (Key::DataSourceName, DATA_SOURCE_NAME_TEMPLATE),
    ],
};

static NGINX: Template = Template {
    service: Service::Nginx,
    entries: &[
        (Key::DomainName, ""),
        (Key::NginxVariant, ""),
        (Key::CertbotEmail, ""),
    ],
};

static GRAFANA: Template = Template {
    service: Service::Grafana,
    entries: &[
        (Key::GrafanaVariant, ""),
        (Key::GrafanaRemoteWriteUrl, ""),
        (Key::GrafanaRemoteWriteUser, ""),
        (Key::GrafanaRemoteWritePassword, ""),
    ],
};

/// Service name → template lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        TemplateRegistry
    }

    /// Look up a template by service name.
    pub fn get(&self, name: &str) -> Result<&'static Template, EnvgenError> {
        let service: Service = name.parse()?;
        Ok(self.template(service))
    }

    pub fn template(&self, service: Service) -> &'static Template {
        match service {
            Service::Oracle => &ORACLE,
            Service::Validator => &VALIDATOR,
            Service::DaemonClient => &DAEMON_CLIENT,
            Service::ApiClient => &API_CLIENT,
            Service::Postgres => &POSTGRES,
            Service::Nginx => &NGINX,
            Service::Grafana => &GRAFANA,
        }
    }

    pub fn services(&self) -> &'static [Service] {
        &Service::ALL
    }

    /// Expand a service's template keys into the raw input keys needed to
    /// resolve them.
    pub fn required_raw_input_keys(&self, service: Service) -> BTreeSet<&'static str> {
        let mut required = BTreeSet::new();
        for key in self.template(service).keys() {
            expand_key(service, key, &mut required);
        }
        required
    }

    /// Union of [`required_raw_input_keys`](Self::required_raw_input_keys)
    /// across `services`.
    pub fn required_in_scope(&self, services: &[Service]) -> BTreeSet<&'static str> {
        services
            .iter()
            .flat_map(|svc| self.required_raw_input_keys(*svc))
            .collect()
    }

    /// Union of template keys across `services`.
    pub fn keys_in_scope(&self, services: &[Service]) -> BTreeSet<Key> {
        services
            .iter()
            .flat_map(|svc| self.template(*svc).keys())
            .collect()
    }
}

fn expand_key(service: Service, key: Key, out: &mut BTreeSet<&'static str>) {
    match key {
        Key::WalletPk => {
            out.insert(if service.uses_admin_wallet() {
                raw::ADMIN_WALLET_PK
            } else {
                raw::USER_WALLET_PK
            });
        }
        Key::DatabaseUrl => match service {
            Service::Validator => {
                out.insert(raw::SQLITE_DB);
            }
            Service::ApiClient | Service::DaemonClient => out.extend(POSTGRES_INPUTS),
            _ => {}
        },
        Key::RedisUrl => out.extend(REDIS_INPUTS),
        Key::TgToken | Key::TgInfoChatId | Key::TgAlertChatId => out.extend(TELEGRAM_INPUTS),
        Key::LogPath => {
            out.insert(raw::LOG_DIR);
        }
        // Passed through from the template default.
        Key::DataSourceName => {}
        k if k.is_profile_governed() => {}
        other => {
            out.insert(other.as_str());
        }
    }
}

type ProfileValues = &'static [(Key, &'static str)];

static BSCTEST: ProfileValues = &[
    (Key::ChainId, "97"),
    (Key::OracleAddress, "0F61D8D6c9D6886ac7cba72716E1b98C4379E0f7"),
    (Key::StoreAddress, "6Edac88EA58168a47ab61836bCbAD0Ac844498A6"),
    (Key::HistoricalSyncBlock, "60727665"),
    (Key::HistoricalSyncThreshold, "500"),
    (Key::ConfirmCount, "1"),
    (
        Key::GfNodeUrl,
        "https://gnfd-testnet-fullnode-tendermint-ap.bnbchain.org",
    ),
    (Key::TxPollTimeoutMs, "5000"),
];

static LOCALHOST: ProfileValues = &[
    (Key::ChainId, "31337"),
    (Key::OracleAddress, "Dc64a140Aa3E981100a9becA4E685f962f0cF6C9"),
    (Key::StoreAddress, "0165878A594ca255338adfa4d48449f69242Eb8F"),
    (Key::HistoricalSyncBlock, "0"),
    (Key::HistoricalSyncThreshold, "5000"),
    (Key::ConfirmCount, "0"),
    (
        Key::GfNodeUrl,
        "https://gnfd-testnet-fullnode-tendermint-ap.bnbchain.org",
    ),
    (Key::TxPollTimeoutMs, "5000"),
];

/// Profile name → network constants lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileRegistry;

impl ProfileRegistry {
    pub fn new() -> Self {
        ProfileRegistry
    }

    /// Look up a profile and its values by name. The name is trimmed and
    /// matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<(Profile, ProfileValues)> {
        name.parse::<Profile>().ok().map(|p| (p, self.values(p)))
    }

    pub fn values(&self, profile: Profile) -> ProfileValues {
        match profile {
            Profile::Bsctest => BSCTEST,
            Profile::Localhost => LOCALHOST,
        }
    }

    pub fn value(&self, profile: Profile, key: Key) -> Option<&'static str> {
        self.values(profile)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn profiles(&self) -> &'static [Profile] {
        &Profile::ALL
    }
}
