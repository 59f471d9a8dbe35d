//! Per-service `.env` rendering.
//!
//! Output is grouped into named comment sections. Keys no section claims go
//! under `# OTHER` in template declaration order. A section with nothing to
//! emit is left out entirely.

use crate::keys::Key;
use crate::merge::InputSet;
use crate::registry::TemplateRegistry;
use crate::resolve::resolve;
use crate::types::Service;

const SECTIONS: &[(&str, &[Key])] = &[
    (
        "TELEGRAM",
        &[Key::TgToken, Key::TgInfoChatId, Key::TgAlertChatId],
    ),
    (
        "BLOCKCHAIN",
        &[Key::EthNodeUrl, Key::ChainId, Key::GfNodeUrl, Key::EthscanApiKey],
    ),
    ("WALLET", &[Key::WalletPk]),
    ("CONTRACTS", &[Key::OracleAddress, Key::StoreAddress]),
    (
        "SYNC",
        &[
            Key::HistoricalSyncThreshold,
            Key::HistoricalSyncBlock,
            Key::ConfirmCount,
            Key::TxPollTimeoutMs,
        ],
    ),
    ("DATABASE", &[Key::DatabaseUrl]),
    (
        "SERVICES",
        &[
            Key::RedisUrl,
            Key::ClientHostUrl,
            Key::FileStoragePath,
            Key::LogPath,
        ],
    ),
    (
        "POSTGRES",
        &[Key::PostgresDb, Key::PostgresUser, Key::PostgresPassword],
    ),
    ("NGINX", &[Key::DomainName, Key::CertbotEmail]),
    (
        "GRAFANA",
        &[
            Key::GrafanaRemoteWriteUrl,
            Key::GrafanaRemoteWriteUser,
            Key::GrafanaRemoteWritePassword,
        ],
    ),
];

fn claimed(key: Key) -> bool {
    SECTIONS.iter().any(|(_, keys)| keys.contains(&key))
}

/// Render the `.env` body for `service` from merged inputs.
pub fn render_service(registry: &TemplateRegistry, service: Service, inputs: &InputSet) -> String {
    let template = registry.template(service);
    let mut lines = vec![format!(
        "# {} Environment Configuration",
        service.as_str().to_uppercase()
    )];

    for (name, keys) in SECTIONS {
        let block: Vec<String> = keys
            .iter()
            .filter_map(|key| {
                let default = template.default_for(*key)?;
                resolve(*key, service, inputs, default).map(|value| format!("{key}={value}"))
            })
            .collect();
        push_block(&mut lines, name, block);
    }

    let other: Vec<String> = template
        .entries()
        .filter(|(key, _)| !claimed(*key))
        .filter_map(|(key, default)| {
            resolve(key, service, inputs, default).map(|value| format!("{key}={value}"))
        })
        .collect();
    push_block(&mut lines, "OTHER", other);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_block(lines: &mut Vec<String>, name: &str, block: Vec<String>) {
    if block.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("# {name}"));
    lines.extend(block);
}
