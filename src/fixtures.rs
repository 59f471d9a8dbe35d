#[cfg(test)]
pub mod test {
    use crate::merge::InputSet;

    pub fn inputs(pairs: &[(&str, &str)]) -> InputSet {
        pairs.iter().copied().collect()
    }

    /// Every raw input any service asks for, so gathering needs no answers
    /// beyond the profile step.
    pub const COMPLETE_RAW: &[(&str, &str)] = &[
        ("ADMIN_WALLET_PK", "0xadmin"),
        ("USER_WALLET_PK", "0xuser"),
        ("TG_TOKEN", "bot-token"),
        ("TG_INFO_CHAT_ID", "-100"),
        ("TG_ALERT_CHAT_ID", "-200"),
        ("POSTGRES_HOST", "db"),
        ("POSTGRES_DB", "openstore"),
        ("POSTGRES_USER", "store"),
        ("POSTGRES_PASSWORD", "pw"),
        ("SQLITE_DB", "main"),
        ("REDIS_HOST", "redis"),
        ("REDIS_USER", ""),
        ("REDIS_PASS", "rpass"),
        ("FILE_STORAGE_PATH", "./tmp/"),
        ("LOG_DIR", "./log"),
        ("NGINX_VARIANT", "https"),
        ("DOMAIN_NAME", "example.com"),
        ("CERTBOT_EMAIL", "ops@example.com"),
        ("GRAFANA_VARIANT", "full"),
        ("GRAFANA_REMOTE_WRITE_URL", "https://prom.example.com/push"),
        ("GRAFANA_REMOTE_WRITE_USER", "grafana"),
        ("GRAFANA_REMOTE_WRITE_PASSWORD", "gpass"),
        ("ETH_NODE_URL", "https://node.example.com"),
        ("ETHSCAN_API_KEY", "scan-key"),
        ("CLIENT_HOST_URL", "127.0.0.1:8080"),
    ];

    /// The bsctest profile values as they would appear after merging.
    pub const BSCTEST_VALUES: &[(&str, &str)] = &[
        ("CHAIN_ID", "97"),
        ("ORACLE_ADDRESS", "0F61D8D6c9D6886ac7cba72716E1b98C4379E0f7"),
        ("STORE_ADDRESS", "6Edac88EA58168a47ab61836bCbAD0Ac844498A6"),
        ("HISTORICAL_SYNC_BLOCK", "60727665"),
        ("HISTORICAL_SYNC_THRESHOLD", "500"),
        ("CONFIRM_COUNT", "1"),
        (
            "GF_NODE_URL",
            "https://gnfd-testnet-fullnode-tendermint-ap.bnbchain.org",
        ),
        ("TX_POLL_TIMEOUT_MS", "5000"),
    ];

    /// A fully merged input set: raw inputs plus bsctest.
    pub fn complete() -> InputSet {
        inputs(COMPLETE_RAW).overlay(BSCTEST_VALUES.iter().copied())
    }

    #[test]
    fn complete_fixture_has_profile_keys() {
        let set = complete();
        assert_eq!(set.get("CHAIN_ID"), Some("97"));
        assert_eq!(set.get("ADMIN_WALLET_PK"), Some("0xadmin"));
    }
}
