//! Input gathering: build the merged [`InputSet`] for one invocation.
//!
//! Operates on pre-loaded data ([`GatherInput`]) plus an [`Answer`] source,
//! with no file or terminal I/O of its own. Phases, lowest to highest:
//!
//! 1. Preset file values
//! 2. Deployment profile, applied wholesale when the scope still lacks a
//!    profile-governed key (optionally followed by a contract override)
//! 3. Values supplied directly by the caller
//! 4. Gap-fill prompts for required keys that are still absent
//!
//! Finally `DATA_SOURCE_NAME` is added with its placeholder form when no
//! layer supplied it, so every snapshot carries it.
//!
//! Each phase takes the set by value and returns the extended set.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::EnvgenError;
use crate::keys::{Key, PROFILE_GOVERNED, raw};
use crate::merge::InputSet;
use crate::prompt::Answer;
use crate::registry::{DATA_SOURCE_NAME_TEMPLATE, ProfileRegistry, TemplateRegistry};
use crate::types::{GrafanaVariant, NginxVariant, Profile, Service};

/// Everything gathering needs, already loaded.
#[derive(Debug, Clone, Default)]
pub struct GatherInput {
    /// Services being generated. Requirements are the union over these.
    pub services: Vec<Service>,
    /// Parsed preset file, or empty.
    pub preset: InputSet,
    /// Profile chosen up front. `None` means ask if one is needed.
    pub profile: Option<Profile>,
    /// Values supplied directly (`--set`, API callers).
    pub values: InputSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gathered {
    pub inputs: InputSet,
    /// The profile applied in phase 2, if any.
    pub profile: Option<Profile>,
}

/// Run all gathering phases.
pub fn gather(input: GatherInput, answers: &mut dyn Answer) -> Result<Gathered, EnvgenError> {
    let templates = TemplateRegistry::new();
    let required = templates.required_in_scope(&input.services);
    let scope_keys = templates.keys_in_scope(&input.services);

    let inputs = input.preset;
    debug!(keys = inputs.len(), "preset phase");

    let (inputs, profile) = apply_profile(
        inputs,
        &scope_keys,
        input.profile,
        &input.values,
        answers,
    )?;
    debug!(keys = inputs.len(), profile = ?profile, "profile phase");

    let inputs = inputs.overlay(
        input
            .values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    );
    debug!(keys = inputs.len(), "direct values phase");

    let inputs = gap_fill(inputs, &required, answers)?;
    debug!(keys = inputs.len(), "gap-fill phase");

    let inputs = inputs.with_missing(Key::DataSourceName.as_str(), DATA_SOURCE_NAME_TEMPLATE);

    Ok(Gathered { inputs, profile })
}

/// A profile is needed when the scope uses a profile-governed key that is
/// still absent.
pub fn needs_profile(scope_keys: &BTreeSet<Key>, inputs: &InputSet) -> bool {
    PROFILE_GOVERNED
        .iter()
        .any(|key| scope_keys.contains(key) && !inputs.contains(key.as_str()))
}

/// Phase 2. When triggered, the whole profile overwrites, preset values
/// included. When not triggered, `inputs` is returned untouched.
pub fn apply_profile(
    inputs: InputSet,
    scope_keys: &BTreeSet<Key>,
    requested: Option<Profile>,
    values: &InputSet,
    answers: &mut dyn Answer,
) -> Result<(InputSet, Option<Profile>), EnvgenError> {
    if !needs_profile(scope_keys, &inputs) {
        debug!("scope needs no deployment profile");
        return Ok((inputs, None));
    }

    let profile = match requested {
        Some(p) => p,
        None => choose_profile(answers)?,
    };
    answers.notice(&format!("Using {profile} profile defaults..."));

    let profiles = ProfileRegistry::new();
    let inputs = inputs.overlay(
        profiles
            .values(profile)
            .iter()
            .map(|(key, value)| (key.as_str(), *value)),
    );

    let uses_contracts =
        scope_keys.contains(&Key::OracleAddress) || scope_keys.contains(&Key::StoreAddress);
    let both_supplied = values.contains(Key::OracleAddress.as_str())
        && values.contains(Key::StoreAddress.as_str());
    let inputs = if uses_contracts && !both_supplied {
        override_contracts(inputs, profile, answers)?
    } else {
        inputs
    };

    Ok((inputs, Some(profile)))
}

fn choose_profile(answers: &mut dyn Answer) -> Result<Profile, EnvgenError> {
    answers.notice("Deployment Profile:");
    answers.notice("Available profiles:");
    for p in Profile::ALL {
        answers.notice(&format!("  {p} - {}", p.description()));
    }
    loop {
        let choice = answers.answer("Select profile (bsctest/localhost)", "")?;
        match ProfileRegistry::new().get(&choice) {
            Some((p, _)) => return Ok(p),
            None => answers.notice("Invalid profile. Please choose 'bsctest' or 'localhost'"),
        }
    }
}

fn override_contracts(
    inputs: InputSet,
    profile: Profile,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    let current = |key: Key| inputs.get_key(key).unwrap_or_default().to_string();
    let oracle = current(Key::OracleAddress);
    let store = current(Key::StoreAddress);

    answers.notice(&format!("Profile defaults (using {profile}):"));
    answers.notice(&format!("CHAIN_ID: {}", current(Key::ChainId)));
    answers.notice(&format!("GF_NODE_URL: {}", current(Key::GfNodeUrl)));
    answers.notice(&format!(
        "Contract addresses: Oracle={oracle}, Store={store}"
    ));

    let choice = answers.answer("Override contract addresses? (y/N)", "n")?;
    if !choice.eq_ignore_ascii_case("y") {
        return Ok(inputs);
    }
    let oracle = answers.answer(
        &format!("Oracle Contract Address (current: {oracle})"),
        &oracle,
    )?;
    let store = answers.answer(&format!("Store Contract Address (current: {store})"), &store)?;
    Ok(inputs.overlay([
        (Key::OracleAddress.as_str(), oracle),
        (Key::StoreAddress.as_str(), store),
    ]))
}

struct Field {
    key: &'static str,
    prompt: &'static str,
    default: &'static str,
}

const fn field(key: &'static str, prompt: &'static str, default: &'static str) -> Field {
    Field {
        key,
        prompt,
        default,
    }
}

struct Group {
    heading: &'static str,
    fields: &'static [Field],
}

const LEADING_GROUPS: &[Group] = &[
    Group {
        heading: "Private Keys:",
        fields: &[
            field(
                raw::ADMIN_WALLET_PK,
                "Admin Wallet Private Key (for oracle/validator)",
                "",
            ),
            field(raw::USER_WALLET_PK, "User Wallet Private Key (for clients)", ""),
        ],
    },
    Group {
        heading: "Telegram Configuration:",
        fields: &[
            field("TG_TOKEN", "Telegram Bot Token", ""),
            field("TG_INFO_CHAT_ID", "Telegram Info Chat ID", ""),
            field("TG_ALERT_CHAT_ID", "Telegram Alert Chat ID", ""),
        ],
    },
    Group {
        heading: "Database Configuration:",
        fields: &[
            field("POSTGRES_HOST", "PostgreSQL Host", "postgres"),
            field("POSTGRES_DB", "PostgreSQL Database Name", ""),
            field("POSTGRES_USER", "PostgreSQL Username", ""),
            field("POSTGRES_PASSWORD", "PostgreSQL Password", ""),
            field(raw::SQLITE_DB, "SQLite Database Name (for validator)", ""),
        ],
    },
    Group {
        heading: "Redis Configuration:",
        fields: &[
            field(raw::REDIS_HOST, "Redis Host", "redis"),
            field(raw::REDIS_USER, "Redis Username (optional)", ""),
            field(raw::REDIS_PASS, "Redis Password (optional)", ""),
        ],
    },
    Group {
        heading: "Validator File Storage:",
        fields: &[field(
            "FILE_STORAGE_PATH",
            "FILE_STORAGE_PATH for validator",
            "./tmp/",
        )],
    },
    Group {
        heading: "Logging:",
        fields: &[field(raw::LOG_DIR, "Base LOG_DIR", "./log")],
    },
];

const NETWORK_GROUP: Group = Group {
    heading: "Blockchain Configuration:",
    fields: &[
        field("ETH_NODE_URL", "Ethereum Node URL", ""),
        field("ETHSCAN_API_KEY", "Etherscan API Key", ""),
        field("CLIENT_HOST_URL", "Client Host URL", "127.0.0.1:8080"),
    ],
};

const DOMAIN_FIELDS: &[Field] = &[
    field("DOMAIN_NAME", "Domain name (e.g., example.com)", ""),
    field(
        "CERTBOT_EMAIL",
        "Email for SSL certificates (Let's Encrypt)",
        "",
    ),
];

const REMOTE_WRITE_FIELDS: &[Field] = &[
    field("GRAFANA_REMOTE_WRITE_URL", "Grafana Remote Write URL", ""),
    field(
        "GRAFANA_REMOTE_WRITE_USER",
        "Grafana Remote Write Username",
        "",
    ),
    field(
        "GRAFANA_REMOTE_WRITE_PASSWORD",
        "Grafana Remote Write Password",
        "",
    ),
];

fn wanted(key: &str, required: &BTreeSet<&'static str>, inputs: &InputSet) -> bool {
    required.contains(key) && !inputs.contains(key)
}

/// Phase 4. Prompts only for keys that are required and absent; a key that
/// is present (even as an empty string) is never asked for or replaced.
pub fn gap_fill(
    mut inputs: InputSet,
    required: &BTreeSet<&'static str>,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    for group in LEADING_GROUPS {
        inputs = fill_group(inputs, group, required, answers)?;
    }
    inputs = fill_nginx(inputs, required, answers)?;
    inputs = fill_grafana(inputs, required, answers)?;
    fill_group(inputs, &NETWORK_GROUP, required, answers)
}

fn fill_group(
    inputs: InputSet,
    group: &Group,
    required: &BTreeSet<&'static str>,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    if !group.fields.iter().any(|f| wanted(f.key, required, &inputs)) {
        return Ok(inputs);
    }
    answers.notice(group.heading);
    fill_fields(inputs, group.fields, required, answers)
}

fn fill_fields(
    mut inputs: InputSet,
    fields: &[Field],
    required: &BTreeSet<&'static str>,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    for f in fields {
        if wanted(f.key, required, &inputs) {
            let value = answers.answer(f.prompt, f.default)?;
            inputs = inputs.with_missing(f.key, value);
        }
    }
    Ok(inputs)
}

fn fill_nginx(
    mut inputs: InputSet,
    required: &BTreeSet<&'static str>,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    let variant_key = Key::NginxVariant.as_str();
    let group_wanted = wanted(variant_key, required, &inputs)
        || DOMAIN_FIELDS.iter().any(|f| wanted(f.key, required, &inputs));
    if !group_wanted {
        return Ok(inputs);
    }
    answers.notice("Nginx Configuration:");

    if wanted(variant_key, required, &inputs) {
        answers.notice("Available nginx variants:");
        answers.notice("  http - HTTP only configuration");
        answers.notice("  https - HTTPS with SSL certificates");
        answers.notice("  none - No nginx configuration files");
        let variant = loop {
            let choice = answers.answer("Select nginx variant (http/https/none)", "")?;
            match NginxVariant::parse(&choice) {
                Some(v) => break v,
                None => {
                    answers.notice("Invalid variant. Please choose 'http', 'https', or 'none'")
                }
            }
        };
        inputs = inputs.with_missing(variant_key, variant.as_str());
    }

    let serves_site = inputs
        .get(variant_key)
        .and_then(NginxVariant::parse)
        .is_some_and(|v| v != NginxVariant::None);
    if serves_site {
        inputs = fill_fields(inputs, DOMAIN_FIELDS, required, answers)?;
    }
    Ok(inputs)
}

fn fill_grafana(
    mut inputs: InputSet,
    required: &BTreeSet<&'static str>,
    answers: &mut dyn Answer,
) -> Result<InputSet, EnvgenError> {
    let variant_key = Key::GrafanaVariant.as_str();
    if wanted(variant_key, required, &inputs) {
        answers.notice("Grafana Configuration:");
        answers.notice("  full - Enable Grafana Agent with remote write");
        answers.notice("  none - Do not configure Grafana");
        let variant = loop {
            let choice = answers.answer("Select grafana variant (full/none)", "")?;
            match GrafanaVariant::parse(&choice) {
                Some(v) => break v,
                None => answers.notice("Invalid variant. Please choose 'full' or 'none'"),
            }
        };
        inputs = inputs.with_missing(variant_key, variant.as_str());
    }

    let full = inputs.get(variant_key).and_then(GrafanaVariant::parse) == Some(GrafanaVariant::Full);
    if full {
        inputs = fill_fields(inputs, REMOTE_WRITE_FIELDS, required, answers)?;
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{BSCTEST_VALUES, COMPLETE_RAW, complete, inputs};
    use crate::prompt::ScriptedAnswers;

    fn scope(services: &[Service]) -> BTreeSet<Key> {
        TemplateRegistry::new().keys_in_scope(services)
    }

    fn required(services: &[Service]) -> BTreeSet<&'static str> {
        TemplateRegistry::new().required_in_scope(services)
    }

    #[test]
    fn profile_needed_when_governed_key_missing() {
        let keys = scope(&[Service::Oracle]);
        assert!(needs_profile(&keys, &inputs(&[])));
        let all_present: InputSet = BSCTEST_VALUES.iter().copied().collect();
        assert!(!needs_profile(&keys, &all_present));
    }

    #[test]
    fn profile_not_needed_for_services_without_governed_keys() {
        let keys = scope(&[Service::Postgres, Service::Nginx, Service::Grafana]);
        assert!(!needs_profile(&keys, &inputs(&[])));
    }

    #[test]
    fn profile_overwrites_preset_governed_keys() {
        let keys = scope(&[Service::Validator]);
        let preset = inputs(&[("CHAIN_ID", "1")]);
        let mut answers = ScriptedAnswers::new(["n"]);
        let (merged, profile) = apply_profile(
            preset,
            &keys,
            Some(Profile::Bsctest),
            &InputSet::new(),
            &mut answers,
        )
        .unwrap();
        assert_eq!(profile, Some(Profile::Bsctest));
        assert_eq!(merged.get("CHAIN_ID"), Some("97"));
        assert_eq!(merged.get("HISTORICAL_SYNC_BLOCK"), Some("60727665"));
    }

    #[test]
    fn complete_preset_left_untouched() {
        let keys = scope(&[Service::Validator]);
        let preset: InputSet = BSCTEST_VALUES
            .iter()
            .copied()
            .collect::<InputSet>()
            .overlay([("CHAIN_ID", "1")]);
        let mut answers = ScriptedAnswers::default();
        let (merged, profile) = apply_profile(
            preset.clone(),
            &keys,
            Some(Profile::Localhost),
            &InputSet::new(),
            &mut answers,
        )
        .unwrap();
        assert_eq!(profile, None);
        assert_eq!(merged, preset);
        assert!(answers.asked().is_empty());
    }

    #[test]
    fn invalid_profile_choice_is_reprompted() {
        let keys = scope(&[Service::Oracle]);
        let mut answers = ScriptedAnswers::new(["mainnet", "", "LOCALHOST", "n"]);
        let (merged, profile) =
            apply_profile(InputSet::new(), &keys, None, &InputSet::new(), &mut answers).unwrap();
        assert_eq!(profile, Some(Profile::Localhost));
        assert_eq!(merged.get("CHAIN_ID"), Some("31337"));
        assert_eq!(answers.asked().len(), 4);
        assert!(
            answers
                .notices()
                .iter()
                .any(|n| n.starts_with("Invalid profile"))
        );
    }

    #[test]
    fn profile_prompt_closed_input_errors() {
        let keys = scope(&[Service::Oracle]);
        let mut answers = ScriptedAnswers::new(["nope"]);
        let err = apply_profile(InputSet::new(), &keys, None, &InputSet::new(), &mut answers)
            .unwrap_err();
        assert!(matches!(err, EnvgenError::InputClosed { .. }));
    }

    #[test]
    fn contract_override_replaces_addresses() {
        let keys = scope(&[Service::Validator]);
        let mut answers = ScriptedAnswers::new(["y", "AAAA", ""]);
        let (merged, _) = apply_profile(
            InputSet::new(),
            &keys,
            Some(Profile::Bsctest),
            &InputSet::new(),
            &mut answers,
        )
        .unwrap();
        assert_eq!(merged.get("ORACLE_ADDRESS"), Some("AAAA"));
        assert_eq!(
            merged.get("STORE_ADDRESS"),
            Some("6Edac88EA58168a47ab61836bCbAD0Ac844498A6")
        );
    }

    #[test]
    fn contract_override_skipped_when_values_supply_both() {
        let keys = scope(&[Service::Validator]);
        let values = inputs(&[("ORACLE_ADDRESS", "o"), ("STORE_ADDRESS", "s")]);
        let mut answers = ScriptedAnswers::default();
        apply_profile(
            InputSet::new(),
            &keys,
            Some(Profile::Bsctest),
            &values,
            &mut answers,
        )
        .unwrap();
        assert!(answers.asked().is_empty());
    }

    #[test]
    fn gap_fill_asks_only_missing_required_keys() {
        let req = required(&[Service::ApiClient]);
        let present = inputs(&[
            ("USER_WALLET_PK", "u"),
            ("TG_TOKEN", "t"),
            ("TG_INFO_CHAT_ID", "i"),
            ("TG_ALERT_CHAT_ID", "a"),
            ("POSTGRES_HOST", "h"),
            ("POSTGRES_DB", "d"),
            ("POSTGRES_USER", "u"),
            ("POSTGRES_PASSWORD", "p"),
            ("REDIS_HOST", "r"),
            ("REDIS_USER", ""),
            ("REDIS_PASS", ""),
            ("LOG_DIR", "./log"),
        ]);
        let mut answers = ScriptedAnswers::new([""]);
        let filled = gap_fill(present, &req, &mut answers).unwrap();
        assert_eq!(answers.asked(), ["Client Host URL"]);
        assert_eq!(filled.get("CLIENT_HOST_URL"), Some("127.0.0.1:8080"));
        assert_eq!(filled.get("REDIS_USER"), Some(""));
    }

    #[test]
    fn gap_fill_never_touches_present_keys() {
        let req = required(&Service::ALL);
        let complete = inputs(COMPLETE_RAW);
        let mut answers = ScriptedAnswers::default();
        let filled = gap_fill(complete.clone(), &req, &mut answers).unwrap();
        assert_eq!(filled, complete);
        assert!(answers.asked().is_empty());
    }

    #[test]
    fn database_group_defaults() {
        let req = required(&[Service::Postgres]);
        let mut answers = ScriptedAnswers::new(["", "db", "user", "pw"]);
        let filled = gap_fill(InputSet::new(), &req, &mut answers).unwrap();
        assert_eq!(filled.get("POSTGRES_HOST"), Some("postgres"));
        assert_eq!(filled.get("POSTGRES_DB"), Some("db"));
        assert_eq!(answers.notices(), ["Database Configuration:"]);
    }

    #[test]
    fn redis_group_triggers_on_raw_keys() {
        let req = required(&[Service::ApiClient]);
        let present = inputs(COMPLETE_RAW)
            .into_iter_without(&[raw::REDIS_HOST, raw::REDIS_USER, raw::REDIS_PASS]);
        let mut answers = ScriptedAnswers::new(["", "", "secret"]);
        let filled = gap_fill(present, &req, &mut answers).unwrap();
        assert_eq!(filled.get(raw::REDIS_HOST), Some("redis"));
        assert_eq!(filled.get(raw::REDIS_PASS), Some("secret"));
    }

    #[test]
    fn nginx_variant_reprompts_then_asks_domain() {
        let req = required(&[Service::Nginx]);
        let mut answers = ScriptedAnswers::new(["tls", "https", "example.com", "ops@example.com"]);
        let filled = gap_fill(InputSet::new(), &req, &mut answers).unwrap();
        assert_eq!(filled.get("NGINX_VARIANT"), Some("https"));
        assert_eq!(filled.get("DOMAIN_NAME"), Some("example.com"));
        assert_eq!(filled.get("CERTBOT_EMAIL"), Some("ops@example.com"));
    }

    #[test]
    fn nginx_none_skips_domain() {
        let req = required(&[Service::Nginx]);
        let mut answers = ScriptedAnswers::new(["none"]);
        let filled = gap_fill(InputSet::new(), &req, &mut answers).unwrap();
        assert_eq!(filled.get("NGINX_VARIANT"), Some("none"));
        assert!(!filled.contains("DOMAIN_NAME"));
    }

    #[test]
    fn preset_nginx_variant_still_asks_missing_domain() {
        let req = required(&[Service::Nginx]);
        let mut answers = ScriptedAnswers::new(["example.com", ""]);
        let filled = gap_fill(inputs(&[("NGINX_VARIANT", "http")]), &req, &mut answers).unwrap();
        assert_eq!(filled.get("DOMAIN_NAME"), Some("example.com"));
        assert_eq!(filled.get("CERTBOT_EMAIL"), Some(""));
    }

    #[test]
    fn grafana_full_asks_remote_write() {
        let req = required(&[Service::Grafana]);
        let mut answers = ScriptedAnswers::new(["partial", "full", "https://w", "u", "p"]);
        let filled = gap_fill(InputSet::new(), &req, &mut answers).unwrap();
        assert_eq!(filled.get("GRAFANA_VARIANT"), Some("full"));
        assert_eq!(filled.get("GRAFANA_REMOTE_WRITE_PASSWORD"), Some("p"));
    }

    #[test]
    fn grafana_not_asked_out_of_scope() {
        let req = required(&[Service::Oracle]);
        let present = inputs(COMPLETE_RAW).into_iter_without(&["GRAFANA_VARIANT"]);
        let mut answers = ScriptedAnswers::default();
        let filled = gap_fill(present, &req, &mut answers).unwrap();
        assert!(!filled.contains("GRAFANA_VARIANT"));
    }

    #[test]
    fn gather_runs_phases_in_order() {
        let input = GatherInput {
            services: vec![Service::Oracle],
            preset: inputs(&[("TG_TOKEN", "preset"), ("CHAIN_ID", "1")]),
            profile: Some(Profile::Bsctest),
            values: inputs(&[("CHAIN_ID", "56"), ("ETH_NODE_URL", "http://cli")]),
        };
        // contract override, admin pk, info chat, alert chat, log dir
        let mut answers = ScriptedAnswers::new(["n", "0xadmin", "i", "a", ""]);
        let gathered = gather(input, &mut answers).unwrap();
        assert_eq!(gathered.profile, Some(Profile::Bsctest));
        assert_eq!(gathered.inputs.get("CHAIN_ID"), Some("56"));
        assert_eq!(gathered.inputs.get("TG_TOKEN"), Some("preset"));
        assert_eq!(gathered.inputs.get("ETH_NODE_URL"), Some("http://cli"));
        assert_eq!(gathered.inputs.get("LOG_DIR"), Some("./log"));
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn gather_adds_data_source_name_without_overwriting() {
        let input = GatherInput {
            services: vec![Service::Oracle],
            preset: complete(),
            ..GatherInput::default()
        };
        let gathered = gather(input, &mut ScriptedAnswers::default()).unwrap();
        assert_eq!(
            gathered.inputs.get("DATA_SOURCE_NAME"),
            Some(DATA_SOURCE_NAME_TEMPLATE)
        );

        let input = GatherInput {
            services: vec![Service::Oracle],
            preset: complete().overlay([("DATA_SOURCE_NAME", "postgresql://fixed")]),
            ..GatherInput::default()
        };
        let gathered = gather(input, &mut ScriptedAnswers::default()).unwrap();
        assert_eq!(
            gathered.inputs.get("DATA_SOURCE_NAME"),
            Some("postgresql://fixed")
        );
    }

    trait Without {
        fn into_iter_without(self, drop: &[&str]) -> InputSet;
    }

    impl Without for InputSet {
        fn into_iter_without(self, drop: &[&str]) -> InputSet {
            self.iter()
                .filter(|(k, _)| !drop.contains(k))
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }
    }
}
