//! Closed identifier sets and framework-agnostic actions.
//!
//! Services and profiles are fixed at compile time. Parsing a name that is not
//! in the set fails with a typed error listing the valid names, which the CLI
//! prints before exiting.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvgenError;

/// A deployable unit with its own `.env` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    Oracle,
    Validator,
    DaemonClient,
    ApiClient,
    Postgres,
    Nginx,
    Grafana,
}

impl Service {
    /// Registry order. Generation of "all services" walks this list.
    pub const ALL: [Service; 7] = [
        Service::Oracle,
        Service::Validator,
        Service::DaemonClient,
        Service::ApiClient,
        Service::Postgres,
        Service::Nginx,
        Service::Grafana,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Service::Oracle => "oracle",
            Service::Validator => "validator",
            Service::DaemonClient => "daemon-client",
            Service::ApiClient => "api-client",
            Service::Postgres => "postgres",
            Service::Nginx => "nginx",
            Service::Grafana => "grafana",
        }
    }

    /// Oracle and validator sign with the admin wallet; everything else uses
    /// the user wallet.
    pub fn uses_admin_wallet(self) -> bool {
        matches!(self, Service::Oracle | Service::Validator)
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = EnvgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.as_str() == s)
            .ok_or_else(|| EnvgenError::UnknownService {
                name: s.to_string(),
                known: Service::names(),
            })
    }
}

/// A named bundle of network and contract constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// BSC testnet.
    Bsctest,
    /// Local development chain.
    Localhost,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Bsctest, Profile::Localhost];

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Bsctest => "bsctest",
            Profile::Localhost => "localhost",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Profile::Bsctest => "BSC Testnet configuration",
            Profile::Localhost => "Local development configuration",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = EnvgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| EnvgenError::UnknownProfile {
                name: s.to_string(),
                known: Profile::ALL.iter().map(|p| p.as_str().to_string()).collect(),
            })
    }
}

/// Reverse-proxy flavour selected by `NGINX_VARIANT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NginxVariant {
    Http,
    Https,
    None,
}

impl NginxVariant {
    pub const ALL: [NginxVariant; 3] = [NginxVariant::Http, NginxVariant::Https, NginxVariant::None];

    pub fn as_str(self) -> &'static str {
        match self {
            NginxVariant::Http => "http",
            NginxVariant::Https => "https",
            NginxVariant::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|v| v.as_str() == needle)
    }
}

/// Metrics-agent flavour selected by `GRAFANA_VARIANT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrafanaVariant {
    Full,
    None,
}

impl GrafanaVariant {
    pub const ALL: [GrafanaVariant; 2] = [GrafanaVariant::Full, GrafanaVariant::None];

    pub fn as_str(self) -> &'static str {
        match self {
            GrafanaVariant::Full => "full",
            GrafanaVariant::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|v| v.as_str() == needle)
    }
}

/// Where to search for `envgen.toml` settings files.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// An envgen operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum GenAction {
    ListServices,
    ListProfiles,
    /// Generate every service (`None`) or one named service. The name stays a
    /// string so an unknown service surfaces as [`EnvgenError::UnknownService`].
    Generate { service: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_names_parse() {
        for svc in Service::ALL {
            assert_eq!(svc.as_str().parse::<Service>().unwrap(), svc);
        }
    }

    #[test]
    fn unknown_service_is_typed_error() {
        let err = "indexer".parse::<Service>().unwrap_err();
        match err {
            EnvgenError::UnknownService { name, known } => {
                assert_eq!(name, "indexer");
                assert_eq!(known.len(), 7);
                assert_eq!(known[0], "oracle");
            }
            other => panic!("Expected UnknownService, got {other:?}"),
        }
    }

    #[test]
    fn service_parse_is_case_sensitive() {
        assert!("Oracle".parse::<Service>().is_err());
    }

    #[test]
    fn admin_wallet_services() {
        assert!(Service::Oracle.uses_admin_wallet());
        assert!(Service::Validator.uses_admin_wallet());
        assert!(!Service::ApiClient.uses_admin_wallet());
        assert!(!Service::DaemonClient.uses_admin_wallet());
    }

    #[test]
    fn profile_parse_trims_and_lowercases() {
        assert_eq!(" BSCTEST ".parse::<Profile>().unwrap(), Profile::Bsctest);
        assert_eq!("localhost".parse::<Profile>().unwrap(), Profile::Localhost);
        assert!(matches!(
            "mainnet".parse::<Profile>(),
            Err(EnvgenError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn profile_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            profile: Profile,
        }
        let w: Wrapper = toml::from_str("profile = \"bsctest\"").unwrap();
        assert_eq!(w.profile, Profile::Bsctest);
    }

    #[test]
    fn variants_parse() {
        assert_eq!(NginxVariant::parse("HTTPS"), Some(NginxVariant::Https));
        assert_eq!(NginxVariant::parse("tls"), None);
        assert_eq!(GrafanaVariant::parse(" full"), Some(GrafanaVariant::Full));
        assert_eq!(GrafanaVariant::parse("partial"), None);
    }
}
