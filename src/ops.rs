//! Operations behind each [`GenAction`](crate::GenAction), and the
//! `GenResult` enum callers use to display results.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::copier::{self, CopyReport};
use crate::error::EnvgenError;
use crate::keys::{Key, raw};
use crate::merge::InputSet;
use crate::persist;
use crate::registry::{ProfileRegistry, TemplateRegistry};
use crate::render::render_service;
use crate::types::{GrafanaVariant, Profile, Service};

/// Result of an envgen operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum GenResult {
    /// Known services in registry order.
    Services(Vec<Service>),
    /// Known profiles with their chain ids.
    Profiles(Vec<(Profile, String)>),
    /// What a generation run wrote.
    Generated(GenerationReport),
}

/// Outcome of writing every artifact for a run. Individual failures are
/// collected here rather than aborting the run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub config_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<String>,
    pub failures: Vec<(PathBuf, String)>,
    pub snapshot: Option<PathBuf>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_write(&mut self, path: PathBuf, result: Result<(), EnvgenError>) {
        match result {
            Ok(()) => self.written.push(path),
            Err(e) => {
                warn!("{e}");
                self.failures.push((path, e.to_string()));
            }
        }
    }

    fn absorb(&mut self, copies: CopyReport) {
        self.copied.extend(copies.copied);
        self.skipped.extend(copies.skipped);
    }
}

impl fmt::Display for GenResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenResult::Services(services) => {
                writeln!(f, "Available services:")?;
                for svc in services {
                    writeln!(f, "  - {svc}")?;
                }
                Ok(())
            }
            GenResult::Profiles(profiles) => {
                writeln!(f, "Available profiles:")?;
                for (profile, chain_id) in profiles {
                    writeln!(f, "  - {profile}: Chain ID {chain_id}")?;
                }
                Ok(())
            }
            GenResult::Generated(report) => write!(f, "{report}"),
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generating .env files in {}", self.config_dir.display())?;
        for path in &self.written {
            writeln!(f, "Created {}", path.display())?;
        }
        for path in &self.copied {
            writeln!(f, "Copied {}", path.display())?;
        }
        for reason in &self.skipped {
            writeln!(f, "Skipped: {reason}")?;
        }
        for (path, reason) in &self.failures {
            writeln!(f, "Failed {}: {reason}", path.display())?;
        }
        if let Some(path) = &self.snapshot {
            writeln!(f, "Created consolidated env: {}", path.display())?;
        }
        writeln!(f)?;
        if self.is_clean() {
            writeln!(f, "All .env files generated successfully!")?;
        } else {
            writeln!(
                f,
                "Generation finished with {} failed write(s).",
                self.failures.len()
            )?;
        }
        writeln!(f, "Configuration files created in: {}", self.config_dir.display())
    }
}

pub fn list_services(registry: &TemplateRegistry) -> GenResult {
    GenResult::Services(registry.services().to_vec())
}

pub fn list_profiles(registry: &ProfileRegistry) -> GenResult {
    GenResult::Profiles(
        registry
            .profiles()
            .iter()
            .map(|p| {
                let chain_id = registry.value(*p, Key::ChainId).unwrap_or_default();
                (*p, chain_id.to_string())
            })
            .collect(),
    )
}

/// Where generated artifacts go and where static templates come from.
#[derive(Debug, Clone)]
pub struct Targets<'a> {
    pub config_dir: &'a Path,
    pub templates_dir: &'a Path,
    /// Consolidated snapshot destination, if requested.
    pub snapshot: Option<&'a Path>,
}

/// Render and write every artifact for `services`. Generating the full set
/// (`all_services`) also writes the Redis server config.
pub fn generate(
    targets: &Targets<'_>,
    services: &[Service],
    all_services: bool,
    inputs: &InputSet,
) -> GenerationReport {
    let registry = TemplateRegistry::new();
    let mut report = GenerationReport {
        config_dir: targets.config_dir.to_path_buf(),
        ..GenerationReport::default()
    };

    for service in services {
        match service {
            Service::Nginx => report.absorb(copier::copy_nginx(
                targets.templates_dir,
                targets.config_dir,
                inputs.get_key(Key::NginxVariant),
            )),
            Service::Grafana => {
                let variant = inputs.get_key(Key::GrafanaVariant);
                report.absorb(copier::copy_grafana(
                    targets.templates_dir,
                    targets.config_dir,
                    variant,
                ));
                if variant.and_then(GrafanaVariant::parse) == Some(GrafanaVariant::None) {
                    info!("grafana variant 'none': no grafana .env");
                    report
                        .skipped
                        .push("grafana .env (variant 'none')".to_string());
                    continue;
                }
            }
            _ => {}
        }

        let content = render_service(&registry, *service, inputs);
        let path = persist::service_env_path(targets.config_dir, *service);
        let result = persist::write_service_env(targets.config_dir, *service, &content).map(|_| ());
        report.record_write(path, result);
    }

    if all_services {
        let path = targets.config_dir.join("redis").join("redis.conf");
        let password = inputs.get(raw::REDIS_PASS).unwrap_or_default();
        let result = persist::write_redis_conf(targets.config_dir, password).map(|_| ());
        report.record_write(path, result);
    }

    if let Some(path) = targets.snapshot {
        match persist::write_snapshot(path, inputs) {
            Ok(()) => report.snapshot = Some(path.to_path_buf()),
            Err(e) => {
                warn!("failed to write consolidated env: {e}");
                report.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    report
}
