//! Static template copying for the reverse proxy and metrics agent.
//!
//! The files copied depend on `NGINX_VARIANT` and `GRAFANA_VARIANT`. A missing
//! source is never fatal: it is logged, recorded as skipped, and generation
//! carries on.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::types::{GrafanaVariant, NginxVariant};

/// What a copy pass did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    /// Human-readable reasons for anything not copied.
    pub skipped: Vec<String>,
}

impl CopyReport {
    fn skip(&mut self, reason: String) {
        warn!("{reason}");
        self.skipped.push(reason);
    }

    fn copy(&mut self, source: &Path, target: &Path) {
        if !source.is_file() {
            self.skip(format!("template not found at {}", source.display()));
            return;
        }
        match copy_file(source, target) {
            Ok(()) => {
                debug!(from = %source.display(), to = %target.display(), "copied template");
                self.copied.push(target.to_path_buf());
            }
            Err(e) => self.skip(format!("failed to copy {}: {e}", target.display())),
        }
    }
}

fn copy_file(source: &Path, target: &Path) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(source, target).map(|_| ())
}

/// Copy `nginx.conf` plus the site template for `variant` into
/// `{config_dir}/nginx/`. An absent variant is treated as `none`.
pub fn copy_nginx(templates_dir: &Path, config_dir: &Path, variant: Option<&str>) -> CopyReport {
    let mut report = CopyReport::default();
    let source_dir = templates_dir.join("nginx");
    let target_dir = config_dir.join("nginx");

    if !source_dir.is_dir() {
        report.skip(format!(
            "nginx templates not found at {}",
            source_dir.display()
        ));
        return report;
    }

    report.copy(&source_dir.join("nginx.conf"), &target_dir.join("nginx.conf"));

    let raw = variant.unwrap_or("none");
    let site = match NginxVariant::parse(raw) {
        Some(NginxVariant::None) => {
            debug!("nginx variant 'none': no site configuration");
            return report;
        }
        Some(NginxVariant::Http) => "openstore-initial.conf.template",
        Some(NginxVariant::Https) => "openstore-ssl.conf.template",
        None => {
            report.skip(format!("unknown nginx variant '{raw}'"));
            return report;
        }
    };
    report.copy(
        &source_dir.join("templates").join(site),
        &target_dir.join("default.conf.template"),
    );
    report
}

/// Copy `agent.yaml` into `{config_dir}/grafana/` when `variant` is `full`.
pub fn copy_grafana(templates_dir: &Path, config_dir: &Path, variant: Option<&str>) -> CopyReport {
    let mut report = CopyReport::default();
    if variant.and_then(GrafanaVariant::parse) != Some(GrafanaVariant::Full) {
        debug!("grafana variant is not 'full': skipping agent.yaml");
        return report;
    }
    report.copy(
        &templates_dir.join("grafana").join("agent.yaml"),
        &config_dir.join("grafana").join("agent.yaml"),
    );
    report
}
