//! Layered `.env` generation for a multi-service deployment.
//!
//! envgen builds one `KEY=VALUE` file per service from a small set of raw
//! inputs: a preset file, a deployment profile, values supplied directly, and
//! answers to interactive prompts for whatever is still missing. Template keys
//! that are derived (`WALLET_PK`, `DATABASE_URL`, `REDIS_URL`, `LOG_PATH`) are
//! computed per service from the raw inputs.
//!
//! # Quick start
//!
//! ```ignore
//! use envgen::{EnvGen, GenAction, TerminalAnswers};
//!
//! let mut answers = TerminalAnswers::new();
//! EnvGen::builder()
//!     .setting("config_dir", Some("deploy/config"))
//!     .setting("profile", Some("bsctest"))
//!     .value("LOG_DIR", "/var/log/openstore")
//!     .handle_and_print(&GenAction::Generate { service: None }, &mut answers)?;
//! ```
//!
//! # Input layers
//!
//! Lowest to highest priority:
//!
//! ```text
//! preset file      KEY=VALUE lines from `input`
//!   ↑ profile      applied wholesale when a profile-governed key is missing
//!   ↑ values       EnvGenBuilder::value / --set KEY=VALUE
//!   ↑ prompts      only for required keys that are still absent
//! ```
//!
//! A key that is present, even with an empty value, is never prompted for.
//! Empty values fall back to the template default at render time.
//!
//! # Settings
//!
//! The tool's own settings (`config_dir`, `templates_dir`, `profile`,
//! `input`, `output`) are a separate layer stack: compiled defaults, then
//! `envgen.toml` in the platform config directory and the working directory,
//! then `CONFIG_DIR` / `ENVGEN__<FIELD>` environment variables, then
//! [`EnvGenBuilder::setting`]. Unknown keys in settings files are rejected
//! with their line number unless [`strict(false)`](EnvGenBuilder::strict) is
//! set.
//!
//! # Output
//!
//! Each service gets `{config_dir}/{service}/.env`. Generating every service
//! also writes `{config_dir}/redis/redis.conf`. The nginx and grafana
//! services copy their static templates from `templates_dir`. When `output`
//! is set, every merged input is written there as a snapshot that can be fed
//! back as a preset.
//!
//! Write failures for individual files are collected in the
//! [`GenerationReport`] instead of aborting the run.

pub mod error;
pub mod keys;
pub mod logging;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod collect;
mod copier;
mod env;
mod file;
pub(crate) mod merge;
mod ops;
mod overrides;
mod persist;
mod prompt;
mod registry;
mod render;
mod resolve;
mod settings;
mod validate;

#[cfg(test)]
mod fixtures;

pub use builder::{EnvGen, EnvGenBuilder};
#[cfg(feature = "clap")]
pub use cli::{Cli, Command};
pub use error::EnvgenError;
pub use merge::InputSet;
pub use ops::{GenResult, GenerationReport};
pub use overrides::parse_assignments;
pub use prompt::{Answer, ScriptedAnswers, TerminalAnswers};
pub use settings::Settings;
pub use types::{GenAction, Profile, SearchPath, Service};
