//! Clap adapter for envgen.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! The only bridge to the core is [`Cli::into_action()`], which converts
//! parsed arguments into a [`GenAction`](crate::GenAction). Settings flags are
//! handed to the builder by the binary; nothing here touches the filesystem.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{GenAction, Profile};

/// Generate per-service `.env` files for a deployment.
#[derive(Debug, Parser)]
#[command(name = "envgen", version, about)]
pub struct Cli {
    /// Deployment profile to apply without asking.
    #[arg(long, global = true, value_enum)]
    pub profile: Option<Profile>,

    /// Output directory for generated files (falls back to $CONFIG_DIR).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory holding the nginx and grafana templates.
    #[arg(long, global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Preset file of KEY=VALUE lines to seed inputs from.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Write every merged input to this file.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Supply an input value directly (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub set: Vec<String>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List known services.
    Services,
    /// List deployment profiles with their chain ids.
    Profiles,
    /// Generate .env files for every service, or for one.
    Generate {
        /// Service name (see `envgen services`).
        service: Option<String>,
    },
}

impl Cli {
    /// Bare `envgen` and `envgen generate` both generate every service.
    pub fn into_action(&self) -> GenAction {
        match &self.command {
            Some(Command::Services) => GenAction::ListServices,
            Some(Command::Profiles) => GenAction::ListProfiles,
            Some(Command::Generate { service }) => GenAction::Generate {
                service: service.clone(),
            },
            None => GenAction::Generate { service: None },
        }
    }
}
