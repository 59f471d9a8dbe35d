use toml::Value;
use tracing::{debug, info};

use crate::collect::{self, GatherInput};
use crate::error::EnvgenError;
use crate::file;
use crate::merge::InputSet;
use crate::ops::{self, GenResult, Targets};
use crate::prompt::Answer;
use crate::registry::{ProfileRegistry, TemplateRegistry};
use crate::settings::{self, Settings, SettingsInput};
use crate::types::{GenAction, SearchPath};

const APP_NAME: &str = "envgen";

/// Entry point for building an envgen run.
pub struct EnvGen;

impl EnvGen {
    pub fn builder() -> EnvGenBuilder {
        EnvGenBuilder::new()
    }
}

/// Builder for one envgen invocation.
///
/// Two independent inputs are configured here:
///
/// - **Settings** (where to write, which preset, which profile), layered from
///   settings files, environment variables and [`setting()`](Self::setting).
/// - **Direct values** ([`value()`](Self::value)), which sit above the preset
///   and profile when inputs are gathered.
pub struct EnvGenBuilder {
    file_name: String,
    search_paths: Vec<SearchPath>,
    env_prefix: String,
    env_enabled: bool,
    env_vars: Option<Vec<(String, String)>>,
    strict: bool,
    settings_overrides: Vec<(String, Value)>,
    values: InputSet,
}

impl EnvGenBuilder {
    fn new() -> Self {
        Self {
            file_name: format!("{APP_NAME}.toml"),
            search_paths: vec![SearchPath::Platform, SearchPath::Cwd],
            env_prefix: APP_NAME.to_uppercase(),
            env_enabled: true,
            env_vars: None,
            strict: true,
            settings_overrides: Vec::new(),
            values: InputSet::new(),
        }
    }

    /// Override the settings file name (default: `"envgen.toml"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    /// Replace the default settings search paths (`[Platform, Cwd]`).
    ///
    /// Paths are listed in **priority-ascending** order: the last entry has the
    /// highest priority.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Disable environment variable loading entirely, `CONFIG_DIR` included.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    /// Use these variables instead of the process environment.
    pub fn env_vars(mut self, vars: Vec<(String, String)>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Enable or disable strict mode (default: `true`).
    /// In strict mode, unknown keys in settings files produce errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add a settings override. `None` values are ignored (useful for optional clap args).
    pub fn setting<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.settings_overrides.push((key.to_string(), v.into()));
        }
        self
    }

    /// Supply an input value directly. Beats the preset and the profile.
    pub fn value(mut self, key: &str, value: &str) -> Self {
        self.values = self.values.overlay([(key, value)]);
        self
    }

    pub fn values(mut self, values: InputSet) -> Self {
        self.values = self
            .values
            .overlay(values.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    fn build_input(&self) -> Result<SettingsInput, EnvgenError> {
        let files = file::load_settings_files(&self.search_paths, &self.file_name, APP_NAME)?;
        let (env_prefix, env_vars) = if self.env_enabled {
            let vars = match &self.env_vars {
                Some(vars) => vars.clone(),
                None => std::env::vars().collect(),
            };
            (Some(self.env_prefix.clone()), vars)
        } else {
            (None, Vec::new())
        };

        Ok(SettingsInput {
            files,
            env_vars,
            env_prefix,
            overrides: self.settings_overrides.clone(),
            strict: self.strict,
        })
    }

    /// Resolve settings through all layers.
    pub fn load_settings(&self) -> Result<Settings, EnvgenError> {
        let input = self.build_input()?;
        settings::resolve(input)
    }

    /// Handle a `GenAction` and print the result to stdout.
    pub fn handle_and_print(
        self,
        action: &GenAction,
        answers: &mut dyn Answer,
    ) -> Result<GenResult, EnvgenError> {
        let result = self.handle(action, answers)?;
        print!("{result}");
        Ok(result)
    }

    /// Handle a `GenAction` (list services / list profiles / generate).
    ///
    /// Generation fails fast when no output directory is configured or the
    /// service name is unknown, in that order. Once inputs are gathered,
    /// individual write failures are collected in the report instead.
    pub fn handle(
        self,
        action: &GenAction,
        answers: &mut dyn Answer,
    ) -> Result<GenResult, EnvgenError> {
        match action {
            GenAction::ListServices => Ok(ops::list_services(&TemplateRegistry::new())),
            GenAction::ListProfiles => Ok(ops::list_profiles(&ProfileRegistry::new())),
            GenAction::Generate { service } => {
                let settings = self.load_settings()?;
                let config_dir = settings.config_dir.ok_or(EnvgenError::NoConfigDir)?;
                let templates = TemplateRegistry::new();
                let services = match service {
                    Some(name) => vec![templates.get(name)?.service()],
                    None => templates.services().to_vec(),
                };
                info!(config_dir = %config_dir.display(), ?services, "generating");

                let preset = settings
                    .input
                    .as_deref()
                    .map(file::load_preset)
                    .unwrap_or_default();
                let gathered = collect::gather(
                    GatherInput {
                        services: services.clone(),
                        preset,
                        profile: settings.profile,
                        values: self.values,
                    },
                    answers,
                )?;
                debug!(keys = gathered.inputs.len(), "inputs gathered");

                let targets = Targets {
                    config_dir: &config_dir,
                    templates_dir: &settings.templates_dir,
                    snapshot: settings.output.as_deref(),
                };
                let report = ops::generate(&targets, &services, service.is_none(), &gathered.inputs);
                Ok(GenResult::Generated(report))
            }
        }
    }
}
