use crate::errors::ConfigError;
use log::Level;
use std::{env::VarError, str::FromStr};

pub const ENV_VAR: &str = "PARAM_EXTRACTOR_ENV";
pub const LOG_VAR: &str = "PARAM_EXTRACTOR_LOG";

/// An enum that can be used to define the environment the app is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Env {
    PROD,
    #[default]
    DEV,
}

impl FromStr for Env {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        env_from_str(input)
    }
}

pub(crate) fn env_from_str(input: &str) -> Result<Env, ConfigError> {
    let sanitized = input.to_lowercase();
    match sanitized.as_ref() {
        "dev" | "development" => Ok(Env::DEV),
        "prod" | "production" => Ok(Env::PROD),
        _ => Err(ConfigError::EnvError(input.to_string())),
    }
}

pub(crate) fn level_from_str(input: &str) -> Result<Level, ConfigError> {
    Level::from_str(input)
        .map_err(|_| ConfigError::LogLevelError(input.to_string()))
}

/// Runtime options for the extractor page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub env: Env,
    /// Maximum level forwarded to the browser console.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_env(Env::default())
    }
}

impl Config {
    /// Options for `env` with its default log level.
    pub fn for_env(env: Env) -> Self {
        let log_level = match env {
            Env::DEV => Level::Debug,
            Env::PROD => Level::Info,
        };
        Self { env, log_level }
    }

    /// Builds options from raw variable values. Unset values fall back to
    /// their defaults; an explicit log level overrides the environment's.
    pub fn from_vars(
        env: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let env = env.map(env_from_str).transpose()?.unwrap_or_default();
        let mut config = Self::for_env(env);
        if let Some(level) = log_level {
            config.log_level = level_from_str(level)?;
        }
        Ok(config)
    }

    /// Reads `PARAM_EXTRACTOR_ENV` and `PARAM_EXTRACTOR_LOG` from the process
    /// environment.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let env = env_wo_default(ENV_VAR)?;
        let log_level = env_wo_default(LOG_VAR)?;
        Self::from_vars(env.as_deref(), log_level.as_deref())
    }

    /// Reads the same variables as [`Config::try_from_env`], captured when the
    /// crate was compiled. A browser bundle has no process environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("PARAM_EXTRACTOR_ENV"),
            option_env!("PARAM_EXTRACTOR_LOG"),
        )
    }
}

pub(crate) fn env_wo_default(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(val)) => Err(ConfigError::EnvError(
            val.to_string_lossy().into_owned(),
        )),
    }
}
