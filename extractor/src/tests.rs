use crate::{
    config::{env_from_str, env_wo_default, level_from_str, LOG_VAR},
    errors::ConfigError,
    Config, Env,
};
use log::Level;

#[test]
fn env_from_str_test() {
    assert!(matches!(env_from_str("dev").unwrap(), Env::DEV));
    assert!(matches!(env_from_str("development").unwrap(), Env::DEV));
    assert!(matches!(env_from_str("DEV").unwrap(), Env::DEV));
    assert!(matches!(env_from_str("DEVELOPMENT").unwrap(), Env::DEV));
    assert!(matches!(env_from_str("prod").unwrap(), Env::PROD));
    assert!(matches!(env_from_str("production").unwrap(), Env::PROD));
    assert!(matches!(env_from_str("PROD").unwrap(), Env::PROD));
    assert!(matches!(env_from_str("PRODUCTION").unwrap(), Env::PROD));
    assert!(env_from_str("TEST").is_err());
    assert!(env_from_str("?").is_err());
}

#[test]
fn level_from_str_test() {
    assert_eq!(level_from_str("trace").unwrap(), Level::Trace);
    assert_eq!(level_from_str("WARN").unwrap(), Level::Warn);
    assert_eq!(
        level_from_str("loud"),
        Err(ConfigError::LogLevelError("loud".to_string()))
    );
}

#[test]
fn env_wo_default_test() {
    temp_env::with_var(LOG_VAR, Some("custom"), || {
        assert_eq!(
            env_wo_default(LOG_VAR).unwrap(),
            Some(String::from("custom"))
        );
    });

    temp_env::with_var_unset(LOG_VAR, || {
        assert_eq!(env_wo_default(LOG_VAR).unwrap(), None);
    });
}

#[test]
fn default_log_level_follows_env() {
    assert_eq!(Config::default().env, Env::DEV);
    assert_eq!(Config::default().log_level, Level::Debug);
    assert_eq!(Config::for_env(Env::PROD).log_level, Level::Info);
}

#[test]
fn explicit_log_level_overrides_env() {
    let config = Config::from_vars(Some("prod"), Some("trace")).unwrap();
    assert_eq!(config.env, Env::PROD);
    assert_eq!(config.log_level, Level::Trace);
}

#[test]
fn from_vars_rejects_bad_values() {
    assert_eq!(
        Config::from_vars(Some("staging"), None),
        Err(ConfigError::EnvError("staging".to_string()))
    );
    assert!(Config::from_vars(None, Some("verbose")).is_err());
}
