use thiserror::Error;

/// Failure to turn user input into query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("not an absolute URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown environment {0:?}. Did you set PARAM_EXTRACTOR_ENV?")]
    EnvError(String),
    #[error("Unknown log level {0:?}. Did you set PARAM_EXTRACTOR_LOG?")]
    LogLevelError(String),
}
