use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Transport),
    #[error("could not read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("response body is not JSON (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid base url '{0}': expected http:// or https://")]
    BaseUrl(String),
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}
