use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DevServicesError {
    #[error("config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("port {0} is not a valid TCP port")]
    InvalidPort(u32),

    #[error("state persistence failed: {0}")]
    State(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DevServicesError>;
