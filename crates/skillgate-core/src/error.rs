use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillgateError {
    #[error("invalid autonomy level '{0}': must be 1, 2, or 3")]
    InvalidLevel(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillgateError>;
