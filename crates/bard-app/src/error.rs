use std::path::PathBuf;

use bard_client::BardError;
use bard_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bard(#[from] BardError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to format answer: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config already exists at {0}")]
    ConfigExists(PathBuf),
}
