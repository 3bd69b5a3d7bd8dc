use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WafError {
    #[error("Practice not found: {0}")]
    PracticeNotFound(String),

    #[error("Capability not found: {0}")]
    CapabilityNotFound(String),

    #[error("Invalid capability ID format: {0}. Use SAGA.CAP (e.g., DL.CI)")]
    InvalidCapabilityId(String),

    #[error("unknown pillar: {0}")]
    UnknownPillar(String),

    #[error("unknown lens: {0}")]
    UnknownLens(String),

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WafError>;
