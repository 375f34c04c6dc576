use ratesnap_core::PipelineError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Pipeline(PipelineError::Decode(_)) => 3,
            Self::Pipeline(PipelineError::ValueFormat(_)) => 4,
            Self::Pipeline(PipelineError::Encode(_)) => 5,
            Self::Pipeline(PipelineError::Write(_)) => 6,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Pipeline(err) => err.kind(),
        }
    }
}
