// golfdata-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{FetchError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GolfdataError {
    // --- ERREURS DU DOMAINE (Shape, Empty result) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (Network, IO, Config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

/// What went wrong, coarse enough for the entry point to pick a message and
/// an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Shape,
    EmptyResult,
    Io,
    Config,
}

impl GolfdataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::Shape(_)) => ErrorKind::Shape,
            Self::Domain(DomainError::EmptyResult(_)) => ErrorKind::EmptyResult,
            Self::Infrastructure(infra) => match infra {
                InfrastructureError::Fetch(_) => ErrorKind::Fetch,
                InfrastructureError::Io(_)
                | InfrastructureError::Write { .. }
                | InfrastructureError::Json(_) => ErrorKind::Io,
                InfrastructureError::YamlError(_)
                | InfrastructureError::ConfigError(_)
                | InfrastructureError::ConfigNotFound(_)
                | InfrastructureError::InvalidConfig(_) => ErrorKind::Config,
            },
        }
    }
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for GolfdataError {
    fn from(err: std::io::Error) -> Self {
        GolfdataError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<FetchError> for GolfdataError {
    fn from(err: FetchError) -> Self {
        GolfdataError::Infrastructure(InfrastructureError::Fetch(err))
    }
}
