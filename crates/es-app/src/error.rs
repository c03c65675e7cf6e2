//! Error types for the es-app service layer.

use es_sizing::{SizingError, Stage};
use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Document error: {0}")]
    Document(String),

    #[error("Document validation failed: {0}")]
    Validation(String),

    #[error("Failed to write output document: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Missing {section}.{field} in design document")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Combustion solver error: {0}")]
    Combustion(String),

    #[error("Fluid property error: {0}")]
    Fluid(String),

    #[error("{stage} sizing failed: {source}")]
    Sizing {
        stage: Stage,
        #[source]
        source: SizingError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for es-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stage that failed, for sizing errors.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AppError::Sizing { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    pub(crate) fn at(stage: Stage) -> impl FnOnce(SizingError) -> AppError {
        move |source| AppError::Sizing { stage, source }
    }
}

impl From<es_project::ProjectError> for AppError {
    fn from(err: es_project::ProjectError) -> Self {
        match err {
            es_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Document(other.to_string()),
        }
    }
}

impl From<es_combustion::CombustionError> for AppError {
    fn from(err: es_combustion::CombustionError) -> Self {
        AppError::Combustion(err.to_string())
    }
}

impl From<es_fluids::FluidError> for AppError {
    fn from(err: es_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}
