//! Fluid property errors.

use es_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical inputs or outputs (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Species has no mapping in this backend.
    #[error("Species {species} not supported by {backend}")]
    NotSupported {
        species: &'static str,
        backend: &'static str,
    },

    /// Unknown fluid identifier.
    #[error("Unknown fluid '{name}'")]
    UnknownFluid { name: String },

    /// Backend (CoolProp) error, typically a state outside the correlation range.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. }
            | CoreError::NonPositive { what, .. }
            | CoreError::InvalidArg { what } => FluidError::NonPhysical { what },
        }
    }
}
