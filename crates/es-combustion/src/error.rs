//! Combustion solver errors.

use std::path::PathBuf;
use thiserror::Error;

pub type CombustionResult<T> = Result<T, CombustionError>;

#[derive(Error, Debug)]
pub enum CombustionError {
    #[error("Invalid combustion request: {what}")]
    InvalidRequest { what: String },

    #[error("Failed to start CEA executable {path}")]
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CEA exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("CEA output file missing: {path}")]
    MissingOutput { path: PathBuf },

    #[error("Malformed CEA output: {what}")]
    Malformed { what: String },

    #[error("Combustion properties not provided: {what}")]
    NotProvided { what: &'static str },

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
