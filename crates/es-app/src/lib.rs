//! Shared application service layer for engine sizing.
//!
//! Drives a design document through combustion, nozzle, injector and
//! plumbing sizing, and provides the entry points the CLI uses.

pub mod document_service;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod run_service;
pub mod sweep;

pub use document_service::{has_prescribed_products, load_document, validate_document};
pub use error::{AppError, AppResult};
pub use pipeline::{run_stage, run_stages};
pub use progress::{RunProgressEvent, RunStage};
pub use run_service::{
    OutputFormat, RunRequest, RunResponse, output_path, run_design, run_design_with_progress,
};
pub use sweep::{SweepPoint, chamber_pressure_sweep};
