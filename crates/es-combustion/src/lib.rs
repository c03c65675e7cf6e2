//! es-combustion: combustion-gas properties for engine sizing.
//!
//! The sizing pipeline only needs a handful of chamber properties (ratio of
//! specific heats, molar mass, chamber temperature) plus the propellant mass
//! flow split. This crate defines that contract as the `CombustionSolver`
//! trait and provides:
//! - `CeaProcess`: runs a NASA CEA executable as a blocking subprocess
//! - `PrescribedCombustion`: returns properties supplied up front

pub mod cea;
pub mod error;
pub mod model;
pub mod prescribed;

pub use cea::{
    CeaOutput, CeaProcess, copy_case_files, parse_output, products_from_output, write_input_deck,
};
pub use error::{CombustionError, CombustionResult};
pub use model::{CombustionProducts, CombustionRequest, CombustionSolver};
pub use prescribed::PrescribedCombustion;
