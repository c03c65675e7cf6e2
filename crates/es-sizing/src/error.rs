//! Error types for sizing calculations.

use es_fluids::FluidError;
use std::fmt;
use thiserror::Error;

/// Sizing stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Nozzle,
    Injector,
    Plumbing,
}

impl Stage {
    pub const ORDER: [Stage; 3] = [Stage::Nozzle, Stage::Injector, Stage::Plumbing];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Nozzle => "nozzle",
            Stage::Injector => "injector",
            Stage::Plumbing => "plumbing",
        })
    }
}

/// Errors raised by sizing formulas and stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    /// Input outside a formula's validity domain.
    #[error("Invalid physical input: {what} = {value}")]
    InvalidPhysicalInput { what: &'static str, value: f64 },

    /// Geometry that evaluates to a non-positive or undefined size.
    #[error("Invalid geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    /// Fluid-property lookup failed.
    #[error("Fluid property lookup failed for {what}: {source}")]
    Collaborator {
        what: &'static str,
        #[source]
        source: FluidError,
    },

    /// Two evaluations of the same quantity disagree.
    #[error("Inconsistent {what}: {first} vs {second}")]
    Inconsistent {
        what: &'static str,
        first: f64,
        second: f64,
    },
}

pub type SizingResult<T> = Result<T, SizingError>;

impl SizingError {
    pub(crate) fn fluid(what: &'static str) -> impl FnOnce(FluidError) -> SizingError {
        move |source| SizingError::Collaborator { what, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_quantity_and_value() {
        let err = SizingError::InvalidPhysicalInput {
            what: "pressure ratio",
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("pressure ratio"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn stages_display_in_order() {
        let names: Vec<String> = Stage::ORDER.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["nozzle", "injector", "plumbing"]);
    }
}
