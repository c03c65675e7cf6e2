//! Request/response contract for combustion-gas property solvers.

use crate::error::{CombustionError, CombustionResult};
use es_core::units::{MassRate, Pressure, Temperature};

/// Propellant combination and operating point to solve for.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustionRequest {
    /// Fuel reactant name as understood by the solver.
    pub fuel: String,
    pub fuel_temperature: Temperature,
    /// Oxidizer reactant name as understood by the solver.
    pub oxidizer: String,
    pub oxidizer_temperature: Temperature,
    pub chamber_pressure: Pressure,
    /// Nozzle exit is expanded to this pressure.
    pub ambient_pressure: Pressure,
    /// Oxidizer-to-fuel mass ratio.
    pub mixture_ratio: f64,
    /// Target thrust [N], used to set the total mass flow.
    pub thrust: f64,
}

impl CombustionRequest {
    pub fn validate(&self) -> CombustionResult<()> {
        let checks = [
            ("fuel temperature", self.fuel_temperature.value),
            ("oxidizer temperature", self.oxidizer_temperature.value),
            ("chamber pressure", self.chamber_pressure.value),
            ("ambient pressure", self.ambient_pressure.value),
            ("mixture ratio", self.mixture_ratio),
            ("thrust", self.thrust),
        ];
        for (what, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(CombustionError::InvalidRequest {
                    what: format!("{what} must be positive, got {value}"),
                });
            }
        }
        if self.ambient_pressure > self.chamber_pressure {
            return Err(CombustionError::InvalidRequest {
                what: "ambient pressure exceeds chamber pressure".to_string(),
            });
        }
        if self.fuel.trim().is_empty() || self.oxidizer.trim().is_empty() {
            return Err(CombustionError::InvalidRequest {
                what: "reactant names must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Chamber-to-exit pressure ratio.
    pub fn pressure_ratio(&self) -> f64 {
        self.chamber_pressure.value / self.ambient_pressure.value
    }
}

/// Chamber gas properties and mass flow split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionProducts {
    /// Ratio of specific heats of the chamber gas.
    pub gamma: f64,
    /// Molar mass of the chamber gas [kg/mol].
    pub molar_mass: f64,
    pub chamber_temperature: Temperature,
    pub fuel_mass_flow: MassRate,
    pub ox_mass_flow: MassRate,
}

impl CombustionProducts {
    pub fn total_mass_flow(&self) -> MassRate {
        self.fuel_mass_flow + self.ox_mass_flow
    }

    /// Split a total mass flow by oxidizer-to-fuel ratio.
    pub fn split_mass_flow(total: MassRate, mixture_ratio: f64) -> (MassRate, MassRate) {
        let fuel = total / (1.0 + mixture_ratio);
        let ox = total * mixture_ratio / (1.0 + mixture_ratio);
        (fuel, ox)
    }
}

/// Blocking combustion-gas property solver.
pub trait CombustionSolver {
    /// Solver name for logging.
    fn name(&self) -> &str;

    /// Solve for chamber gas properties. Must complete (or fail) before returning.
    fn solve(&self, request: &CombustionRequest) -> CombustionResult<CombustionProducts>;
}
