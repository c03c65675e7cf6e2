//! Fluid property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use es_core::numeric::ensure_positive;
use es_core::units::{Density, DynVisc, Pressure, Temperature};

/// A pure fluid at a given temperature and absolute pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidState {
    species: Species,
    temperature: Temperature,
    pressure: Pressure,
}

impl FluidState {
    /// Create a state, rejecting non-positive or non-finite T and P.
    pub fn new(species: Species, temperature: Temperature, pressure: Pressure) -> FluidResult<Self> {
        ensure_positive(temperature.value, "temperature")?;
        ensure_positive(pressure.value, "pressure")?;
        Ok(Self {
            species,
            temperature,
            pressure,
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

/// Properties consumed by the feed-system calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Density [kg/m³]
    pub density: Density,
    /// Dynamic viscosity [Pa·s]
    pub viscosity: DynVisc,
}

/// Trait for fluid property models.
///
/// Lookups are blocking and deterministic: the same state must always
/// produce the same properties.
pub trait FluidModel: Send + Sync {
    /// Get the model name (for logging).
    fn name(&self) -> &str;

    /// Check if this model has a correlation for the species.
    fn supports(&self, species: Species) -> bool;

    /// Density [kg/m³] at the given state.
    fn density(&self, state: &FluidState) -> FluidResult<Density>;

    /// Dynamic viscosity [Pa·s] at the given state.
    fn viscosity(&self, state: &FluidState) -> FluidResult<DynVisc>;

    /// Density and viscosity in one call.
    ///
    /// Backends that can evaluate both from one internal state should override.
    fn transport(&self, state: &FluidState) -> FluidResult<FluidProperties> {
        let density = self.density(state)?;
        let viscosity = self.viscosity(state)?;
        validation::validate_density(density)?;
        validation::validate_viscosity(viscosity)?;
        Ok(FluidProperties { density, viscosity })
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_viscosity(mu: DynVisc) -> FluidResult<()> {
        if !mu.value.is_finite() || mu.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }
}
