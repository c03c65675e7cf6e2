//! CoolProp-based fluid property model.

use crate::error::{FluidError, FluidResult};
use crate::model::{FluidModel, FluidProperties, FluidState, validation};
use crate::species::Species;
use es_core::units::{Density, DynVisc, kgpm3, pas};
use rfluids::prelude::*;

/// CoolProp backend for fluid properties.
///
/// Pure fluids only. A state outside a fluid's correlation range surfaces
/// as [`FluidError::Backend`].
#[derive(Debug, Default)]
pub struct CoolPropModel {}

impl CoolPropModel {
    pub fn new() -> Self {
        Self {}
    }

    fn fluid_at(&self, state: &FluidState) -> FluidResult<Fluid> {
        let species = state.species();
        let pure = species.rfluids_pure().ok_or(FluidError::NotSupported {
            species: species.key(),
            backend: "CoolProp",
        })?;
        let p_pa = state.pressure().value;
        let t_k = state.temperature().value;

        Fluid::from(pure)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| FluidError::Backend {
                message: format!(
                    "rfluids error for {} at P={} Pa, T={} K: {}",
                    species, p_pa, t_k, e
                ),
            })
    }
}

fn read_density(fluid: &mut Fluid) -> FluidResult<Density> {
    let rho = fluid.density().map_err(|e| FluidError::Backend {
        message: format!("rfluids error getting density: {}", e),
    })?;
    let rho = kgpm3(rho);
    validation::validate_density(rho)?;
    Ok(rho)
}

fn read_viscosity(fluid: &mut Fluid) -> FluidResult<DynVisc> {
    let mu = fluid.dynamic_viscosity().map_err(|e| FluidError::Backend {
        message: format!("rfluids error getting viscosity: {}", e),
    })?;
    let mu = pas(mu);
    validation::validate_viscosity(mu)?;
    Ok(mu)
}

impl FluidModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, species: Species) -> bool {
        species.rfluids_pure().is_some()
    }

    fn density(&self, state: &FluidState) -> FluidResult<Density> {
        let mut fluid = self.fluid_at(state)?;
        read_density(&mut fluid)
    }

    fn viscosity(&self, state: &FluidState) -> FluidResult<DynVisc> {
        let mut fluid = self.fluid_at(state)?;
        read_viscosity(&mut fluid)
    }

    fn transport(&self, state: &FluidState) -> FluidResult<FluidProperties> {
        let mut fluid = self.fluid_at(state)?;
        Ok(FluidProperties {
            density: read_density(&mut fluid)?,
            viscosity: read_viscosity(&mut fluid)?,
        })
    }
}
