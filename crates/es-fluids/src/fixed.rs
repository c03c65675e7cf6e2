//! Fixed-property fluid model.

use crate::error::{FluidError, FluidResult};
use crate::model::{FluidModel, FluidState, validation};
use crate::species::Species;
use es_core::units::{Density, DynVisc};
use std::collections::HashMap;

/// Returns configured constant properties per species, independent of state.
///
/// Useful for incompressible liquids where the state dependence is
/// negligible, and for running the pipeline without the CoolProp backend.
#[derive(Debug, Clone, Default)]
pub struct FixedFluidModel {
    entries: HashMap<Species, (Density, DynVisc)>,
}

impl FixedFluidModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register properties for a species, replacing any previous entry.
    pub fn with(mut self, species: Species, density: Density, viscosity: DynVisc) -> Self {
        self.entries.insert(species, (density, viscosity));
        self
    }

    fn entry(&self, species: Species) -> FluidResult<(Density, DynVisc)> {
        self.entries
            .get(&species)
            .copied()
            .ok_or(FluidError::NotSupported {
                species: species.key(),
                backend: "fixed",
            })
    }
}

impl FluidModel for FixedFluidModel {
    fn name(&self) -> &str {
        "fixed"
    }

    fn supports(&self, species: Species) -> bool {
        self.entries.contains_key(&species)
    }

    fn density(&self, state: &FluidState) -> FluidResult<Density> {
        let (rho, _) = self.entry(state.species())?;
        validation::validate_density(rho)?;
        Ok(rho)
    }

    fn viscosity(&self, state: &FluidState) -> FluidResult<DynVisc> {
        let (_, mu) = self.entry(state.species())?;
        validation::validate_viscosity(mu)?;
        Ok(mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_core::units::{bar, k, kgpm3, pas};

    #[test]
    fn returns_registered_properties() {
        let model = FixedFluidModel::new().with(Species::Ethanol, kgpm3(789.0), pas(1.2e-3));
        let state = FluidState::new(Species::Ethanol, k(293.0), bar(30.0)).unwrap();
        let props = model.transport(&state).unwrap();
        assert_eq!(props.density.value, 789.0);
        assert_eq!(props.viscosity.value, 1.2e-3);
    }

    #[test]
    fn unknown_species_is_not_supported() {
        let model = FixedFluidModel::new();
        let state = FluidState::new(Species::O2, k(293.0), bar(30.0)).unwrap();
        assert!(!model.supports(Species::O2));
        assert!(matches!(
            model.density(&state),
            Err(FluidError::NotSupported { .. })
        ));
    }

    #[test]
    fn rejects_non_physical_configuration() {
        let model = FixedFluidModel::new().with(Species::H2O, kgpm3(-1.0), pas(1e-3));
        let state = FluidState::new(Species::H2O, k(293.0), bar(1.0)).unwrap();
        assert!(matches!(
            model.transport(&state),
            Err(FluidError::NonPhysical { .. })
        ));
    }
}
