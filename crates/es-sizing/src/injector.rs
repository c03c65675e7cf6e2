//! Injector orifice sizing.

use crate::error::{SizingError, SizingResult};
use crate::math::{Real, lit, positive};
use crate::nozzle::radius;
use es_core::units::conventions::BAR_TO_PA;
use es_core::units::{Area, Density, Length, MassRate, Temperature, VolumeRate, bar, m, m2, m3ps};
use es_fluids::{FluidModel, FluidState, Species};
use tracing::debug;

/// Total orifice area [m²] passing `mass_flow` [kg/s] of an incompressible
/// liquid across `pressure_drop_bar`.
///
/// `A = mdot / (Cd · sqrt(2 · rho · dP))`
pub fn injector_area<F: Real>(
    mass_flow: F,
    discharge_coeff: F,
    density: F,
    pressure_drop_bar: F,
) -> SizingResult<F> {
    let mdot = positive(mass_flow, "injector mass flow")?;
    let cd = positive(discharge_coeff, "discharge coefficient")?;
    let rho = positive(density, "injector density")?;
    let dp = positive(pressure_drop_bar, "injector pressure drop")? * lit::<F>(BAR_TO_PA);
    Ok(mdot / (cd * (lit::<F>(2.0) * rho * dp).sqrt()))
}

/// Oxidizer state at the injector inlet: feed temperature and chamber
/// pressure plus the injector pressure drop, both in bar.
///
/// The injector and plumbing stages both look up oxidizer properties at this
/// state; building it in one place keeps the two lookups identical.
pub fn oxidizer_inlet_state(
    species: Species,
    initial_temperature: Temperature,
    chamber_pressure_bar: f64,
    ox_pressure_drop_bar: f64,
) -> SizingResult<FluidState> {
    FluidState::new(
        species,
        initial_temperature,
        bar(chamber_pressure_bar + ox_pressure_drop_bar),
    )
    .map_err(SizingError::fluid("oxidizer injector inlet state"))
}

/// Everything the injector stage reads.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectorInput {
    pub fuel_mass_flow: MassRate,
    pub fuel_density: Density,
    pub ox_mass_flow: MassRate,
    pub ox_discharge_coeff: f64,
    pub ox_pressure_drop_bar: f64,
    pub num_ox_injectors: u32,
    /// Oxidizer inlet state, see [`oxidizer_inlet_state`].
    pub oxidizer: FluidState,
}

/// Everything the injector stage produces.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectorOutput {
    /// Fuel volume flow, used to pick a spray nozzle.
    pub fuel_volume_flow: VolumeRate,
    pub ox_density: Density,
    pub ox_volume_flow: VolumeRate,
    /// Total oxidizer orifice area over all holes.
    pub ox_injector_area: Area,
    /// Radius of a single oxidizer hole.
    pub ox_injector_radius: Length,
}

pub fn size_injector(input: &InjectorInput, fluid: &dyn FluidModel) -> SizingResult<InjectorOutput> {
    let fuel_mdot = positive(input.fuel_mass_flow.value, "fuel mass flow")?;
    let fuel_rho = positive(input.fuel_density.value, "fuel density")?;
    let fuel_volume_flow = fuel_mdot / fuel_rho;

    let ox_density = fluid
        .density(&input.oxidizer)
        .map_err(SizingError::fluid("oxidizer density at injector inlet"))?;
    let ox_mdot = positive(input.ox_mass_flow.value, "oxidizer mass flow")?;
    let ox_volume_flow = ox_mdot / ox_density.value;

    let total_area = injector_area(
        ox_mdot,
        input.ox_discharge_coeff,
        ox_density.value,
        input.ox_pressure_drop_bar,
    )?;

    if input.num_ox_injectors == 0 {
        return Err(SizingError::InvalidPhysicalInput {
            what: "oxidizer injector hole count",
            value: 0.0,
        });
    }
    let hole_radius = radius(total_area / f64::from(input.num_ox_injectors))?;

    debug!(
        fluid = fluid.name(),
        ox_density = ox_density.value,
        ox_injector_area = total_area,
        ox_injector_radius = hole_radius,
        "injector sized"
    );

    Ok(InjectorOutput {
        fuel_volume_flow: m3ps(fuel_volume_flow),
        ox_density,
        ox_volume_flow: m3ps(ox_volume_flow),
        ox_injector_area: m2(total_area),
        ox_injector_radius: m(hole_radius),
    })
}
