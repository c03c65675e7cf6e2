//! Feed-line hydraulics: Reynolds number, Haaland friction factor,
//! Darcy-Weisbach pressure drop and bulk velocity.

use crate::error::{SizingError, SizingResult};
use crate::math::{Real, lit, non_negative, positive, report};
use es_core::units::constants::RE_TURBULENT;
use es_core::units::conventions::{BAR_TO_PA, line_size_to_m};
use es_core::units::{Density, DynVisc, Length, MassRate, Velocity, m, mps};
use es_fluids::{FluidModel, FluidState};
use tracing::{debug, warn};

fn flow_area<F: Real>(diameter: F) -> SizingResult<F> {
    let d = positive(diameter, "line diameter")?;
    Ok(F::PI() * d * d / lit::<F>(4.0))
}

/// `Re = mdot·D / (mu·A)` with `A = π·D²/4`.
pub fn reynolds_number<F: Real>(mass_flow: F, diameter: F, viscosity: F) -> SizingResult<F> {
    let mdot = positive(mass_flow, "line mass flow")?;
    let mu = positive(viscosity, "line viscosity")?;
    let area = flow_area(diameter)?;
    Ok(mdot * diameter / (mu * area))
}

/// Darcy friction factor from the Haaland approximation of Colebrook.
pub fn darcy_friction_factor<F: Real>(roughness: F, diameter: F, reynolds: F) -> SizingResult<F> {
    let eps = non_negative(roughness, "line roughness")?;
    let d = positive(diameter, "line diameter")?;
    let re = positive(reynolds, "Reynolds number")?;

    let rel = eps / d / lit::<F>(3.7);
    let inner = rel.powf(lit::<F>(1.11)) + lit::<F>(6.9) / re;
    let denom = lit::<F>(-1.8) * inner.log10();
    let f = F::one() / (denom * denom);
    if !(f.is_finite() && f > F::zero()) {
        return Err(SizingError::InvalidPhysicalInput {
            what: "friction factor",
            value: report(f),
        });
    }
    Ok(f)
}

/// Darcy-Weisbach pressure drop in bar over `length` of straight line.
pub fn pressure_drop<F: Real>(
    length: F,
    mass_flow: F,
    diameter: F,
    roughness: F,
    density: F,
    viscosity: F,
) -> SizingResult<F> {
    let l = non_negative(length, "line length")?;
    let rho = positive(density, "line density")?;
    let re = reynolds_number(mass_flow, diameter, viscosity)?;
    let f = darcy_friction_factor(roughness, diameter, re)?;

    let eight = lit::<F>(8.0);
    let dp_pa = l * f * eight / (F::PI() * F::PI()) * mass_flow * mass_flow / rho / diameter.powi(5);
    Ok(dp_pa / lit::<F>(BAR_TO_PA))
}

/// Bulk velocity [m/s] of `mass_flow` through a line of the given diameter.
pub fn velocity<F: Real>(mass_flow: F, diameter: F, density: F) -> SizingResult<F> {
    let mdot = positive(mass_flow, "line mass flow")?;
    let rho = positive(density, "line density")?;
    Ok(mdot / rho / flow_area(diameter)?)
}

/// A straight feed line. `size` is the nominal line size from the design
/// document, converted with [`line_size_to_m`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedLine {
    pub length: Length,
    pub size: f64,
}

impl FeedLine {
    pub fn diameter(&self) -> f64 {
        line_size_to_m(self.size)
    }
}

/// Everything the plumbing stage reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PlumbingInput {
    pub fuel_mass_flow: MassRate,
    pub fuel_density: Density,
    pub fuel_viscosity: DynVisc,
    pub fuel_line: FeedLine,
    pub ox_mass_flow: MassRate,
    pub ox_line: FeedLine,
    /// Absolute wall roughness, shared by both lines.
    pub roughness: Length,
    /// Must be the state the injector stage used.
    pub oxidizer: FluidState,
    /// Oxidizer density recorded by the injector stage.
    pub injector_ox_density: Density,
}

/// Hydraulics of one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOutput {
    pub diameter: Length,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub pressure_drop_bar: f64,
    pub velocity: Velocity,
}

/// Everything the plumbing stage produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PlumbingOutput {
    pub fuel: LineOutput,
    pub ox: LineOutput,
    pub ox_density: Density,
    pub ox_viscosity: DynVisc,
}

fn size_line(
    label: &'static str,
    line: &FeedLine,
    mass_flow: f64,
    density: f64,
    viscosity: f64,
    roughness: f64,
) -> SizingResult<LineOutput> {
    // Converted once; every formula below sees the same diameter.
    let d = line.diameter();
    let re = reynolds_number(mass_flow, d, viscosity)?;
    let f = darcy_friction_factor(roughness, d, re)?;
    let dp = pressure_drop(line.length.value, mass_flow, d, roughness, density, viscosity)?;
    let v = velocity(mass_flow, d, density)?;

    if re < RE_TURBULENT {
        warn!(
            line = label,
            reynolds = re,
            "feed line flow is not turbulent; Haaland friction factor is outside its range"
        );
    }

    Ok(LineOutput {
        diameter: m(d),
        reynolds: re,
        friction_factor: f,
        pressure_drop_bar: dp,
        velocity: mps(v),
    })
}

pub fn size_plumbing(input: &PlumbingInput, fluid: &dyn FluidModel) -> SizingResult<PlumbingOutput> {
    let roughness = input.roughness.value;

    let fuel = size_line(
        "fuel",
        &input.fuel_line,
        input.fuel_mass_flow.value,
        input.fuel_density.value,
        input.fuel_viscosity.value,
        roughness,
    )?;

    let props = fluid
        .transport(&input.oxidizer)
        .map_err(SizingError::fluid("oxidizer properties at injector inlet"))?;
    if props.density.value.to_bits() != input.injector_ox_density.value.to_bits() {
        return Err(SizingError::Inconsistent {
            what: "oxidizer density between injector and plumbing",
            first: input.injector_ox_density.value,
            second: props.density.value,
        });
    }

    let ox = size_line(
        "oxidizer",
        &input.ox_line,
        input.ox_mass_flow.value,
        props.density.value,
        props.viscosity.value,
        roughness,
    )?;

    debug!(
        fuel_pressure_drop_bar = fuel.pressure_drop_bar,
        ox_pressure_drop_bar = ox.pressure_drop_bar,
        fuel_velocity = fuel.velocity.value,
        ox_velocity = ox.velocity.value,
        "plumbing sized"
    );

    Ok(PlumbingOutput {
        fuel,
        ox,
        ox_density: props.density,
        ox_viscosity: props.viscosity,
    })
}
