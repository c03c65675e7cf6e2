//! Nozzle and combustion chamber sizing.
//!
//! Ideal-rocket relations: isentropic expansion from chamber stagnation
//! conditions to ambient pressure, with a choked throat.

use crate::error::{SizingError, SizingResult};
use crate::math::{Real, lit, non_negative, positive, report, specific_heat_ratio};
use es_core::units::constants::{G0_MPS2, R_UNIVERSAL};
use es_core::units::conventions::{BAR_TO_PA, pa_to_bar};
use es_core::units::{
    Area, Force, Length, MassRate, Pressure, Temperature, Velocity, Volume, m, m2, m3, mps,
    newtons,
};
use tracing::debug;

/// Specific gas constant [J/(kg·K)] for a molar mass in kg/mol.
pub fn specific_gas_constant<F: Real>(molar_mass: F) -> SizingResult<F> {
    let molar_mass = positive(molar_mass, "molar mass")?;
    Ok(lit::<F>(R_UNIVERSAL) / molar_mass)
}

/// Ambient-to-chamber pressure ratio, valid on `(0, 1]`.
///
/// Both pressures must be in the same unit.
fn pressure_ratio<F: Real>(chamber_pressure: F, ambient_pressure: F) -> SizingResult<F> {
    let pc = positive(chamber_pressure, "chamber pressure")?;
    let pa = positive(ambient_pressure, "ambient pressure")?;
    let pr = pa / pc;
    if pr > F::one() {
        return Err(SizingError::InvalidPhysicalInput {
            what: "pressure ratio ambient/chamber (must not exceed 1)",
            value: report(pr),
        });
    }
    Ok(pr)
}

/// Exhaust velocity [m/s] for isentropic expansion to ambient pressure.
///
/// `v = sqrt(2k/(k-1) · R · Tc · (1 - (pa/pc)^((k-1)/k)))`
pub fn exhaust_velocity<F: Real>(
    gamma: F,
    molar_mass: F,
    chamber_temp: F,
    chamber_pressure: F,
    ambient_pressure: F,
) -> SizingResult<F> {
    let k = specific_heat_ratio(gamma)?;
    let r = specific_gas_constant(molar_mass)?;
    let tc = positive(chamber_temp, "chamber temperature")?;
    let pr = pressure_ratio(chamber_pressure, ambient_pressure)?;

    let one = F::one();
    let two = lit::<F>(2.0);
    let v = (two * k / (k - one) * r * tc * (one - pr.powf((k - one) / k))).sqrt();
    Ok(v)
}

/// Optimum nozzle area ratio (exit/throat) for expansion to ambient pressure.
///
/// Equal chamber and ambient pressures leave no supersonic exit and are rejected.
pub fn expansion_ratio<F: Real>(
    gamma: F,
    chamber_pressure: F,
    ambient_pressure: F,
) -> SizingResult<F> {
    let k = specific_heat_ratio(gamma)?;
    let pr = pressure_ratio(chamber_pressure, ambient_pressure)?;

    let one = F::one();
    let two = lit::<F>(2.0);
    let eps = one
        / (((k + one) / two).powf(one / (k - one))
            * pr.powf(one / k)
            * ((k + one) / (k - one) * (one - pr.powf((k - one) / k))).sqrt());
    if !eps.is_finite() {
        return Err(SizingError::InvalidPhysicalInput {
            what: "expansion ratio (no pressure drop across nozzle)",
            value: report(pr),
        });
    }
    Ok(eps)
}

/// Throat area [m²] for choked flow of `mass_flow` [kg/s].
///
/// `chamber_pressure` is in bar.
pub fn throat_area<F: Real>(
    gamma: F,
    molar_mass: F,
    mass_flow: F,
    chamber_temp: F,
    chamber_pressure: F,
) -> SizingResult<F> {
    let k = specific_heat_ratio(gamma)?;
    let r = specific_gas_constant(molar_mass)?;
    let mdot = positive(mass_flow, "mass flow")?;
    let tc = positive(chamber_temp, "chamber temperature")?;
    let pc = positive(chamber_pressure, "chamber pressure")? * lit::<F>(BAR_TO_PA);

    let one = F::one();
    let two = lit::<F>(2.0);
    let flow_per_area =
        pc * k / (k * r * tc).sqrt() * (two / (k + one)).powf((k + one) / two / (k - one));
    Ok(mdot / flow_per_area)
}

/// Characteristic velocity c* [m/s].
pub fn characteristic_velocity<F: Real>(
    gamma: F,
    molar_mass: F,
    chamber_temp: F,
) -> SizingResult<F> {
    let k = specific_heat_ratio(gamma)?;
    let r = specific_gas_constant(molar_mass)?;
    let tc = positive(chamber_temp, "chamber temperature")?;

    let one = F::one();
    let two = lit::<F>(2.0);
    Ok((k * r * tc).sqrt() / k * ((k + one) / two).powf((k + one) / (two * (k - one))))
}

/// Radius of a circle of the given area.
pub fn radius<F: Real>(area: F) -> SizingResult<F> {
    let area = positive(area, "area")?;
    Ok((area / F::PI()).sqrt())
}

/// Area of a circle of the given radius; inverse of [`radius`].
pub fn circle_area<F: Real>(radius: F) -> SizingResult<F> {
    let r = positive(radius, "radius")?;
    Ok(F::PI() * r * r)
}

/// Axial length of a cone frustum with end radii `r1`, `r2` and the given
/// half-angle in degrees, which must lie strictly between 0 and 90.
pub fn cone_length<F: Real>(r1: F, r2: F, half_angle_deg: F) -> SizingResult<F> {
    let r1 = positive(r1, "cone radius")?;
    let r2 = positive(r2, "cone radius")?;
    let ninety = lit::<F>(90.0);
    if !(half_angle_deg > F::zero() && half_angle_deg < ninety) {
        return Err(SizingError::InvalidGeometry {
            what: "cone half-angle in degrees (must be in (0, 90))",
            value: report(half_angle_deg),
        });
    }

    let length = (r2 - r1).abs() / half_angle_deg.to_radians().tan();
    if !(length.is_finite() && length > F::zero()) {
        return Err(SizingError::InvalidGeometry {
            what: "cone length",
            value: report(length),
        });
    }
    Ok(length)
}

/// Length of the cylindrical part of the chamber.
///
/// `total_volume` covers cylinder plus converging section; the converging
/// section volume is `Ach·Lcon·(1 + sqrt(At/Ach) + At/Ach)`.
pub fn chamber_length<F: Real>(
    total_volume: F,
    conver_length: F,
    chamber_area: F,
    throat_area: F,
) -> SizingResult<F> {
    let total = positive(total_volume, "chamber volume")?;
    let lcon = non_negative(conver_length, "converging length")?;
    let ach = positive(chamber_area, "chamber area")?;
    let at = positive(throat_area, "throat area")?;

    let ratio = at / ach;
    let vcon = ach * lcon * (F::one() + ratio.sqrt() + ratio);
    if vcon >= total {
        return Err(SizingError::InvalidGeometry {
            what: "converging section volume (exceeds total chamber volume)",
            value: report(vcon),
        });
    }
    Ok((total - vcon) / ach)
}

/// Everything the nozzle stage reads.
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleInput {
    /// Ratio of specific heats of the chamber gas.
    pub gamma: f64,
    /// Chamber gas molar mass [kg/mol].
    pub molar_mass: f64,
    pub chamber_temperature: Temperature,
    pub chamber_pressure: Pressure,
    pub ambient_pressure: Pressure,
    pub fuel_mass_flow: MassRate,
    pub ox_mass_flow: MassRate,
    /// Characteristic chamber length L* (chamber volume over throat area).
    pub characteristic_length: Length,
    /// Chamber-to-throat area ratio.
    pub contraction_ratio: f64,
    pub converging_half_angle_deg: f64,
    pub diverging_half_angle_deg: f64,
}

/// Everything the nozzle stage produces.
#[derive(Debug, Clone, PartialEq)]
pub struct NozzleOutput {
    pub mass_flow: MassRate,
    pub exhaust_velocity: Velocity,
    /// Ideal thrust at optimum expansion.
    pub thrust: Force,
    /// Specific impulse [s].
    pub specific_impulse: f64,
    pub characteristic_velocity: Velocity,
    pub expansion_ratio: f64,
    pub throat_area: Area,
    pub throat_radius: Length,
    pub exit_area: Area,
    pub exit_radius: Length,
    pub chamber_area: Area,
    pub chamber_radius: Length,
    pub chamber_volume: Volume,
    pub converging_length: Length,
    pub diverging_length: Length,
    pub chamber_length: Length,
}

/// Run the nozzle formula set and assemble the chamber/nozzle geometry.
pub fn size_nozzle(input: &NozzleInput) -> SizingResult<NozzleOutput> {
    let k = input.gamma;
    let mm = input.molar_mass;
    let tc = input.chamber_temperature.value;
    let pc_pa = input.chamber_pressure.value;
    let pa_pa = input.ambient_pressure.value;

    let mdot = positive(input.fuel_mass_flow.value, "fuel mass flow")?
        + positive(input.ox_mass_flow.value, "oxidizer mass flow")?;
    let contraction = input.contraction_ratio;
    if !(contraction.is_finite() && contraction > 1.0) {
        return Err(SizingError::InvalidGeometry {
            what: "contraction ratio (must exceed 1)",
            value: contraction,
        });
    }

    let ve = exhaust_velocity(k, mm, tc, pc_pa, pa_pa)?;
    let eps = expansion_ratio(k, pc_pa, pa_pa)?;
    let c_star = characteristic_velocity(k, mm, tc)?;

    let at = throat_area(k, mm, mdot, tc, pa_to_bar(pc_pa))?;
    let rt = radius(at)?;
    let ae = eps * at;
    let re = radius(ae)?;
    let ach = contraction * at;
    let rch = radius(ach)?;

    let l_star = positive(input.characteristic_length.value, "characteristic length")?;
    let vch = l_star * at;
    let l_conv = cone_length(rch, rt, input.converging_half_angle_deg)?;
    let l_div = cone_length(rt, re, input.diverging_half_angle_deg)?;
    let l_cyl = chamber_length(vch, l_conv, ach, at)?;

    debug!(
        exhaust_velocity = ve,
        expansion_ratio = eps,
        throat_area = at,
        chamber_length = l_cyl,
        "nozzle sized"
    );

    Ok(NozzleOutput {
        mass_flow: es_core::units::kgps(mdot),
        exhaust_velocity: mps(ve),
        thrust: newtons(mdot * ve),
        specific_impulse: ve / G0_MPS2,
        characteristic_velocity: mps(c_star),
        expansion_ratio: eps,
        throat_area: m2(at),
        throat_radius: m(rt),
        exit_area: m2(ae),
        exit_radius: m(re),
        chamber_area: m2(ach),
        chamber_radius: m(rch),
        chamber_volume: m3(vch),
        converging_length: m(l_conv),
        diverging_length: m(l_div),
        chamber_length: m(l_cyl),
    })
}
