//! Chamber-pressure sweeps over the nozzle formulas.

use es_project::DesignDocument;
use es_sizing::Stage;
use es_sizing::math::{linspace, sweep};
use es_sizing::nozzle::{exhaust_velocity, expansion_ratio};

use crate::error::{AppError, AppResult};
use crate::pipeline;

/// Nozzle performance at one chamber pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// [bar]
    pub chamber_pressure: f64,
    /// [m/s]
    pub exhaust_velocity: f64,
    pub expansion_ratio: f64,
}

/// Evaluate exhaust velocity and expansion ratio at `points` chamber
/// pressures from `from_bar` to `to_bar`, holding the document's gas
/// properties and ambient pressure fixed.
pub fn chamber_pressure_sweep(
    doc: &DesignDocument,
    from_bar: f64,
    to_bar: f64,
    points: usize,
) -> AppResult<Vec<SweepPoint>> {
    if points == 0 {
        return Err(AppError::InvalidInput(
            "sweep needs at least one point".to_string(),
        ));
    }
    let input = pipeline::nozzle_input(doc)?;
    let pa_bar = doc.engine.ambient_pressure;
    let pressures = linspace(from_bar, to_bar, points);

    let velocities = sweep(&pressures, |&pc| {
        exhaust_velocity(
            input.gamma,
            input.molar_mass,
            input.chamber_temperature.value,
            pc,
            pa_bar,
        )
    })
    .map_err(AppError::at(Stage::Nozzle))?;
    let ratios = sweep(&pressures, |&pc| expansion_ratio(input.gamma, pc, pa_bar))
        .map_err(AppError::at(Stage::Nozzle))?;

    Ok(pressures
        .iter()
        .zip(velocities)
        .zip(ratios)
        .map(|((&chamber_pressure, exhaust_velocity), expansion_ratio)| SweepPoint {
            chamber_pressure,
            exhaust_velocity,
            expansion_ratio,
        })
        .collect())
}
