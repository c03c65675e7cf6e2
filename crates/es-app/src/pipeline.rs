//! Stage sequencing over a design document.
//!
//! Each stage's typed input is extracted from the document, the stage runs,
//! and its output is written back into the document. Stages only add fields.

use es_combustion::{CombustionProducts, CombustionRequest};
use es_core::units::{bar, k, kgpm3, kgps, m, pas};
use es_fluids::{FluidModel, FluidState, Species};
use es_project::DesignDocument;
use es_sizing::{
    FeedLine, InjectorInput, InjectorOutput, NozzleInput, NozzleOutput, PlumbingInput,
    PlumbingOutput, Stage, oxidizer_inlet_state, size_injector, size_nozzle, size_plumbing,
};
use tracing::info;

use crate::error::{AppError, AppResult};

fn require(value: Option<f64>, section: &'static str, field: &'static str) -> AppResult<f64> {
    value.ok_or(AppError::MissingField { section, field })
}

fn species(name: &str) -> AppResult<Species> {
    Ok(name.parse::<Species>()?)
}

/// Oxidizer state at the injector inlet. Both the injector and plumbing
/// inputs are built from this.
pub fn oxidizer_state(doc: &DesignDocument) -> AppResult<FluidState> {
    oxidizer_inlet_state(
        species(&doc.propellants.ox_chem)?,
        k(doc.propellants.ox_initial_temp),
        doc.engine.chamber_pressure,
        doc.injector.ox_pressure_drop,
    )
    .map_err(AppError::at(Stage::Injector))
}

/// Combustion request for the document's propellants and operating point.
pub fn combustion_request(doc: &DesignDocument) -> AppResult<CombustionRequest> {
    let p = &doc.propellants;
    let e = &doc.engine;
    Ok(CombustionRequest {
        fuel: species(&p.fuel_chem)?.cea_name(p.fuel_temp).to_string(),
        fuel_temperature: k(p.fuel_temp),
        oxidizer: species(&p.ox_chem)?.cea_name(p.ox_initial_temp).to_string(),
        oxidizer_temperature: k(p.ox_initial_temp),
        chamber_pressure: bar(e.chamber_pressure),
        ambient_pressure: bar(e.ambient_pressure),
        mixture_ratio: e.mixture_ratio,
        thrust: e.thrust,
    })
}

/// Combustion products already present in the document.
pub fn prescribed_products(doc: &DesignDocument) -> AppResult<CombustionProducts> {
    let e = &doc.engine;
    Ok(CombustionProducts {
        gamma: require(e.exhaust_gamma, "engine", "exhaust_gamma")?,
        molar_mass: require(e.exhaust_molar_mass, "engine", "exhaust_molar_mass")?,
        chamber_temperature: k(require(e.chamber_temp, "engine", "chamber_temp")?),
        fuel_mass_flow: kgps(require(e.fuel_mass_flow, "engine", "fuel_mass_flow")?),
        ox_mass_flow: kgps(require(e.ox_mass_flow, "engine", "ox_mass_flow")?),
    })
}

/// True when the engine section already carries any combustion product.
pub fn has_products(doc: &DesignDocument) -> bool {
    let e = &doc.engine;
    e.exhaust_gamma.is_some()
        || e.exhaust_molar_mass.is_some()
        || e.chamber_temp.is_some()
        || e.fuel_mass_flow.is_some()
        || e.ox_mass_flow.is_some()
}

/// Write solver products into the engine section.
pub fn apply_products(doc: &mut DesignDocument, products: &CombustionProducts) {
    let e = &mut doc.engine;
    e.exhaust_gamma = Some(products.gamma);
    e.exhaust_molar_mass = Some(products.molar_mass);
    e.chamber_temp = Some(products.chamber_temperature.value);
    e.fuel_mass_flow = Some(products.fuel_mass_flow.value);
    e.ox_mass_flow = Some(products.ox_mass_flow.value);
}

pub fn nozzle_input(doc: &DesignDocument) -> AppResult<NozzleInput> {
    let e = &doc.engine;
    Ok(NozzleInput {
        gamma: require(e.exhaust_gamma, "engine", "exhaust_gamma")?,
        molar_mass: require(e.exhaust_molar_mass, "engine", "exhaust_molar_mass")?,
        chamber_temperature: k(require(e.chamber_temp, "engine", "chamber_temp")?),
        chamber_pressure: bar(e.chamber_pressure),
        ambient_pressure: bar(e.ambient_pressure),
        fuel_mass_flow: kgps(require(e.fuel_mass_flow, "engine", "fuel_mass_flow")?),
        ox_mass_flow: kgps(require(e.ox_mass_flow, "engine", "ox_mass_flow")?),
        characteristic_length: m(e.characteristic_length),
        contraction_ratio: e.contraction_ratio,
        converging_half_angle_deg: e.converging_half_angle,
        diverging_half_angle_deg: e.diverging_half_angle,
    })
}

pub fn apply_nozzle(doc: &mut DesignDocument, out: &NozzleOutput) {
    let e = &mut doc.engine;
    e.mass_flow = Some(out.mass_flow.value);
    e.exhaust_velocity = Some(out.exhaust_velocity.value);
    e.ideal_thrust = Some(out.thrust.value);
    e.specific_impulse = Some(out.specific_impulse);
    e.characteristic_velocity = Some(out.characteristic_velocity.value);
    e.expansion_ratio = Some(out.expansion_ratio);
    e.throat_area = Some(out.throat_area.value);
    e.throat_radius = Some(out.throat_radius.value);
    e.exit_area = Some(out.exit_area.value);
    e.exit_radius = Some(out.exit_radius.value);
    e.chamber_area = Some(out.chamber_area.value);
    e.chamber_radius = Some(out.chamber_radius.value);
    e.chamber_volume = Some(out.chamber_volume.value);
    e.converging_length = Some(out.converging_length.value);
    e.diverging_length = Some(out.diverging_length.value);
    e.chamber_length = Some(out.chamber_length.value);
}

pub fn injector_input(doc: &DesignDocument) -> AppResult<InjectorInput> {
    Ok(InjectorInput {
        fuel_mass_flow: kgps(require(doc.engine.fuel_mass_flow, "engine", "fuel_mass_flow")?),
        fuel_density: kgpm3(doc.propellants.fuel_density),
        ox_mass_flow: kgps(require(doc.engine.ox_mass_flow, "engine", "ox_mass_flow")?),
        ox_discharge_coeff: doc.injector.ox_discharge_coeff,
        ox_pressure_drop_bar: doc.injector.ox_pressure_drop,
        num_ox_injectors: doc.injector.num_ox_injectors,
        oxidizer: oxidizer_state(doc)?,
    })
}

pub fn apply_injector(doc: &mut DesignDocument, out: &InjectorOutput) {
    doc.propellants.ox_density = Some(out.ox_density.value);
    let i = &mut doc.injector;
    i.fuel_volume_flow = Some(out.fuel_volume_flow.value);
    i.ox_volume_flow = Some(out.ox_volume_flow.value);
    i.ox_injector_area = Some(out.ox_injector_area.value);
    i.ox_injector_radius = Some(out.ox_injector_radius.value);
}

pub fn plumbing_input(doc: &DesignDocument) -> AppResult<PlumbingInput> {
    let pl = &doc.plumbing;
    Ok(PlumbingInput {
        fuel_mass_flow: kgps(require(doc.engine.fuel_mass_flow, "engine", "fuel_mass_flow")?),
        fuel_density: kgpm3(doc.propellants.fuel_density),
        fuel_viscosity: pas(doc.propellants.fuel_viscosity),
        fuel_line: FeedLine {
            length: m(pl.fuel_length),
            size: pl.fuel_diam,
        },
        ox_mass_flow: kgps(require(doc.engine.ox_mass_flow, "engine", "ox_mass_flow")?),
        ox_line: FeedLine {
            length: m(pl.ox_length),
            size: pl.ox_diam,
        },
        roughness: m(pl.roughness),
        oxidizer: oxidizer_state(doc)?,
        injector_ox_density: kgpm3(require(
            doc.propellants.ox_density,
            "propellants",
            "ox_density",
        )?),
    })
}

pub fn apply_plumbing(doc: &mut DesignDocument, out: &PlumbingOutput) {
    doc.propellants.ox_viscosity = Some(out.ox_viscosity.value);
    let pl = &mut doc.plumbing;
    pl.fuel_reynolds = Some(out.fuel.reynolds);
    pl.fuel_friction_factor = Some(out.fuel.friction_factor);
    pl.fuel_pressure_drop = Some(out.fuel.pressure_drop_bar);
    pl.fuel_flow_vel = Some(out.fuel.velocity.value);
    pl.ox_reynolds = Some(out.ox.reynolds);
    pl.ox_friction_factor = Some(out.ox.friction_factor);
    pl.ox_pressure_drop = Some(out.ox.pressure_drop_bar);
    pl.ox_flow_vel = Some(out.ox.velocity.value);
}

/// Run one stage against the document.
pub fn run_stage(doc: &mut DesignDocument, fluid: &dyn FluidModel, stage: Stage) -> AppResult<()> {
    match stage {
        Stage::Nozzle => {
            let out = size_nozzle(&nozzle_input(doc)?).map_err(AppError::at(stage))?;
            apply_nozzle(doc, &out);
        }
        Stage::Injector => {
            let out = size_injector(&injector_input(doc)?, fluid).map_err(AppError::at(stage))?;
            apply_injector(doc, &out);
        }
        Stage::Plumbing => {
            let out = size_plumbing(&plumbing_input(doc)?, fluid).map_err(AppError::at(stage))?;
            apply_plumbing(doc, &out);
        }
    }
    info!(%stage, "stage complete");
    Ok(())
}

/// Nozzle, injector, plumbing, in that order.
pub fn run_stages(doc: &mut DesignDocument, fluid: &dyn FluidModel) -> AppResult<()> {
    for stage in Stage::ORDER {
        run_stage(doc, fluid, stage)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use es_fluids::FixedFluidModel;

    fn doc() -> DesignDocument {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data/input_prescribed.yaml");
        es_project::load_yaml(&path).unwrap()
    }

    fn fluids() -> FixedFluidModel {
        FixedFluidModel::new().with(Species::O2, kgpm3(33.2), pas(2.1e-5))
    }

    #[test]
    fn stages_fill_computed_fields() {
        let mut d = doc();
        run_stages(&mut d, &fluids()).unwrap();
        assert!(d.engine.throat_area.unwrap() > 0.0);
        assert!(d.engine.chamber_length.unwrap() > 0.0);
        assert_eq!(d.propellants.ox_density, Some(33.2));
        assert_eq!(d.propellants.ox_viscosity, Some(2.1e-5));
        assert!(d.injector.ox_injector_radius.unwrap() > 0.0);
        assert!(d.plumbing.ox_pressure_drop.unwrap() > 0.0);
        assert!(d.plumbing.fuel_flow_vel.unwrap() > 0.0);
    }

    #[test]
    fn inputs_are_left_untouched() {
        let before = doc();
        let mut after = before.clone();
        run_stages(&mut after, &fluids()).unwrap();
        assert_eq!(before.engine.chamber_pressure, after.engine.chamber_pressure);
        assert_eq!(before.engine.fuel_mass_flow, after.engine.fuel_mass_flow);
        assert_eq!(before.plumbing.ox_diam, after.plumbing.ox_diam);
    }

    #[test]
    fn plumbing_before_injector_reports_missing_density() {
        let mut d = doc();
        let err = run_stage(&mut d, &fluids(), Stage::Plumbing).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingField {
                section: "propellants",
                field: "ox_density"
            }
        ));
    }

    #[test]
    fn missing_products_are_reported() {
        let mut d = doc();
        d.engine.exhaust_gamma = None;
        let err = run_stages(&mut d, &fluids()).unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "exhaust_gamma", .. }));
    }

    #[test]
    fn sizing_errors_carry_the_stage() {
        let mut d = doc();
        d.injector.num_ox_injectors = 0;
        let err = run_stages(&mut d, &fluids()).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Injector));
        // Nozzle already ran.
        assert!(d.engine.throat_area.is_some());
    }

    #[test]
    fn prescribed_products_write_back_unchanged() {
        let before = doc();
        assert!(has_products(&before));
        let mut after = before.clone();
        let products = prescribed_products(&before).unwrap();
        apply_products(&mut after, &products);
        assert_eq!(before, after);
    }

    #[test]
    fn oxidizer_state_uses_chamber_plus_drop() {
        let state = oxidizer_state(&doc()).unwrap();
        assert_eq!(state.pressure().value, 25.0e5);
        assert_eq!(state.temperature().value, 290.0);
    }

    #[test]
    fn combustion_request_uses_cea_names() {
        let req = combustion_request(&doc()).unwrap();
        assert_eq!(req.fuel, "C2H5OH(L)");
        assert_eq!(req.oxidizer, "O2");
        assert_eq!(req.chamber_pressure.value, 20.0e5);
    }
}
