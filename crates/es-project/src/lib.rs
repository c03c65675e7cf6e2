//! es-project: design document format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_document};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<DesignDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc: DesignDocument = serde_yaml::from_str(&content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn save_yaml(path: &Path, doc: &DesignDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<DesignDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc: DesignDocument = serde_json::from_str(&content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn save_json(path: &Path, doc: &DesignDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<DesignDocument> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

#[cfg(test)]
pub(crate) fn sample_document() -> DesignDocument {
    DesignDocument {
        propellants: PropellantsDef {
            fuel_chem: "Ethanol".into(),
            fuel_temp: 298.15,
            fuel_density: 789.0,
            fuel_viscosity: 1.1e-3,
            ox_chem: "Oxygen".into(),
            ox_initial_temp: 290.0,
            ox_density: None,
            ox_viscosity: None,
        },
        engine: EngineDef {
            chamber_pressure: 20.0,
            ambient_pressure: 1.01325,
            mixture_ratio: 1.5,
            thrust: 2500.0,
            characteristic_length: 1.1,
            contraction_ratio: 6.0,
            converging_half_angle: 30.0,
            diverging_half_angle: 15.0,
            fuel_mass_flow: None,
            ox_mass_flow: None,
            exhaust_gamma: None,
            exhaust_molar_mass: None,
            chamber_temp: None,
            mass_flow: None,
            exhaust_velocity: None,
            ideal_thrust: None,
            specific_impulse: None,
            characteristic_velocity: None,
            expansion_ratio: None,
            throat_area: None,
            throat_radius: None,
            exit_area: None,
            exit_radius: None,
            chamber_area: None,
            chamber_radius: None,
            chamber_volume: None,
            converging_length: None,
            diverging_length: None,
            chamber_length: None,
        },
        injector: InjectorDef {
            ox_discharge_coeff: 0.65,
            ox_pressure_drop: 5.0,
            num_ox_injectors: 12,
            fuel_volume_flow: None,
            ox_volume_flow: None,
            ox_injector_area: None,
            ox_injector_radius: None,
        },
        plumbing: PlumbingDef {
            fuel_length: 1.0,
            fuel_diam: 0.5,
            ox_length: 1.5,
            ox_diam: 0.5,
            roughness: 1.5e-6,
            fuel_reynolds: None,
            fuel_friction_factor: None,
            fuel_pressure_drop: None,
            fuel_flow_vel: None,
            ox_reynolds: None,
            ox_friction_factor: None,
            ox_pressure_drop: None,
            ox_flow_vel: None,
        },
    }
}
