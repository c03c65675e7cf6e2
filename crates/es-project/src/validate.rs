//! Design document validation.

use crate::schema::{DesignDocument, EngineDef, InjectorDef, PlumbingDef, PropellantsDef};
use es_fluids::Species;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    Missing { field: String },
}

/// Check every input field the sizing run reads.
///
/// Computed fields are ignored so an output document validates as well.
pub fn validate_document(doc: &DesignDocument) -> Result<(), ValidationError> {
    validate_propellants(&doc.propellants)?;
    validate_engine(&doc.engine)?;
    validate_injector(&doc.injector)?;
    validate_plumbing(&doc.plumbing)?;
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(invalid(field, v, "must be positive and finite"));
    }
    Ok(())
}

fn non_negative(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v < 0.0 {
        return Err(invalid(field, v, "must be non-negative and finite"));
    }
    Ok(())
}

fn species(field: &str, name: &str) -> Result<Species, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    name.parse::<Species>()
        .map_err(|_| invalid(field, name, "unknown propellant"))
}

fn half_angle(field: &str, deg: f64) -> Result<(), ValidationError> {
    if !(deg > 0.0 && deg < 90.0) {
        return Err(invalid(field, deg, "must be between 0 and 90 degrees exclusive"));
    }
    Ok(())
}

fn validate_propellants(p: &PropellantsDef) -> Result<(), ValidationError> {
    species("propellants.fuel_chem", &p.fuel_chem)?;
    species("propellants.ox_chem", &p.ox_chem)?;
    positive("propellants.fuel_temp", p.fuel_temp)?;
    positive("propellants.fuel_density", p.fuel_density)?;
    positive("propellants.fuel_viscosity", p.fuel_viscosity)?;
    positive("propellants.ox_initial_temp", p.ox_initial_temp)?;
    Ok(())
}

fn validate_engine(e: &EngineDef) -> Result<(), ValidationError> {
    positive("engine.chamber_pressure", e.chamber_pressure)?;
    positive("engine.ambient_pressure", e.ambient_pressure)?;
    if e.ambient_pressure > e.chamber_pressure {
        return Err(invalid(
            "engine.ambient_pressure",
            e.ambient_pressure,
            "must not exceed chamber pressure",
        ));
    }
    positive("engine.mixture_ratio", e.mixture_ratio)?;
    positive("engine.thrust", e.thrust)?;
    positive("engine.characteristic_length", e.characteristic_length)?;
    if !e.contraction_ratio.is_finite() || e.contraction_ratio <= 1.0 {
        return Err(invalid(
            "engine.contraction_ratio",
            e.contraction_ratio,
            "must exceed 1",
        ));
    }
    half_angle("engine.converging_half_angle", e.converging_half_angle)?;
    half_angle("engine.diverging_half_angle", e.diverging_half_angle)?;

    let prescribed = [
        ("engine.fuel_mass_flow", e.fuel_mass_flow),
        ("engine.ox_mass_flow", e.ox_mass_flow),
        ("engine.exhaust_molar_mass", e.exhaust_molar_mass),
        ("engine.chamber_temp", e.chamber_temp),
    ];
    for (field, value) in prescribed {
        if let Some(v) = value {
            positive(field, v)?;
        }
    }
    if let Some(k) = e.exhaust_gamma
        && (!k.is_finite() || k <= 1.0)
    {
        return Err(invalid("engine.exhaust_gamma", k, "must exceed 1"));
    }
    Ok(())
}

fn validate_injector(i: &InjectorDef) -> Result<(), ValidationError> {
    positive("injector.ox_discharge_coeff", i.ox_discharge_coeff)?;
    positive("injector.ox_pressure_drop", i.ox_pressure_drop)?;
    if i.num_ox_injectors == 0 {
        return Err(invalid(
            "injector.num_ox_injectors",
            i.num_ox_injectors,
            "at least one hole is required",
        ));
    }
    Ok(())
}

fn validate_plumbing(p: &PlumbingDef) -> Result<(), ValidationError> {
    non_negative("plumbing.fuel_length", p.fuel_length)?;
    positive("plumbing.fuel_diam", p.fuel_diam)?;
    non_negative("plumbing.ox_length", p.ox_length)?;
    positive("plumbing.ox_diam", p.ox_diam)?;
    non_negative("plumbing.roughness", p.roughness)?;
    Ok(())
}
