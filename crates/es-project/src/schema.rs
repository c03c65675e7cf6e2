//! Design document schema.
//!
//! One schema serves as both input and output: fields the sizing run computes
//! are `Option`s that are absent in an input document and filled in by the
//! run. Pressures are in bar, temperatures in K, plumbing line sizes in
//! nominal line units, everything else SI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDocument {
    pub propellants: PropellantsDef,
    pub engine: EngineDef,
    pub injector: InjectorDef,
    pub plumbing: PlumbingDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropellantsDef {
    pub fuel_chem: String,
    /// Fuel feed temperature [K], used for the combustion reactant entry.
    #[serde(default = "default_fuel_temp")]
    pub fuel_temp: f64,
    /// [kg/m³]
    pub fuel_density: f64,
    /// [Pa·s]
    pub fuel_viscosity: f64,
    pub ox_chem: String,
    /// Oxidizer temperature at the injector inlet [K].
    pub ox_initial_temp: f64,

    // Computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_viscosity: Option<f64>,
}

fn default_fuel_temp() -> f64 {
    298.15
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineDef {
    /// [bar]
    pub chamber_pressure: f64,
    /// [bar]
    pub ambient_pressure: f64,
    /// Oxidizer to fuel mass ratio.
    pub mixture_ratio: f64,
    /// Design thrust [N].
    pub thrust: f64,
    /// Characteristic length L* [m].
    pub characteristic_length: f64,
    pub contraction_ratio: f64,
    /// [deg]
    pub converging_half_angle: f64,
    /// [deg]
    pub diverging_half_angle: f64,

    // Combustion products: given up front, or written by the combustion solver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_mass_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_mass_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaust_gamma: Option<f64>,
    /// [kg/mol]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaust_molar_mass: Option<f64>,
    /// [K]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_temp: Option<f64>,

    // Computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_flow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaust_velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_thrust: Option<f64>,
    /// [s]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_impulse: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristic_velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throat_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throat_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converging_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diverging_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chamber_length: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InjectorDef {
    pub ox_discharge_coeff: f64,
    /// [bar]
    pub ox_pressure_drop: f64,
    pub num_ox_injectors: u32,

    // Computed
    /// [m³/s]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_volume_flow: Option<f64>,
    /// [m³/s]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_volume_flow: Option<f64>,
    /// Total over all holes [m²].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_injector_area: Option<f64>,
    /// Single hole [m].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_injector_radius: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlumbingDef {
    /// [m]
    pub fuel_length: f64,
    /// Nominal line size.
    pub fuel_diam: f64,
    /// [m]
    pub ox_length: f64,
    /// Nominal line size.
    pub ox_diam: f64,
    /// Absolute wall roughness [m].
    pub roughness: f64,

    // Computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_reynolds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_friction_factor: Option<f64>,
    /// [bar]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_pressure_drop: Option<f64>,
    /// [m/s]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_flow_vel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_reynolds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_friction_factor: Option<f64>,
    /// [bar]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_pressure_drop: Option<f64>,
    /// [m/s]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox_flow_vel: Option<f64>,
}
