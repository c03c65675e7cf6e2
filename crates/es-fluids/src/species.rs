//! Propellant species definitions.

use crate::error::FluidError;

/// Propellants and pressurants used in liquid engine feed systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Oxygen (O₂)
    O2,
    /// Nitrous oxide (N₂O)
    NitrousOxide,
    /// Hydrogen (H₂)
    H2,
    /// Methane (CH₄)
    CH4,
    /// Ethanol (C₂H₅OH)
    Ethanol,
    /// Methanol (CH₃OH)
    Methanol,
    /// Propane (C₃H₈)
    Propane,
    /// Nitrogen (N₂)
    N2,
    /// Helium (He)
    He,
    /// Water (H₂O)
    H2O,
    /// RP-1 kerosene (CEA only, no CoolProp correlation)
    RP1,
}

impl Species {
    pub const ALL: [Species; 11] = [
        Species::O2,
        Species::NitrousOxide,
        Species::H2,
        Species::CH4,
        Species::Ethanol,
        Species::Methanol,
        Species::Propane,
        Species::N2,
        Species::He,
        Species::H2O,
        Species::RP1,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::O2 => "O2",
            Species::NitrousOxide => "N2O",
            Species::H2 => "H2",
            Species::CH4 => "CH4",
            Species::Ethanol => "Ethanol",
            Species::Methanol => "Methanol",
            Species::Propane => "Propane",
            Species::N2 => "N2",
            Species::He => "He",
            Species::H2O => "H2O",
            Species::RP1 => "RP1",
        }
    }

    /// CoolProp fluid name, `None` when CoolProp has no correlation.
    pub fn coolprop_name(&self) -> Option<&'static str> {
        match self {
            Species::O2 => Some("Oxygen"),
            Species::NitrousOxide => Some("NitrousOxide"),
            Species::H2 => Some("Hydrogen"),
            Species::CH4 => Some("Methane"),
            Species::Ethanol => Some("Ethanol"),
            Species::Methanol => Some("Methanol"),
            Species::Propane => Some("n-Propane"),
            Species::N2 => Some("Nitrogen"),
            Species::He => Some("Helium"),
            Species::H2O => Some("Water"),
            Species::RP1 => None,
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> Option<rfluids::substance::Pure> {
        use rfluids::substance::Pure;
        match self {
            Species::O2 => Some(Pure::Oxygen),
            Species::NitrousOxide => Some(Pure::NitrousOxide),
            Species::H2 => Some(Pure::Hydrogen),
            Species::CH4 => Some(Pure::Methane),
            Species::Ethanol => Some(Pure::Ethanol),
            Species::Methanol => Some(Pure::Methanol),
            Species::Propane => Some(Pure::nPropane),
            Species::N2 => Some(Pure::Nitrogen),
            Species::He => Some(Pure::Helium),
            Species::H2O => Some(Pure::Water),
            Species::RP1 => None,
        }
    }

    /// Reactant name understood by NASA CEA at the given feed temperature [K].
    ///
    /// Cryogens below their normal boiling point use the condensed-phase entry.
    pub fn cea_name(&self, temperature_k: f64) -> &'static str {
        match self {
            Species::O2 if temperature_k < 100.0 => "O2(L)",
            Species::O2 => "O2",
            Species::H2 if temperature_k < 30.0 => "H2(L)",
            Species::H2 => "H2",
            Species::CH4 if temperature_k < 120.0 => "CH4(L)",
            Species::CH4 => "CH4",
            Species::NitrousOxide => "N2O",
            Species::Ethanol => "C2H5OH(L)",
            Species::Methanol => "CH3OH(L)",
            Species::Propane => "C3H8",
            Species::N2 => "N2",
            Species::He => "He",
            Species::H2O => "H2O(L)",
            Species::RP1 => "RP-1",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::O2 => "Oxygen",
            Species::NitrousOxide => "Nitrous Oxide",
            Species::H2 => "Hydrogen",
            Species::CH4 => "Methane",
            Species::Ethanol => "Ethanol",
            Species::Methanol => "Methanol",
            Species::Propane => "Propane",
            Species::N2 => "Nitrogen",
            Species::He => "Helium",
            Species::H2O => "Water",
            Species::RP1 => "RP-1",
        }
    }
}

impl std::str::FromStr for Species {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O2" | "OXYGEN" | "LOX" => Ok(Species::O2),
            "N2O" | "NITROUSOXIDE" | "NITROUS OXIDE" => Ok(Species::NitrousOxide),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "ETHANOL" | "C2H5OH" => Ok(Species::Ethanol),
            "METHANOL" | "CH3OH" => Ok(Species::Methanol),
            "PROPANE" | "N-PROPANE" | "C3H8" => Ok(Species::Propane),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "HE" | "HELIUM" => Ok(Species::He),
            "H2O" | "WATER" => Ok(Species::H2O),
            "RP1" | "RP-1" | "KEROSENE" => Ok(Species::RP1),
            _ => Err(FluidError::UnknownFluid {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
