//! es-fluids: real-fluid property lookup for propellant feed calculations.
//!
//! Provides:
//! - Propellant species definitions with CoolProp and CEA names
//! - A validated `(species, T, P)` state
//! - `FluidModel` trait returning density and dynamic viscosity
//! - CoolProp backend (via `rfluids`) and a fixed-property backend
//!
//! # Example
//!
//! ```no_run
//! use es_fluids::{CoolPropModel, FluidModel, FluidState, Species};
//! use es_core::units::{bar, k};
//!
//! let model = CoolPropModel::new();
//! let state = FluidState::new(Species::O2, k(290.0), bar(25.0)).unwrap();
//! let props = model.transport(&state).unwrap();
//! println!("Density: {} kg/m³", props.density.value);
//! ```

pub mod coolprop;
pub mod error;
pub mod fixed;
pub mod model;
pub mod species;

pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use fixed::FixedFluidModel;
pub use model::{FluidModel, FluidProperties, FluidState};
pub use species::Species;
