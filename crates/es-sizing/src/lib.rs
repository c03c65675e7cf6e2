//! es-sizing: preliminary sizing of a liquid rocket engine.
//!
//! Three stages run in strict order, each taking a typed input record and
//! returning a typed output record:
//! - nozzle: exhaust velocity, expansion ratio, throat and chamber geometry
//! - injector: oxidizer orifice area and per-hole radius
//! - plumbing: feed-line Reynolds number, friction factor, pressure drop, velocity
//!
//! The closed-form formulas are generic over [`math::Real`], so the same
//! source evaluates in `f64`, `f32`, or element-wise over slices with
//! [`math::sweep`]. Nothing in this crate performs I/O; fluid properties come
//! through the `es_fluids::FluidModel` collaborator.
//!
//! # Example
//!
//! ```
//! use es_sizing::nozzle;
//!
//! let v = nozzle::exhaust_velocity(1.2_f64, 0.022, 3200.0, 20.0, 1.01325).unwrap();
//! let eps = nozzle::expansion_ratio(1.2_f64, 20.0, 1.01325).unwrap();
//! assert!(v > 2000.0 && eps > 1.0);
//! ```

pub mod error;
pub mod injector;
pub mod math;
pub mod nozzle;
pub mod plumbing;

pub use error::{SizingError, SizingResult, Stage};
pub use injector::{InjectorInput, InjectorOutput, oxidizer_inlet_state, size_injector};
pub use math::{Real, sweep};
pub use nozzle::{NozzleInput, NozzleOutput, size_nozzle};
pub use plumbing::{FeedLine, LineOutput, PlumbingInput, PlumbingOutput, size_plumbing};
