//! es-core: shared foundation for engine sizing.
//!
//! Contains:
//! - units (uom SI types, constructors, and the bar / line-size conventions)
//! - numeric (Real + tolerances + guarded float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
