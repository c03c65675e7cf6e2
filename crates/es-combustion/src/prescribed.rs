//! Combustion properties supplied up front.

use crate::error::{CombustionError, CombustionResult};
use crate::model::{CombustionProducts, CombustionRequest, CombustionSolver};
use tracing::debug;

/// Returns fixed products, e.g. gas properties already present in a design
/// document from an earlier CEA run.
#[derive(Debug, Clone, Default)]
pub struct PrescribedCombustion {
    products: Option<CombustionProducts>,
}

impl PrescribedCombustion {
    pub fn new(products: CombustionProducts) -> Self {
        Self {
            products: Some(products),
        }
    }

    /// A solver with nothing prescribed; every solve fails with `NotProvided`.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CombustionSolver for PrescribedCombustion {
    fn name(&self) -> &str {
        "prescribed"
    }

    fn solve(&self, request: &CombustionRequest) -> CombustionResult<CombustionProducts> {
        let products = self.products.ok_or(CombustionError::NotProvided {
            what: "gas properties and mass flows must be given when CEA is not run",
        })?;
        if products.gamma <= 1.0 || products.molar_mass <= 0.0 {
            return Err(CombustionError::InvalidRequest {
                what: format!(
                    "prescribed gamma {} / molar mass {} are not physical",
                    products.gamma, products.molar_mass
                ),
            });
        }
        debug!(mixture_ratio = request.mixture_ratio, "using prescribed combustion products");
        Ok(products)
    }
}
