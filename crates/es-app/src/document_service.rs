//! Design document loading and validation.

use std::path::Path;

use es_project::DesignDocument;

use crate::error::AppResult;

/// Load and validate a design document (YAML, or JSON by extension).
pub fn load_document(path: &Path) -> AppResult<DesignDocument> {
    Ok(es_project::load(path)?)
}

/// Re-validate a document held in memory.
pub fn validate_document(doc: &DesignDocument) -> AppResult<()> {
    es_project::validate_document(doc)
        .map_err(|e| crate::error::AppError::Validation(e.to_string()))
}

/// Whether the document carries everything needed to run without CEA.
pub fn has_prescribed_products(doc: &DesignDocument) -> bool {
    let e = &doc.engine;
    [
        e.exhaust_gamma,
        e.exhaust_molar_mass,
        e.chamber_temp,
        e.fuel_mass_flow,
        e.ox_mass_flow,
    ]
    .iter()
    .all(Option::is_some)
}
