//! Boundary errors for the import side.
//!
//! The extraction pipeline itself never fails — these errors exist only
//! where a caller asked for a concrete artifact (a palette) and there is
//! nothing to build it from, or handed over JSON that is not a palette
//! document at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The stylesheet contained no recognizable colors.
    #[error("no colors found in CSS input")]
    NoColorsFound,

    /// The JSON document failed to parse at all.
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed but is not a top-level array of palettes.
    #[error("invalid palette JSON: expected a top-level array")]
    NotAPaletteArray,
}
