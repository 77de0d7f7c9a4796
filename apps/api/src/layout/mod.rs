// Layout measurement and the autofit loop.
// The estimator prices content in text lines; the driver walks the
// compression ladder until the primary page fits or the ladder runs out.

pub mod autofit;
pub mod estimate;

// Re-export the public API consumed by route handlers.
pub use autofit::{run_autofit, AutofitOutcome, EstimatingMeasurer, LineMeasurer};
pub use estimate::{assess_page_fit, estimate_plan_lines, PageFit, PageGeometry};
