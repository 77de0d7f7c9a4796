// Resume fit & compression engine.
// Pure, synchronous, and total: every function is defined for all inputs,
// never fails, and never mutates its arguments.

pub mod constraints;
pub mod ladder;
pub mod plan;
pub mod policy;
pub mod settings;
pub mod trim;

// Re-export the public API consumed by the layout driver and route handlers.
pub use constraints::apply_fit_constraints;
pub use ladder::{apply_compression_step, MAX_COMPRESSION_LEVEL};
pub use plan::{create_render_plan, RenderPlan, SectionBlock, SectionContent};
pub use settings::{initial_fit_settings, FitSettings, TemplateId};
