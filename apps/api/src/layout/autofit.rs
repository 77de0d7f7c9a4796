//! Autofit driver — the measure/compress loop made explicit.
//!
//! # Architecture
//! - `LineMeasurer` is the seam for the measurement collaborator. The default
//!   `EstimatingMeasurer` prices the plan with the static estimator; a caller
//!   that knows real rendered heights can substitute its own.
//! - `AutofitState` models the loop as a state machine (measuring →
//!   compressing → measuring → … → settled) rather than an implicit re-render
//!   trigger, so each transition is testable in isolation.
//! - The loop is bounded by the ladder length: once compression is exhausted
//!   the driver settles by growing the page count instead of compressing
//!   further. Every pass is deterministic and side-effect-free, so re-running
//!   the driver with the same inputs reproduces the same outcome.

use serde::Serialize;
use tracing::{debug, warn};

use crate::fit::plan::{create_render_plan, RenderPlan};
use crate::fit::settings::TemplateId;
use crate::fit::MAX_COMPRESSION_LEVEL;
use crate::layout::estimate::{estimate_plan_lines, PageGeometry};
use crate::models::resume::StructuredResume;

// ────────────────────────────────────────────────────────────────────────────
// Measurement seam
// ────────────────────────────────────────────────────────────────────────────

/// Measures how many text lines a plan's primary page occupies.
pub trait LineMeasurer {
    fn measure(&self, plan: &RenderPlan) -> u16;
}

/// Default measurer backed by the static line estimator.
pub struct EstimatingMeasurer<'a> {
    pub geometry: &'a PageGeometry,
}

impl LineMeasurer for EstimatingMeasurer<'_> {
    fn measure(&self, plan: &RenderPlan) -> u16 {
        estimate_plan_lines(plan, self.geometry)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// State machine
// ────────────────────────────────────────────────────────────────────────────

/// One state of the measure/compress loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofitState {
    /// A plan at `level` has been built and is awaiting measurement.
    Measuring { level: usize },
    /// The measurement overflowed; the next plan will be built at `level`.
    Compressing { level: usize },
    /// The loop has finished, either because a level fit or because the
    /// ladder was exhausted and the page count grew.
    Settled { level: usize, page_count: u8 },
}

impl AutofitState {
    pub fn start() -> Self {
        AutofitState::Measuring { level: 0 }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, AutofitState::Settled { .. })
    }
}

/// Advances the state machine after one measurement.
///
/// `fits` is the measurement verdict for the current level; `page_count` is
/// the plan's own page count (2 when it already carries overflow blocks).
fn advance(state: AutofitState, fits: bool, page_count: u8) -> AutofitState {
    match state {
        AutofitState::Measuring { level } => {
            if fits {
                AutofitState::Settled { level, page_count }
            } else if level >= MAX_COMPRESSION_LEVEL {
                // Ladder exhausted — the caller's only remaining move is more pages.
                AutofitState::Settled {
                    level,
                    page_count: page_count.max(2),
                }
            } else {
                AutofitState::Compressing { level: level + 1 }
            }
        }
        AutofitState::Compressing { level } => AutofitState::Measuring { level },
        settled @ AutofitState::Settled { .. } => settled,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Driver
// ────────────────────────────────────────────────────────────────────────────

/// Result of a complete autofit run.
#[derive(Debug, Clone, Serialize)]
pub struct AutofitOutcome {
    /// The settled compression level.
    pub compression_level: usize,
    /// Pages the settled plan needs (2 when the primary page never fit).
    pub page_count: u8,
    /// Number of measurement passes performed.
    pub passes: u8,
    /// True when the primary page's content fit within a single page budget.
    pub fits_single_page: bool,
    /// The plan at the settled level.
    pub plan: RenderPlan,
}

/// Walks the compression ladder until the plan fits or compression runs out.
pub fn run_autofit(
    resume: &StructuredResume,
    template: TemplateId,
    measurer: &dyn LineMeasurer,
    geometry: &PageGeometry,
) -> AutofitOutcome {
    let mut state = AutofitState::start();
    let mut passes = 0u8;
    let mut fits_single_page = false;
    let mut settled_plan: Option<RenderPlan> = None;

    while !state.is_settled() {
        match state {
            AutofitState::Measuring { level } => {
                let plan = create_render_plan(resume, template, level);
                let used = measurer.measure(&plan);
                let capacity = geometry.line_capacity(&plan.settings);
                let fits = used <= capacity;
                passes = passes.saturating_add(1);

                debug!(level, used, capacity, fits, "autofit pass");

                state = advance(state, fits, plan.page_count);
                if state.is_settled() {
                    fits_single_page = fits;
                    settled_plan = Some(plan);
                }
            }
            AutofitState::Compressing { .. } => {
                state = advance(state, false, 1);
            }
            AutofitState::Settled { .. } => unreachable!("loop exits on settled"),
        }
    }

    let (compression_level, page_count) = match state {
        AutofitState::Settled { level, page_count } => (level, page_count),
        _ => unreachable!(),
    };

    if !fits_single_page {
        warn!(
            compression_level,
            page_count, "compression exhausted without fitting a single page"
        );
    }

    AutofitOutcome {
        compression_level,
        page_count,
        passes,
        fits_single_page,
        // The plan for the settled level is always recorded before settling.
        plan: settled_plan
            .unwrap_or_else(|| create_render_plan(resume, template, compression_level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    /// Measurer returning a fixed script of line counts, one per pass.
    struct ScriptedMeasurer {
        script: Vec<u16>,
        calls: std::cell::Cell<usize>,
    }

    impl ScriptedMeasurer {
        fn new(script: Vec<u16>) -> Self {
            ScriptedMeasurer {
                script,
                calls: std::cell::Cell::new(0),
            }
        }
    }

    impl LineMeasurer for ScriptedMeasurer {
        fn measure(&self, _plan: &RenderPlan) -> u16 {
            let i = self.calls.get();
            self.calls.set(i + 1);
            *self.script.get(i).unwrap_or(&u16::MAX)
        }
    }

    fn make_resume(roles: usize) -> StructuredResume {
        StructuredResume {
            name: "Grace Hopper".to_string(),
            summary: "Engineer and educator.".to_string(),
            experience: (0..roles)
                .map(|_| ExperienceEntry {
                    role: "Engineer".to_string(),
                    bullets: vec!["Shipped things worth shipping".to_string()],
                    ..ExperienceEntry::default()
                })
                .collect(),
            ..StructuredResume::default()
        }
    }

    // ── state transitions ───────────────────────────────────────────────────

    #[test]
    fn test_fit_settles_at_current_level() {
        let state = advance(AutofitState::Measuring { level: 2 }, true, 1);
        assert_eq!(state, AutofitState::Settled { level: 2, page_count: 1 });
    }

    #[test]
    fn test_overflow_moves_to_compressing_next_level() {
        let state = advance(AutofitState::Measuring { level: 0 }, false, 1);
        assert_eq!(state, AutofitState::Compressing { level: 1 });
    }

    #[test]
    fn test_exhausted_ladder_settles_with_grown_page_count() {
        let state = advance(
            AutofitState::Measuring { level: MAX_COMPRESSION_LEVEL },
            false,
            1,
        );
        assert_eq!(
            state,
            AutofitState::Settled { level: MAX_COMPRESSION_LEVEL, page_count: 2 }
        );
    }

    #[test]
    fn test_settled_is_terminal() {
        let settled = AutofitState::Settled { level: 3, page_count: 1 };
        assert_eq!(advance(settled, false, 1), settled);
    }

    // ── driver ──────────────────────────────────────────────────────────────

    #[test]
    fn test_fits_immediately_settles_at_level_zero() {
        let geometry = PageGeometry::default();
        let measurer = ScriptedMeasurer::new(vec![10]);
        let outcome = run_autofit(&make_resume(2), TemplateId::Classic, &measurer, &geometry);

        assert_eq!(outcome.compression_level, 0);
        assert_eq!(outcome.passes, 1);
        assert!(outcome.fits_single_page);
        assert_eq!(outcome.page_count, 1);
    }

    #[test]
    fn test_settles_at_first_fitting_level() {
        let geometry = PageGeometry::default();
        // Overflow twice, then fit at level 2.
        let measurer = ScriptedMeasurer::new(vec![900, 900, 10]);
        let outcome = run_autofit(&make_resume(2), TemplateId::Classic, &measurer, &geometry);

        assert_eq!(outcome.compression_level, 2);
        assert_eq!(outcome.passes, 3);
        assert!(outcome.fits_single_page);
        assert_eq!(outcome.plan.compression_level, 2);
    }

    #[test]
    fn test_never_fits_grows_page_count() {
        let geometry = PageGeometry::default();
        let measurer = ScriptedMeasurer::new(vec![u16::MAX; MAX_COMPRESSION_LEVEL + 1]);
        let outcome = run_autofit(&make_resume(2), TemplateId::Classic, &measurer, &geometry);

        assert_eq!(outcome.compression_level, MAX_COMPRESSION_LEVEL);
        assert_eq!(outcome.passes, (MAX_COMPRESSION_LEVEL + 1) as u8);
        assert!(!outcome.fits_single_page);
        assert_eq!(outcome.page_count, 2);
    }

    #[test]
    fn test_estimating_measurer_deterministic_end_to_end() {
        let geometry = PageGeometry::default();
        let measurer = EstimatingMeasurer { geometry: &geometry };
        let resume = make_resume(3);

        let a = run_autofit(&resume, TemplateId::Classic, &measurer, &geometry);
        let b = run_autofit(&resume, TemplateId::Classic, &measurer, &geometry);

        assert_eq!(a.compression_level, b.compression_level);
        assert_eq!(a.page_count, b.page_count);
        assert_eq!(a.plan, b.plan);
        // A 3-role resume with one short bullet each comfortably fits.
        assert!(a.fits_single_page);
        assert_eq!(a.compression_level, 0);
    }
}
