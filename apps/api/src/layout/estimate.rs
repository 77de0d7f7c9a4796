//! Page geometry and line-count estimation.
//!
//! The estimator is an intentional approximation: it prices blocks in text
//! lines using an average glyph width rather than exact font metrics. That is
//! enough to catch real overflow while tolerating borderline ambiguity; a
//! caller with exact rendered heights can supply them through the
//! `autofit::LineMeasurer` seam instead.

use serde::{Deserialize, Serialize};

use crate::fit::plan::{RenderPlan, SectionBlock, SectionContent};
use crate::fit::settings::FitSettings;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

const POINTS_PER_INCH: f32 = 72.0;

/// Average glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.50;

/// Physical page description. Capacity in lines and characters is a function
/// of the *current* fit settings, so compression steps that shrink the font or
/// line height genuinely buy back room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_in: f32,
}

impl Default for PageGeometry {
    /// US letter (8.5" × 11") with 1" margins all around.
    fn default() -> Self {
        PageGeometry {
            page_width_pt: 612.0,
            page_height_pt: 792.0,
            margin_in: 1.0,
        }
    }
}

impl PageGeometry {
    fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_in * POINTS_PER_INCH
    }

    fn text_height_pt(&self) -> f32 {
        self.page_height_pt - 2.0 * self.margin_in * POINTS_PER_INCH
    }

    /// Text lines available on one page at the given font size and line height.
    pub fn line_capacity(&self, settings: &FitSettings) -> u16 {
        let line_pt = settings.base_font_size * settings.line_height;
        if line_pt <= 0.0 {
            return 0;
        }
        (self.text_height_pt() / line_pt).floor() as u16
    }

    /// Approximate characters that fit on one text line.
    pub fn chars_per_line(&self, settings: &FitSettings) -> usize {
        let glyph_pt = settings.base_font_size * AVG_GLYPH_EM;
        if glyph_pt <= 0.0 {
            return 0;
        }
        (self.text_width_pt() / glyph_pt).floor() as usize
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line estimation
// ────────────────────────────────────────────────────────────────────────────

/// Lines a text occupies when wrapped at `chars_per_line`. Empty text is free.
fn wrapped_lines(text: &str, chars_per_line: usize) -> u16 {
    let chars = text.chars().count();
    if chars == 0 || chars_per_line == 0 {
        return if chars == 0 { 0 } else { u16::MAX };
    }
    (chars.div_ceil(chars_per_line)).min(u16::MAX as usize) as u16
}

/// Estimated lines for one block, including its heading line.
fn block_lines(block: &SectionBlock, chars_per_line: usize) -> u16 {
    match &block.content {
        // Name, title, and contact each take a line.
        SectionContent::Header { .. } => 3,
        SectionContent::Summary { text } => 1u16.saturating_add(wrapped_lines(text, chars_per_line)),
        SectionContent::Skills { visible, overflow } => {
            let mut joined = visible.join(", ");
            if *overflow > 0 {
                joined.push_str(&format!(" +{overflow} more"));
            }
            1u16.saturating_add(wrapped_lines(&joined, chars_per_line))
        }
        // Entry header (role/company + dates) plus its bullets.
        SectionContent::Experience { entry } => entry
            .bullets
            .iter()
            .fold(2u16, |acc, b| acc.saturating_add(wrapped_lines(b, chars_per_line))),
        SectionContent::Certifications { items } => items
            .iter()
            .fold(1u16, |acc, c| acc.saturating_add(wrapped_lines(c, chars_per_line))),
        SectionContent::Education { entries } => 1u16.saturating_add(entries.len().min(u16::MAX as usize) as u16),
        SectionContent::Awards { items } => 1u16.saturating_add(items.len().min(u16::MAX as usize) as u16),
    }
}

/// Estimates the line count of the plan's primary page, including one blank
/// line between blocks.
pub fn estimate_plan_lines(plan: &RenderPlan, geometry: &PageGeometry) -> u16 {
    let chars_per_line = geometry.chars_per_line(&plan.settings);
    let page_one = plan.page_one();

    let content = page_one
        .iter()
        .fold(0u16, |acc, b| acc.saturating_add(block_lines(b, chars_per_line)));
    let gaps = page_one.len().saturating_sub(1).min(u16::MAX as usize) as u16;

    content.saturating_add(gaps)
}

// ────────────────────────────────────────────────────────────────────────────
// Fit verdict
// ────────────────────────────────────────────────────────────────────────────

/// Whether the primary page's estimated content fits its line capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum PageFit {
    Fits,
    Overflows { lines_over: u16 },
}

pub fn assess_page_fit(plan: &RenderPlan, geometry: &PageGeometry) -> PageFit {
    let used = estimate_plan_lines(plan, geometry);
    let capacity = geometry.line_capacity(&plan.settings);
    if used <= capacity {
        PageFit::Fits
    } else {
        PageFit::Overflows {
            lines_over: used - capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::plan::create_render_plan;
    use crate::fit::settings::TemplateId;
    use crate::fit::MAX_COMPRESSION_LEVEL;
    use crate::models::resume::{ExperienceEntry, StructuredResume};

    fn make_settings() -> FitSettings {
        TemplateId::Classic.default_settings()
    }

    fn make_resume(roles: usize) -> StructuredResume {
        StructuredResume {
            name: "Grace Hopper".to_string(),
            title: "Engineer".to_string(),
            summary: "Systems engineer focused on reliability and developer tooling. ".repeat(4),
            skills: (0..10).map(|i| format!("Skill {i}")).collect(),
            experience: (0..roles)
                .map(|i| ExperienceEntry {
                    role: format!("Role {i}"),
                    company: "Acme".to_string(),
                    date_range: "2020 – 2024".to_string(),
                    bullets: (0..4)
                        .map(|j| {
                            format!("Delivered outcome {j} across several teams and systems with measurable results")
                        })
                        .collect(),
                })
                .collect(),
            ..StructuredResume::default()
        }
    }

    #[test]
    fn test_default_geometry_capacity_sane() {
        let geometry = PageGeometry::default();
        let capacity = geometry.line_capacity(&make_settings());
        // 648pt of text height at 10.5pt × 1.4 ≈ 44 lines.
        assert!((40..=48).contains(&capacity), "capacity {capacity}");
        let cpl = geometry.chars_per_line(&make_settings());
        assert!((80..=100).contains(&cpl), "chars per line {cpl}");
    }

    #[test]
    fn test_smaller_font_buys_more_lines() {
        let geometry = PageGeometry::default();
        let base = make_settings();
        let compressed = FitSettings {
            base_font_size: 9.5,
            line_height: 1.25,
            ..base.clone()
        };
        assert!(geometry.line_capacity(&compressed) > geometry.line_capacity(&base));
    }

    #[test]
    fn test_wrapped_lines_boundaries() {
        assert_eq!(wrapped_lines("", 80), 0);
        assert_eq!(wrapped_lines("short", 80), 1);
        assert_eq!(wrapped_lines(&"x".repeat(80), 80), 1);
        assert_eq!(wrapped_lines(&"x".repeat(81), 80), 2);
    }

    #[test]
    fn test_empty_plan_estimate_is_header_only() {
        let geometry = PageGeometry::default();
        let plan = create_render_plan(&StructuredResume::default(), TemplateId::Classic, 0);
        assert_eq!(estimate_plan_lines(&plan, &geometry), 3);
    }

    #[test]
    fn test_estimate_non_increasing_in_compression_level() {
        let geometry = PageGeometry::default();
        let resume = make_resume(4);
        let mut prev = u16::MAX;
        for level in 0..=MAX_COMPRESSION_LEVEL {
            let plan = create_render_plan(&resume, TemplateId::Classic, level);
            let lines = estimate_plan_lines(&plan, &geometry);
            assert!(lines <= prev, "estimate grew at level {level}: {lines} > {prev}");
            prev = lines;
        }
    }

    #[test]
    fn test_dense_resume_overflows_sparse_fits() {
        let geometry = PageGeometry::default();

        let sparse = create_render_plan(&make_resume(1), TemplateId::Classic, 0);
        assert_eq!(assess_page_fit(&sparse, &geometry), PageFit::Fits);

        let dense = create_render_plan(&make_resume(12), TemplateId::Classic, 0);
        assert!(matches!(
            assess_page_fit(&dense, &geometry),
            PageFit::Overflows { lines_over } if lines_over > 0
        ));
    }
}
