//! Compression ladder — the ordered sequence of budget-tightening steps.
//!
//! Each step is a partial override folded cumulatively into a `FitSettings`
//! copy by taking the field-wise minimum, so every numeric field is
//! monotonically non-increasing in the compression level and reapplying a level
//! to its own output is a no-op. The ordering runs from least to most visually
//! disruptive: hide trailing skills and shorten text first, drop whole bullets
//! and shrink the font only at the end.

use crate::fit::settings::FitSettings;

/// A partial `FitSettings` override. `None` leaves the field untouched.
#[derive(Debug, Clone, Copy)]
pub struct CompressionStep {
    pub max_skills_shown: Option<usize>,
    pub max_bullets_per_role: Option<usize>,
    pub bullet_max_words: Option<usize>,
    pub summary_max_words: Option<usize>,
    pub line_height: Option<f32>,
    pub base_font_size: Option<f32>,
    pub cert_max_chars: Option<usize>,
}

const UNCHANGED: CompressionStep = CompressionStep {
    max_skills_shown: None,
    max_bullets_per_role: None,
    bullet_max_words: None,
    summary_max_words: None,
    line_height: None,
    base_font_size: None,
    cert_max_chars: None,
};

/// The fixed ladder. Index = 0-based step; level N folds steps `[0, N)`.
const COMPRESSION_LADDER: [CompressionStep; 6] = [
    // 1. Hide trailing skills, tighten certification text.
    CompressionStep {
        max_skills_shown: Some(8),
        cert_max_chars: Some(64),
        ..UNCHANGED
    },
    // 2. Shorter bullets.
    CompressionStep {
        bullet_max_words: Some(18),
        ..UNCHANGED
    },
    // 3. Shorter summary.
    CompressionStep {
        summary_max_words: Some(55),
        ..UNCHANGED
    },
    // 4. Second round of skill/word/cert tightening.
    CompressionStep {
        max_skills_shown: Some(6),
        bullet_max_words: Some(14),
        cert_max_chars: Some(48),
        ..UNCHANGED
    },
    // 5. Start losing whole bullets.
    CompressionStep {
        max_bullets_per_role: Some(3),
        summary_max_words: Some(40),
        ..UNCHANGED
    },
    // 6. Last resort: fewer bullets still, smaller type.
    CompressionStep {
        max_bullets_per_role: Some(2),
        line_height: Some(1.25),
        base_font_size: Some(9.5),
        ..UNCHANGED
    },
];

/// Number of defined steps; the highest meaningful compression level.
pub const MAX_COMPRESSION_LEVEL: usize = COMPRESSION_LADDER.len();

/// Folds ladder steps `[0, level)` into a copy of `settings`.
///
/// Level 0 is the identity; levels above `MAX_COMPRESSION_LEVEL` clamp to it,
/// so requesting more compression than exists is a no-op rather than an error.
pub fn apply_compression_step(settings: &FitSettings, level: usize) -> FitSettings {
    let clamped = level.min(MAX_COMPRESSION_LEVEL);
    let mut out = settings.clone();

    for step in &COMPRESSION_LADDER[..clamped] {
        if let Some(v) = step.max_skills_shown {
            out.max_skills_shown = out.max_skills_shown.min(v);
        }
        if let Some(v) = step.max_bullets_per_role {
            out.max_bullets_per_role = out.max_bullets_per_role.min(v);
        }
        if let Some(v) = step.bullet_max_words {
            out.bullet_max_words = out.bullet_max_words.min(v);
        }
        if let Some(v) = step.summary_max_words {
            out.summary_max_words = out.summary_max_words.min(v);
        }
        if let Some(v) = step.line_height {
            out.line_height = out.line_height.min(v);
        }
        if let Some(v) = step.base_font_size {
            out.base_font_size = out.base_font_size.min(v);
        }
        if let Some(v) = step.cert_max_chars {
            out.cert_max_chars = out.cert_max_chars.min(v);
        }
    }

    out
}
