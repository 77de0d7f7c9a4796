//! Fit-constraint applicator — shrinks a resume's text and lists to a budget.
//!
//! Contract: produce a new resume whose bullets, summary, and certifications
//! respect the given `FitSettings`; everything else (skills, education, awards,
//! contact) passes through unchanged. The input is never mutated, and applying
//! the same budget twice yields the same result as applying it once.

use crate::fit::policy::bullets_per_role;
use crate::fit::settings::FitSettings;
use crate::fit::trim::{trim_to_char_limit, trim_to_word_limit};
use crate::models::resume::StructuredResume;

/// Returns a copy of `resume` reduced to the budget in `settings`.
pub fn apply_fit_constraints(resume: &StructuredResume, settings: &FitSettings) -> StructuredResume {
    let bullet_cap = settings
        .max_bullets_per_role
        .min(bullets_per_role(resume.role_count()));

    let mut out = resume.clone();

    for entry in &mut out.experience {
        entry.bullets.truncate(bullet_cap);
        for bullet in &mut entry.bullets {
            *bullet = trim_to_word_limit(bullet, settings.bullet_max_words);
        }
    }

    out.summary = trim_to_word_limit(&out.summary, settings.summary_max_words);

    for cert in &mut out.certifications {
        *cert = trim_to_char_limit(cert, settings.cert_max_chars);
    }

    out
}
