//! Role-count-driven budget policies.
//!
//! Total vertical space on a page is roughly fixed, so per-role and summary
//! budgets shrink as the number of roles grows. `bullets_per_role` is the
//! authoritative ceiling — any `FitSettings.max_bullets_per_role` is combined
//! with it via `min` before use, so settings can only tighten it.

/// Bullet budget per experience entry as a step function of role count.
pub fn bullets_per_role(role_count: usize) -> usize {
    match role_count {
        0..=3 => 4,
        4 => 3,
        5 => 2,
        _ => 1,
    }
}

/// Word budget for the summary. Longer resumes get a shorter summary.
pub fn summary_word_budget(role_count: usize) -> usize {
    if role_count >= 5 {
        55
    } else {
        75
    }
}

/// Skill cap. Certifications compete for the same column space, so their
/// presence tightens the cap to at most 8.
pub fn skills_budget(has_certifications: bool, base_max: usize) -> usize {
    if has_certifications {
        base_max.min(8)
    } else {
        base_max
    }
}
