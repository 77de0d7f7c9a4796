//! Fit settings — the numeric content budget applied to a resume for layout.
//!
//! A `FitSettings` value is never mutated in place: the level-0 value comes from
//! `initial_fit_settings`, and tighter values are produced by folding the
//! compression ladder over a copy (`ladder::apply_compression_step`). Template
//! defaults are explicit per-template values, not shared module state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fit::policy::{bullets_per_role, skills_budget, summary_word_budget};
use crate::models::resume::StructuredResume;

// ────────────────────────────────────────────────────────────────────────────
// FitSettings
// ────────────────────────────────────────────────────────────────────────────

/// The current layout budget for a resume.
///
/// Numeric fields only ever shrink as the compression level increases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSettings {
    /// Cap on visible skill entries; hidden entries surface as an overflow count.
    pub max_skills_shown: usize,
    /// Cap on bullets per experience entry. Combined with the role-count policy
    /// ceiling via `min` at every use site — it can tighten, never loosen.
    pub max_bullets_per_role: usize,
    /// Word cap applied to each retained bullet.
    pub bullet_max_words: usize,
    /// Word cap applied to the summary.
    pub summary_max_words: usize,
    /// Line height multiplier.
    pub line_height: f32,
    /// Body font size in points.
    pub base_font_size: f32,
    /// Character cap per certification entry.
    pub cert_max_chars: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// The five resume templates, each carrying its own default budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Balanced single-column layout.
    #[default]
    Classic,
    /// Airier spacing, slightly shorter bullets.
    Modern,
    /// Tight spacing and smaller type for dense resumes.
    Compact,
    /// Larger type, generous certification space, fewer skills.
    Executive,
    /// Sparse layout with hard caps on everything.
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Compact,
        TemplateId::Executive,
        TemplateId::Minimal,
    ];

    /// The template's default budget — the starting point before role-count
    /// policies and the compression ladder tighten it.
    pub fn default_settings(self) -> FitSettings {
        match self {
            TemplateId::Classic => FitSettings {
                max_skills_shown: 10,
                max_bullets_per_role: 4,
                bullet_max_words: 24,
                summary_max_words: 75,
                line_height: 1.40,
                base_font_size: 10.5,
                cert_max_chars: 72,
            },
            TemplateId::Modern => FitSettings {
                max_skills_shown: 10,
                max_bullets_per_role: 4,
                bullet_max_words: 22,
                summary_max_words: 75,
                line_height: 1.45,
                base_font_size: 10.5,
                cert_max_chars: 72,
            },
            TemplateId::Compact => FitSettings {
                max_skills_shown: 12,
                max_bullets_per_role: 4,
                bullet_max_words: 20,
                summary_max_words: 65,
                line_height: 1.30,
                base_font_size: 10.0,
                cert_max_chars: 64,
            },
            TemplateId::Executive => FitSettings {
                max_skills_shown: 8,
                max_bullets_per_role: 4,
                bullet_max_words: 26,
                summary_max_words: 85,
                line_height: 1.40,
                base_font_size: 11.0,
                cert_max_chars: 80,
            },
            TemplateId::Minimal => FitSettings {
                max_skills_shown: 8,
                max_bullets_per_role: 3,
                bullet_max_words: 18,
                summary_max_words: 60,
                line_height: 1.35,
                base_font_size: 10.0,
                cert_max_chars: 56,
            },
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Compact => "compact",
            TemplateId::Executive => "executive",
            TemplateId::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "compact" => Ok(TemplateId::Compact),
            "executive" => Ok(TemplateId::Executive),
            "minimal" => Ok(TemplateId::Minimal),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Level-0 derivation
// ────────────────────────────────────────────────────────────────────────────

/// Derives the level-0 `FitSettings` for a resume on the given template.
///
/// Starts from the template defaults and folds in the role-count policies via
/// `min`, so a policy can tighten a template budget but never loosen one.
pub fn initial_fit_settings(resume: &StructuredResume, template: TemplateId) -> FitSettings {
    let defaults = template.default_settings();
    let role_count = resume.role_count();

    FitSettings {
        max_skills_shown: skills_budget(resume.has_certifications(), defaults.max_skills_shown),
        max_bullets_per_role: defaults.max_bullets_per_role.min(bullets_per_role(role_count)),
        summary_max_words: defaults.summary_max_words.min(summary_word_budget(role_count)),
        ..defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    fn resume_with(roles: usize, certs: usize) -> StructuredResume {
        StructuredResume {
            experience: (0..roles).map(|_| ExperienceEntry::default()).collect(),
            certifications: (0..certs).map(|i| format!("Cert {i}")).collect(),
            ..StructuredResume::default()
        }
    }

    #[test]
    fn test_initial_settings_short_resume_keeps_template_defaults() {
        let settings = initial_fit_settings(&resume_with(2, 0), TemplateId::Classic);
        assert_eq!(settings, TemplateId::Classic.default_settings());
    }

    #[test]
    fn test_initial_settings_many_roles_tighten_bullets_and_summary() {
        let settings = initial_fit_settings(&resume_with(6, 0), TemplateId::Classic);
        assert_eq!(settings.max_bullets_per_role, 1);
        assert_eq!(settings.summary_max_words, 55);
    }

    #[test]
    fn test_initial_settings_certifications_tighten_skills() {
        let settings = initial_fit_settings(&resume_with(2, 3), TemplateId::Classic);
        assert_eq!(settings.max_skills_shown, 8);
    }

    #[test]
    fn test_initial_settings_policies_never_loosen_template() {
        // Minimal already caps bullets at 3; a 2-role resume's policy ceiling
        // of 4 must not raise it.
        let settings = initial_fit_settings(&resume_with(2, 0), TemplateId::Minimal);
        assert_eq!(settings.max_bullets_per_role, 3);
        // Compact's 65-word summary stays below the 75-word policy.
        let settings = initial_fit_settings(&resume_with(2, 0), TemplateId::Compact);
        assert_eq!(settings.summary_max_words, 65);
    }

    #[test]
    fn test_template_round_trips_through_from_str() {
        for template in TemplateId::ALL {
            let parsed: TemplateId = template.to_string().parse().unwrap();
            assert_eq!(parsed, template);
        }
        assert!("letterhead".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_all_templates_have_positive_budgets() {
        for template in TemplateId::ALL {
            let s = template.default_settings();
            assert!(s.max_skills_shown > 0);
            assert!(s.max_bullets_per_role > 0);
            assert!(s.bullet_max_words > 0);
            assert!(s.summary_max_words > 0);
            assert!(s.line_height > 1.0);
            assert!(s.base_font_size > 8.0);
            assert!(s.cert_max_chars > 0);
        }
    }
}
