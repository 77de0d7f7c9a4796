//! Render plan builder — projects a resume plus its fit settings into an
//! ordered, prioritized list of content blocks partitioned across pages.
//!
//! Blocks with priority below `PAGE_BREAK_PRIORITY` belong to the primary page;
//! anything at or above it lands on the overflow page. The plan is a pure read
//! model: the same `(resume, template, level)` triple always produces an
//! identical plan, so callers may rebuild it on every re-render.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::fit::ladder::apply_compression_step;
use crate::fit::policy::bullets_per_role;
use crate::fit::settings::{initial_fit_settings, FitSettings, TemplateId};
use crate::fit::trim::{display_skills, trim_to_char_limit, trim_to_word_limit};
use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, StructuredResume};

// ────────────────────────────────────────────────────────────────────────────
// Priorities
// ────────────────────────────────────────────────────────────────────────────

/// Blocks at or above this priority render on the overflow page.
pub const PAGE_BREAK_PRIORITY: u8 = 10;

const PRIORITY_HEADER: u8 = 0;
const PRIORITY_EXPERIENCE: u8 = 1;
const PRIORITY_SUMMARY: u8 = 2;
const PRIORITY_SKILLS: u8 = 3;
const PRIORITY_CERTIFICATIONS: u8 = 4;
const PRIORITY_EDUCATION: u8 = 5;
const PRIORITY_AWARDS: u8 = 6;
const PRIORITY_CERT_OVERFLOW: u8 = 14;

/// Role count at which certifications beyond the first are pushed to the
/// overflow page.
const CERT_OVERFLOW_ROLE_THRESHOLD: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Plan types
// ────────────────────────────────────────────────────────────────────────────

/// Typed content of a single section block, already trimmed to the plan's
/// settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Header {
        name: String,
        title: String,
        contact: ContactInfo,
    },
    Summary {
        text: String,
    },
    Skills {
        visible: Vec<String>,
        overflow: usize,
    },
    Experience {
        entry: ExperienceEntry,
    },
    Certifications {
        items: Vec<String>,
    },
    Education {
        entries: Vec<EducationEntry>,
    },
    Awards {
        items: Vec<String>,
    },
}

/// One content block with its page-assignment priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub priority: u8,
    pub content: SectionContent,
}

impl SectionBlock {
    pub fn is_overflow(&self) -> bool {
        self.priority >= PAGE_BREAK_PRIORITY
    }
}

/// The derived, paginated projection of a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub template: TemplateId,
    pub compression_level: usize,
    pub settings: FitSettings,
    pub blocks: Vec<SectionBlock>,
    pub page_count: u8,
}

impl RenderPlan {
    /// Blocks assigned to the primary page, in order.
    pub fn page_one(&self) -> Vec<&SectionBlock> {
        self.blocks.iter().filter(|b| !b.is_overflow()).collect()
    }

    /// Blocks pushed to the overflow page, in order.
    pub fn overflow(&self) -> Vec<&SectionBlock> {
        self.blocks.iter().filter(|b| b.is_overflow()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Builds the render plan for a resume at the given compression level.
///
/// Empty sections emit no block; the header is always present.
pub fn create_render_plan(
    resume: &StructuredResume,
    template: TemplateId,
    compression_level: usize,
) -> RenderPlan {
    let settings = apply_compression_step(
        &initial_fit_settings(resume, template),
        compression_level,
    );
    let role_count = resume.role_count();
    let bullet_cap = settings.max_bullets_per_role.min(bullets_per_role(role_count));

    let mut blocks = Vec::new();

    blocks.push(SectionBlock {
        priority: PRIORITY_HEADER,
        content: SectionContent::Header {
            name: resume.name.clone(),
            title: resume.title.clone(),
            contact: resume.contact.clone(),
        },
    });

    for entry in &resume.experience {
        let bullets = entry
            .bullets
            .iter()
            .take(bullet_cap)
            .map(|b| trim_to_word_limit(b, settings.bullet_max_words))
            .collect();
        blocks.push(SectionBlock {
            priority: PRIORITY_EXPERIENCE,
            content: SectionContent::Experience {
                entry: ExperienceEntry {
                    role: entry.role.clone(),
                    company: entry.company.clone(),
                    date_range: entry.date_range.clone(),
                    bullets,
                },
            },
        });
    }

    let summary = trim_to_word_limit(&resume.summary, settings.summary_max_words);
    if !summary.is_empty() {
        blocks.push(SectionBlock {
            priority: PRIORITY_SUMMARY,
            content: SectionContent::Summary { text: summary },
        });
    }

    if !resume.skills.is_empty() {
        let shown = display_skills(&resume.skills, settings.max_skills_shown);
        blocks.push(SectionBlock {
            priority: PRIORITY_SKILLS,
            content: SectionContent::Skills {
                visible: shown.visible,
                overflow: shown.overflow,
            },
        });
    }

    if !resume.certifications.is_empty() {
        let trimmed: Vec<String> = resume
            .certifications
            .iter()
            .map(|c| trim_to_char_limit(c, settings.cert_max_chars))
            .collect();

        // Long resumes keep only the first certification on the primary page.
        if role_count >= CERT_OVERFLOW_ROLE_THRESHOLD && trimmed.len() > 1 {
            blocks.push(SectionBlock {
                priority: PRIORITY_CERTIFICATIONS,
                content: SectionContent::Certifications {
                    items: trimmed[..1].to_vec(),
                },
            });
            blocks.push(SectionBlock {
                priority: PRIORITY_CERT_OVERFLOW,
                content: SectionContent::Certifications {
                    items: trimmed[1..].to_vec(),
                },
            });
        } else {
            blocks.push(SectionBlock {
                priority: PRIORITY_CERTIFICATIONS,
                content: SectionContent::Certifications { items: trimmed },
            });
        }
    }

    if !resume.education.is_empty() {
        blocks.push(SectionBlock {
            priority: PRIORITY_EDUCATION,
            content: SectionContent::Education {
                entries: resume.education.clone(),
            },
        });
    }

    if !resume.awards.is_empty() {
        blocks.push(SectionBlock {
            priority: PRIORITY_AWARDS,
            content: SectionContent::Awards {
                items: resume.awards.clone(),
            },
        });
    }

    let page_count = if blocks.iter().any(SectionBlock::is_overflow) {
        2
    } else {
        1
    };

    RenderPlan {
        template,
        compression_level,
        settings,
        blocks,
        page_count,
    }
}
