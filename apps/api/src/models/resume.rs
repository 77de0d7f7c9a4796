//! Structured resume data model.
//!
//! Deserialization is deliberately lenient: every field carries a default, so a
//! payload missing any subset of fields coerces to empty strings/collections
//! instead of being rejected. Entry ordering is insertion order and is display
//! order; entries have no identity beyond their position.

use serde::{Deserialize, Serialize};

/// Contact block rendered in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

/// A single position held, with its achievement bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub date_range: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub date_range: String,
}

/// The full resume document as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    pub name: String,
    pub title: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub awards: Vec<String>,
}

impl StructuredResume {
    /// Number of experience entries — the driver for every role-count policy.
    pub fn role_count(&self) -> usize {
        self.experience.len()
    }

    pub fn has_certifications(&self) -> bool {
        !self.certifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let resume: StructuredResume = serde_json::from_str(r#"{"name": "Ada Lovelace"}"#)
            .expect("partial payload must deserialize");
        assert_eq!(resume.name, "Ada Lovelace");
        assert!(resume.summary.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.certifications.is_empty());
        assert_eq!(resume.role_count(), 0);
        assert!(!resume.has_certifications());
    }

    #[test]
    fn test_empty_object_deserializes() {
        let resume: StructuredResume = serde_json::from_str("{}").expect("empty object is valid");
        assert_eq!(resume, StructuredResume::default());
    }

    #[test]
    fn test_experience_entry_missing_bullets() {
        let entry: ExperienceEntry =
            serde_json::from_str(r#"{"role": "Engineer", "company": "Acme"}"#).unwrap();
        assert_eq!(entry.role, "Engineer");
        assert!(entry.bullets.is_empty());
        assert!(entry.date_range.is_empty());
    }

    #[test]
    fn test_role_count_tracks_experience_length() {
        let mut resume = StructuredResume::default();
        assert_eq!(resume.role_count(), 0);
        resume.experience.push(ExperienceEntry::default());
        resume.experience.push(ExperienceEntry::default());
        assert_eq!(resume.role_count(), 2);
    }
}
