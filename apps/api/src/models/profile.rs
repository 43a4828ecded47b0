//! Profile data model — the shared input to every extraction function.
//!
//! All list fields use `#[serde(default)]` so a payload that omits them still
//! deserializes to empty vectors. Consumers can iterate `experience`,
//! `education`, and `skills` without an absence check.

use serde::{Deserialize, Serialize};

/// A structured professional profile, produced either by the client directly,
/// by the LLM bulk parse, or by the third-party lookup mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub headline: String,
    pub location: Option<String>,
    pub about: Option<String>,
    pub photo_url: Option<String>,
    pub contact: Option<ContactBlock>,
    #[serde(default)]
    pub experience: Vec<RoleEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub certifications: Option<Vec<CertificationEntry>>,
    pub interests: Option<String>,
}

/// One role in the work history. `duration` is a pre-formatted display string
/// ("Jan 2019 – Present") — it is never parsed as a date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactBlock {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

impl ProfileRecord {
    /// Number of certifications, treating an absent list as zero.
    pub fn certification_count(&self) -> usize {
        self.certifications.as_ref().map(Vec::len).unwrap_or(0)
    }
}
