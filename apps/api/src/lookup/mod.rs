//! Third-party profile lookup — fetches a public profile by handle and maps
//! the provider's response shape onto `ProfileRecord`.
//!
//! `ProfileSource` is the seam: `AppState` holds an `Arc<dyn ProfileSource>`,
//! so a different provider (or a test stub) only has to implement `fetch`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::profile::{
    CertificationEntry, ContactBlock, EducationEntry, ProfileRecord, RoleEntry,
};

/// Pluggable source of materialized profile records.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, handle: &str) -> Result<ProfileRecord, AppError>;
}

/// Reqwest-backed client for the hosted profile-lookup API.
#[derive(Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LookupClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ProfileSource for LookupClient {
    async fn fetch(&self, handle: &str) -> Result<ProfileRecord, AppError> {
        let url = format!("{}/v1/person", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("handle", handle)])
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Lookup(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Lookup(format!(
                "upstream returned {status}: {body}"
            )));
        }

        let payload: LookupResponse = response
            .json()
            .await
            .map_err(|e| AppError::Lookup(format!("malformed upstream response: {e}")))?;

        debug!("Fetched profile for handle '{handle}'");
        Ok(into_profile(payload))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Upstream response shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LookupResponse {
    full_name: String,
    #[serde(default)]
    headline: String,
    location: Option<String>,
    summary: Option<String>,
    photo_url: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    linkedin_handle: Option<String>,
    #[serde(default)]
    experiences: Vec<LookupExperience>,
    #[serde(default)]
    education: Vec<LookupEducation>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    certifications: Vec<LookupCertification>,
    interests: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupExperience {
    title: String,
    company: String,
    #[serde(default)]
    date_range: String,
    location: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupEducation {
    school: String,
    degree: Option<String>,
    date_range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupCertification {
    name: String,
    authority: Option<String>,
}

/// Maps the upstream shape into the service's `ProfileRecord`. The contact
/// block is only materialized when at least one contact field is present.
fn into_profile(payload: LookupResponse) -> ProfileRecord {
    let contact = if payload.email.is_some()
        || payload.phone.is_some()
        || payload.website.is_some()
        || payload.linkedin_handle.is_some()
    {
        Some(ContactBlock {
            email: payload.email,
            phone: payload.phone,
            website: payload.website,
            linkedin: payload.linkedin_handle,
        })
    } else {
        None
    };

    let certifications = if payload.certifications.is_empty() {
        None
    } else {
        Some(
            payload
                .certifications
                .into_iter()
                .map(|c| CertificationEntry {
                    name: c.name,
                    issuer: c.authority,
                })
                .collect(),
        )
    };

    ProfileRecord {
        name: payload.full_name,
        headline: payload.headline,
        location: payload.location,
        about: payload.summary,
        photo_url: payload.photo_url,
        contact,
        experience: payload
            .experiences
            .into_iter()
            .map(|e| RoleEntry {
                title: e.title,
                company: e.company,
                duration: e.date_range,
                location: e.location,
                description: e.description,
            })
            .collect(),
        education: payload
            .education
            .into_iter()
            .map(|e| EducationEntry {
                institution: e.school,
                degree: e.degree,
                duration: e.date_range,
            })
            .collect(),
        skills: payload.skills,
        certifications,
        interests: payload.interests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_profile_maps_core_fields() {
        let payload: LookupResponse = serde_json::from_str(
            r#"{
                "full_name": "Jordan Reyes",
                "headline": "VP of Sales",
                "location": "London",
                "summary": "Sales leader.",
                "experiences": [
                    {"title": "VP of Sales", "company": "Northwind", "date_range": "2019 – Present",
                     "description": "Grew revenue by 35%."}
                ],
                "education": [{"school": "UCL", "degree": "BSc"}],
                "skills": ["Negotiation"]
            }"#,
        )
        .unwrap();

        let profile = into_profile(payload);
        assert_eq!(profile.name, "Jordan Reyes");
        assert_eq!(profile.about.as_deref(), Some("Sales leader."));
        assert_eq!(profile.experience[0].duration, "2019 – Present");
        assert_eq!(profile.education[0].institution, "UCL");
        assert!(profile.contact.is_none());
        assert!(profile.certifications.is_none());
    }

    #[test]
    fn test_into_profile_builds_contact_when_any_field_present() {
        let payload: LookupResponse = serde_json::from_str(
            r#"{"full_name": "A", "email": "a@example.com"}"#,
        )
        .unwrap();
        let profile = into_profile(payload);
        let contact = profile.contact.expect("contact block");
        assert_eq!(contact.email.as_deref(), Some("a@example.com"));
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_into_profile_defaults_missing_lists() {
        let payload: LookupResponse = serde_json::from_str(r#"{"full_name": "A"}"#).unwrap();
        let profile = into_profile(payload);
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
        assert_eq!(profile.headline, "");
    }

    #[test]
    fn test_certification_authority_maps_to_issuer() {
        let payload: LookupResponse = serde_json::from_str(
            r#"{"full_name": "A", "certifications": [{"name": "PMP", "authority": "PMI"}]}"#,
        )
        .unwrap();
        let profile = into_profile(payload);
        let certs = profile.certifications.expect("certs");
        assert_eq!(certs[0].issuer.as_deref(), Some("PMI"));
    }
}
