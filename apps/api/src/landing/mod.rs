//! Landing page assembly — runs the extraction core over a `ProfileRecord`
//! and produces the serializable page model the rendering layer consumes.
//!
//! Pure and synchronous: no persistence, no caching, no network.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::extraction::segmenter::{segment, AboutSegments};
use crate::extraction::stats::{extract_stats, AchievementStat};
use crate::extraction::traits::derive_traits;
use crate::models::profile::{
    CertificationEntry, ContactBlock, EducationEntry, ProfileRecord, RoleEntry,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPage {
    pub hero: HeroSection,
    pub about: AboutSegments,
    pub traits: Vec<String>,
    pub experience: Vec<ExperienceSection>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSection {
    pub name: String,
    pub headline: String,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub contact: Option<ContactBlock>,
}

/// One work-history entry paired with its extracted headline figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub role: RoleEntry,
    pub stats: Vec<AchievementStat>,
}

/// Builds the full landing-page model from a profile record.
pub fn build_landing_page(profile: &ProfileRecord) -> LandingPage {
    let about = segment(profile.about.as_deref().unwrap_or(""));
    let traits = derive_traits(profile)
        .into_iter()
        .map(String::from)
        .collect();

    let experience = profile
        .experience
        .iter()
        .map(|role| ExperienceSection {
            role: role.clone(),
            stats: extract_stats(role.description.as_deref().unwrap_or("")),
        })
        .collect();

    LandingPage {
        hero: HeroSection {
            name: profile.name.clone(),
            headline: profile.headline.clone(),
            location: profile.location.clone(),
            photo_url: profile.photo_url.clone(),
            contact: profile.contact.clone(),
        },
        about,
        traits,
        experience,
        education: profile.education.clone(),
        skills: profile.skills.clone(),
        certifications: profile.certifications.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> ProfileRecord {
        ProfileRecord {
            name: "Jordan Reyes".to_string(),
            headline: "VP of Sales".to_string(),
            location: Some("London".to_string()),
            about: Some("Commercial leader. • Closed £4M in ARR • Built the EMEA team".to_string()),
            experience: vec![RoleEntry {
                title: "VP of Sales".to_string(),
                company: "Northwind".to_string(),
                duration: "2019 – Present".to_string(),
                location: None,
                description: Some("Grew revenue by 35% and led a team of 12 people.".to_string()),
            }],
            skills: vec!["Negotiation".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_hero_carries_identity_fields() {
        let page = build_landing_page(&sample_profile());
        assert_eq!(page.hero.name, "Jordan Reyes");
        assert_eq!(page.hero.headline, "VP of Sales");
        assert_eq!(page.hero.location.as_deref(), Some("London"));
    }

    #[test]
    fn test_about_is_segmented() {
        let page = build_landing_page(&sample_profile());
        assert_eq!(page.about.intro, "Commercial leader.");
        assert_eq!(page.about.highlights.len(), 2);
    }

    #[test]
    fn test_each_role_gets_its_own_stats() {
        let page = build_landing_page(&sample_profile());
        assert_eq!(page.experience.len(), 1);
        let stats = &page.experience[0].stats;
        assert_eq!(stats[0].value, "35%");
        assert_eq!(stats[1].value, "12");
    }

    #[test]
    fn test_traits_are_present_and_bounded() {
        let page = build_landing_page(&sample_profile());
        assert!(!page.traits.is_empty());
        assert!(page.traits.len() <= 8);
        assert!(page.traits.iter().any(|t| t == "Driven"));
    }

    #[test]
    fn test_missing_about_yields_empty_segments() {
        let mut profile = sample_profile();
        profile.about = None;
        let page = build_landing_page(&profile);
        assert!(page.about.intro.is_empty());
        assert!(page.about.highlights.is_empty());
    }

    #[test]
    fn test_absent_certifications_serialize_as_empty_list() {
        let page = build_landing_page(&sample_profile());
        assert!(page.certifications.is_empty());
        let json = serde_json::to_value(&page).unwrap();
        assert!(json["certifications"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_page_serializes_for_the_renderer() {
        let page = build_landing_page(&sample_profile());
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"hero\""));
        assert!(json.contains("\"highlights\""));
        assert!(json.contains("Team Size"));
    }
}
