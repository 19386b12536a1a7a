//! Source-content-analysis flags.
//!
//! Each flag records whether a field or section was detected in the candidate's
//! original (pre-tailoring) résumé. The flags gate visibility: a field the
//! detector never saw is not rendered, even if the rewrite populated it.

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Top-level flags: one per optional contact field and per optional section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresenceFlags {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_email: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_phone: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_location: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_linkedin: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_github: bool,
    /// Gates the personal website / portfolio link.
    #[serde(deserialize_with = "lenient::flag")]
    pub has_social_links: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_relocation_willingness: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_summary: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_skills: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_work_experience: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_education: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_certifications: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_projects: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_languages: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_awards: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkPresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_job_title: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_company: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_location: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_start_date: bool,
    /// Set when the source had end-date data, even if that data means "current".
    #[serde(deserialize_with = "lenient::flag")]
    pub has_end_date: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_responsibilities: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_degree: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_institution: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_location: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_start_year: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_end_year: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_additional_details: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationPresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_name: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_issuer: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_date: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_title: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_description: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguagePresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_language: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_proficiency: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardPresence {
    #[serde(deserialize_with = "lenient::flag")]
    pub has_title: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_issuer: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_date: bool,
}
