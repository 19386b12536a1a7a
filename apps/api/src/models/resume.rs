//! Tailored résumé payload as produced by the upstream rewriting step.
//!
//! Every optional value is an `Option` paired with a presence flag. Whether a
//! value is shown is decided in one place (`document::inclusion::included`),
//! never by ad hoc checks here.

use serde::{Deserialize, Serialize};

use crate::models::lenient;
use crate::models::presence::{
    AwardPresence, CertificationPresence, EducationPresence, LanguagePresence, PresenceFlags,
    ProjectPresence, WorkPresence,
};

/// The candidate's tailored résumé plus the source-content-analysis flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub contact: ContactInfo,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub skills: Vec<String>,
    /// Most recent first, as ordered upstream.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub work_experience: Vec<WorkEntry>,
    /// Most recent first, as ordered upstream.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub languages: Vec<LanguageEntry>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub awards: Vec<AwardEntry>,
    #[serde(
        default,
        alias = "sourceContentAnalysis",
        deserialize_with = "lenient::object"
    )]
    pub presence: PresenceFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub linkedin_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub website_url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub willing_to_relocate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
    /// `None` with `has_end_date` set means the role is ongoing.
    #[serde(deserialize_with = "lenient::text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: WorkPresence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub start_year: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub end_year: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub additional_details: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: EducationPresence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: CertificationPresence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: ProjectPresence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub proficiency: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: LanguagePresence,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardEntry {
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::object")]
    pub presence: AwardPresence,
}
