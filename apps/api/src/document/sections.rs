//! Section builders. Each is a pure function from the record to that
//! section's blocks; an omitted section is an empty `Vec`.
//!
//! Repeatable sections (experience, education, certifications, projects,
//! languages, awards) share one routine: gate on the section flag, filter out
//! entries that fail their validity predicate, and only emit the header once at
//! least one entry produced a body block.

use serde::{Deserialize, Serialize};

use crate::document::block::{join_runs, Alignment, ColorIntent, DocumentBlock, TextRun};
use crate::document::inclusion::{date_range, included, included_list};
use crate::models::presence::PresenceFlags;
use crate::models::resume::{
    AwardEntry, CertificationEntry, ContactInfo, EducationEntry, LanguageEntry, ProjectEntry,
    ResumeRecord, WorkEntry,
};

const DOT: &str = " • ";
const PIPE: &str = " | ";
const DASH: &str = " - ";
const COLON: &str = ": ";

// ────────────────────────────────────────────────────────────────────────────
// Section identity
// ────────────────────────────────────────────────────────────────────────────

/// Sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Name,
    Contact,
    Summary,
    Skills,
    WorkExperience,
    Education,
    Certifications,
    Projects,
    Languages,
    Awards,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Name,
        SectionKind::Contact,
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::WorkExperience,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Projects,
        SectionKind::Languages,
        SectionKind::Awards,
    ];

    /// Header text, or `None` for the headerless name and contact blocks.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            SectionKind::Name | SectionKind::Contact => None,
            SectionKind::Summary => Some("PROFESSIONAL SUMMARY"),
            SectionKind::Skills => Some("SKILLS"),
            SectionKind::WorkExperience => Some("WORK EXPERIENCE"),
            SectionKind::Education => Some("EDUCATION"),
            SectionKind::Certifications => Some("CERTIFICATIONS"),
            SectionKind::Projects => Some("PROJECTS"),
            SectionKind::Languages => Some("LANGUAGES"),
            SectionKind::Awards => Some("AWARDS"),
        }
    }

    /// Builds this section's blocks from a record. Empty when omitted.
    pub fn build(&self, record: &ResumeRecord) -> Vec<DocumentBlock> {
        let flags = &record.presence;
        match self {
            SectionKind::Name => vec![name_block(&record.full_name)],
            SectionKind::Contact => contact_line(&record.contact, flags).into_iter().collect(),
            SectionKind::Summary => summary_section(flags, record.summary.as_deref()),
            SectionKind::Skills => skills_section(flags, &record.skills),
            SectionKind::WorkExperience => {
                repeatable_section(flags.has_work_experience, &record.work_experience, &WORK)
            }
            SectionKind::Education => {
                repeatable_section(flags.has_education, &record.education, &EDUCATION)
            }
            SectionKind::Certifications => repeatable_section(
                flags.has_certifications,
                &record.certifications,
                &CERTIFICATIONS,
            ),
            SectionKind::Projects => {
                repeatable_section(flags.has_projects, &record.projects, &PROJECTS)
            }
            SectionKind::Languages => {
                repeatable_section(flags.has_languages, &record.languages, &LANGUAGES)
            }
            SectionKind::Awards => repeatable_section(flags.has_awards, &record.awards, &AWARDS),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed sections
// ────────────────────────────────────────────────────────────────────────────

pub fn name_block(full_name: &str) -> DocumentBlock {
    DocumentBlock::title(full_name.trim().to_uppercase())
}

/// Contact fragments in fixed order, joined with " • ". `None` when nothing qualifies.
pub fn contact_line(contact: &ContactInfo, flags: &PresenceFlags) -> Option<DocumentBlock> {
    let mut fragments = Vec::new();

    if let Some(email) = included(flags.has_email, contact.email.as_deref()) {
        fragments.push(TextRun::plain(email));
    }
    if let Some(phone) = included(flags.has_phone, contact.phone.as_deref()) {
        fragments.push(TextRun::plain(phone));
    }
    if let Some(location) = included(flags.has_location, contact.location.as_deref()) {
        fragments.push(TextRun::plain(location));
    }
    if let Some(url) = included(flags.has_linkedin, contact.linkedin_url.as_deref()) {
        fragments.push(TextRun::plain("LinkedIn").color(ColorIntent::Accent).link(url));
    }
    if let Some(url) = included(flags.has_github, contact.github_url.as_deref()) {
        fragments.push(TextRun::plain("GitHub").color(ColorIntent::Accent).link(url));
    }
    if let Some(url) = included(flags.has_social_links, contact.website_url.as_deref()) {
        fragments.push(TextRun::plain("Portfolio").color(ColorIntent::Accent).link(url));
    }
    if flags.has_relocation_willingness && contact.willing_to_relocate == Some(true) {
        fragments.push(TextRun::plain("Open to relocation").italic());
    }

    if fragments.is_empty() {
        return None;
    }
    Some(DocumentBlock::paragraph(join_runs(fragments, DOT)).aligned(Alignment::Center))
}

pub fn summary_section(flags: &PresenceFlags, summary: Option<&str>) -> Vec<DocumentBlock> {
    let Some(summary) = included(flags.has_summary, summary) else {
        return Vec::new();
    };
    vec![
        section_header(SectionKind::Summary),
        DocumentBlock::paragraph(vec![TextRun::plain(summary)]).aligned(Alignment::Justified),
    ]
}

/// Skills render as one flowing paragraph, not one bullet per skill.
pub fn skills_section(flags: &PresenceFlags, skills: &[String]) -> Vec<DocumentBlock> {
    let skills = included_list(flags.has_skills, skills);
    if skills.is_empty() {
        return Vec::new();
    }
    vec![
        section_header(SectionKind::Skills),
        DocumentBlock::paragraph(vec![TextRun::plain(skills.join(DOT))]),
    ]
}

fn section_header(kind: SectionKind) -> DocumentBlock {
    DocumentBlock::section_header(kind.heading().unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySeparation {
    /// A spacer block between consecutive entries (never before the first or after the last).
    Spacer,
    /// Entries follow each other directly.
    Adjacent,
}

/// Describes one repeatable section.
pub struct RepeatableSection<T> {
    pub kind: SectionKind,
    /// Entries failing this are dropped silently.
    pub is_valid: fn(&T) -> bool,
    pub render_entry: fn(&T) -> Vec<DocumentBlock>,
    pub separation: EntrySeparation,
}

/// gate → filter → non-empty check → header → entries.
pub fn repeatable_section<T>(
    gate: bool,
    entries: &[T],
    section: &RepeatableSection<T>,
) -> Vec<DocumentBlock> {
    if !gate {
        return Vec::new();
    }

    let rendered: Vec<Vec<DocumentBlock>> = entries
        .iter()
        .filter(|entry| (section.is_valid)(entry))
        .map(section.render_entry)
        .filter(|blocks| !blocks.is_empty())
        .collect();

    if rendered.is_empty() {
        return Vec::new();
    }

    let mut blocks = vec![section_header(section.kind)];
    for (i, entry_blocks) in rendered.into_iter().enumerate() {
        if i > 0 && section.separation == EntrySeparation::Spacer {
            blocks.push(DocumentBlock::spacer());
        }
        blocks.extend(entry_blocks);
    }
    blocks
}

/// Secondary "location | dates" line shared by experience and education.
fn location_and_dates(location: Option<&str>, dates: Option<String>) -> Option<DocumentBlock> {
    let fragments: Vec<TextRun> = location
        .map(str::to_string)
        .into_iter()
        .chain(dates)
        .map(|text| TextRun::plain(text).italic().color(ColorIntent::Muted))
        .collect();

    if fragments.is_empty() {
        None
    } else {
        Some(DocumentBlock::paragraph(join_runs(fragments, PIPE)))
    }
}

/// "primary | secondary" heading line for an entry. `None` if neither qualifies.
fn entry_heading(primary: Option<&str>, secondary: Option<&str>) -> Option<DocumentBlock> {
    let fragments: Vec<TextRun> = primary
        .map(|p| TextRun::plain(p).bold())
        .into_iter()
        .chain(secondary.map(|s| TextRun::plain(s).bold().color(ColorIntent::Accent)))
        .collect();

    if fragments.is_empty() {
        None
    } else {
        Some(DocumentBlock::paragraph(join_runs(fragments, PIPE)))
    }
}

// ── Work experience ─────────────────────────────────────────────────────────

pub const WORK: RepeatableSection<WorkEntry> = RepeatableSection {
    kind: SectionKind::WorkExperience,
    is_valid: work_entry_is_valid,
    render_entry: render_work_entry,
    separation: EntrySeparation::Spacer,
};

fn work_job_title(entry: &WorkEntry) -> Option<&str> {
    included(entry.presence.has_job_title, entry.job_title.as_deref())
}

fn work_company(entry: &WorkEntry) -> Option<&str> {
    included(entry.presence.has_company, entry.company.as_deref())
}

fn work_entry_is_valid(entry: &WorkEntry) -> bool {
    work_job_title(entry).is_some() || work_company(entry).is_some()
}

fn render_work_entry(entry: &WorkEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let mut blocks: Vec<DocumentBlock> = entry_heading(work_job_title(entry), work_company(entry))
        .into_iter()
        .collect();

    let dates = date_range(
        p.has_start_date,
        entry.start_date.as_deref(),
        p.has_end_date,
        entry.end_date.as_deref(),
    );
    blocks.extend(location_and_dates(
        included(p.has_location, entry.location.as_deref()),
        dates,
    ));

    blocks.extend(
        included_list(p.has_responsibilities, &entry.responsibilities)
            .into_iter()
            .map(|r| DocumentBlock::bullet(vec![TextRun::plain(r)])),
    );
    blocks
}

// ── Education ───────────────────────────────────────────────────────────────

pub const EDUCATION: RepeatableSection<EducationEntry> = RepeatableSection {
    kind: SectionKind::Education,
    is_valid: education_entry_is_valid,
    render_entry: render_education_entry,
    separation: EntrySeparation::Spacer,
};

fn education_degree(entry: &EducationEntry) -> Option<&str> {
    included(entry.presence.has_degree, entry.degree.as_deref())
}

fn education_institution(entry: &EducationEntry) -> Option<&str> {
    included(entry.presence.has_institution, entry.institution.as_deref())
}

fn education_entry_is_valid(entry: &EducationEntry) -> bool {
    education_degree(entry).is_some() || education_institution(entry).is_some()
}

fn render_education_entry(entry: &EducationEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let mut blocks: Vec<DocumentBlock> =
        entry_heading(education_degree(entry), education_institution(entry))
            .into_iter()
            .collect();

    let years = date_range(
        p.has_start_year,
        entry.start_year.as_deref(),
        p.has_end_year,
        entry.end_year.as_deref(),
    );
    blocks.extend(location_and_dates(
        included(p.has_location, entry.location.as_deref()),
        years,
    ));

    if let Some(details) = included(p.has_additional_details, entry.additional_details.as_deref())
    {
        blocks.push(DocumentBlock::paragraph(vec![TextRun::plain(details)]));
    }
    blocks
}

// ── Single-line sections ────────────────────────────────────────────────────

/// One bullet from whichever fragments qualified. Empty when none did.
fn bullet_line(fragments: Vec<TextRun>, separator: &str) -> Vec<DocumentBlock> {
    if fragments.is_empty() {
        return Vec::new();
    }
    vec![DocumentBlock::bullet(join_runs(fragments, separator))]
}

pub const CERTIFICATIONS: RepeatableSection<CertificationEntry> = RepeatableSection {
    kind: SectionKind::Certifications,
    is_valid: certification_is_valid,
    render_entry: render_certification,
    separation: EntrySeparation::Adjacent,
};

fn certification_is_valid(entry: &CertificationEntry) -> bool {
    let p = &entry.presence;
    included(p.has_name, entry.name.as_deref()).is_some()
        || included(p.has_issuer, entry.issuer.as_deref()).is_some()
}

fn render_certification(entry: &CertificationEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let fragments: Vec<TextRun> = [
        included(p.has_name, entry.name.as_deref()).map(|v| TextRun::plain(v).bold()),
        included(p.has_issuer, entry.issuer.as_deref()).map(TextRun::plain),
        included(p.has_date, entry.date.as_deref())
            .map(|v| TextRun::plain(v).color(ColorIntent::Muted)),
    ]
    .into_iter()
    .flatten()
    .collect();
    bullet_line(fragments, DASH)
}

pub const PROJECTS: RepeatableSection<ProjectEntry> = RepeatableSection {
    kind: SectionKind::Projects,
    is_valid: project_is_valid,
    render_entry: render_project,
    separation: EntrySeparation::Adjacent,
};

fn project_is_valid(entry: &ProjectEntry) -> bool {
    let p = &entry.presence;
    included(p.has_title, entry.title.as_deref()).is_some()
        || included(p.has_description, entry.description.as_deref()).is_some()
}

fn render_project(entry: &ProjectEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let fragments: Vec<TextRun> = [
        included(p.has_title, entry.title.as_deref()).map(|v| TextRun::plain(v).bold()),
        included(p.has_description, entry.description.as_deref()).map(TextRun::plain),
    ]
    .into_iter()
    .flatten()
    .collect();
    bullet_line(fragments, COLON)
}

pub const LANGUAGES: RepeatableSection<LanguageEntry> = RepeatableSection {
    kind: SectionKind::Languages,
    is_valid: language_is_valid,
    render_entry: render_language,
    separation: EntrySeparation::Adjacent,
};

// A proficiency with no language name says nothing.
fn language_is_valid(entry: &LanguageEntry) -> bool {
    included(entry.presence.has_language, entry.language.as_deref()).is_some()
}

fn render_language(entry: &LanguageEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let fragments: Vec<TextRun> = [
        included(p.has_language, entry.language.as_deref()).map(|v| TextRun::plain(v).bold()),
        included(p.has_proficiency, entry.proficiency.as_deref()).map(TextRun::plain),
    ]
    .into_iter()
    .flatten()
    .collect();
    bullet_line(fragments, COLON)
}

pub const AWARDS: RepeatableSection<AwardEntry> = RepeatableSection {
    kind: SectionKind::Awards,
    is_valid: award_is_valid,
    render_entry: render_award,
    separation: EntrySeparation::Adjacent,
};

fn award_is_valid(entry: &AwardEntry) -> bool {
    let p = &entry.presence;
    included(p.has_title, entry.title.as_deref()).is_some()
        || included(p.has_issuer, entry.issuer.as_deref()).is_some()
}

fn render_award(entry: &AwardEntry) -> Vec<DocumentBlock> {
    let p = &entry.presence;
    let fragments: Vec<TextRun> = [
        included(p.has_title, entry.title.as_deref()).map(|v| TextRun::plain(v).bold()),
        included(p.has_issuer, entry.issuer.as_deref()).map(TextRun::plain),
        included(p.has_date, entry.date.as_deref())
            .map(|v| TextRun::plain(v).color(ColorIntent::Muted)),
    ]
    .into_iter()
    .flatten()
    .collect();
    bullet_line(fragments, DASH)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::block::BlockKind;
    use crate::models::presence::{
        AwardPresence, CertificationPresence, EducationPresence, LanguagePresence,
        ProjectPresence, WorkPresence,
    };

    fn texts(blocks: &[DocumentBlock]) -> Vec<String> {
        blocks.iter().map(|b| b.plain_text()).collect()
    }

    fn work(title: Option<&str>, company: Option<&str>) -> WorkEntry {
        WorkEntry {
            job_title: title.map(str::to_string),
            company: company.map(str::to_string),
            presence: WorkPresence {
                has_job_title: true,
                has_company: true,
                ..WorkPresence::default()
            },
            ..WorkEntry::default()
        }
    }

    // ── contact line ────────────────────────────────────────────────────────

    #[test]
    fn test_contact_line_fixed_order_and_labels() {
        let contact = ContactInfo {
            email: Some("jane@x.com".to_string()),
            phone: Some("555-0100".to_string()),
            location: Some("Berlin".to_string()),
            linkedin_url: Some("https://linkedin.com/in/jane".to_string()),
            github_url: Some("https://github.com/jane".to_string()),
            website_url: Some("https://jane.dev".to_string()),
            willing_to_relocate: Some(true),
        };
        let flags = PresenceFlags {
            has_email: true,
            has_phone: true,
            has_location: true,
            has_linkedin: true,
            has_github: true,
            has_social_links: true,
            has_relocation_willingness: true,
            ..PresenceFlags::default()
        };

        let block = contact_line(&contact, &flags).expect("contact line");
        assert_eq!(
            block.plain_text(),
            "jane@x.com • 555-0100 • Berlin • LinkedIn • GitHub • Portfolio • Open to relocation"
        );
        assert!(!block.plain_text().contains("https://"));
        let links: Vec<&str> = block.runs.iter().filter_map(|r| r.link.as_deref()).collect();
        assert_eq!(
            links,
            vec![
                "https://linkedin.com/in/jane",
                "https://github.com/jane",
                "https://jane.dev"
            ]
        );
        assert_eq!(block.format.alignment, Alignment::Center);
    }

    #[test]
    fn test_contact_line_absent_when_nothing_qualifies() {
        let contact = ContactInfo {
            email: Some("   ".to_string()),
            phone: Some("555-0100".to_string()),
            ..ContactInfo::default()
        };
        let flags = PresenceFlags {
            has_email: true,
            ..PresenceFlags::default()
        };
        assert!(contact_line(&contact, &flags).is_none());
    }

    #[test]
    fn test_relocation_requires_true_value() {
        let flags = PresenceFlags {
            has_relocation_willingness: true,
            ..PresenceFlags::default()
        };
        let contact = ContactInfo {
            willing_to_relocate: Some(false),
            ..ContactInfo::default()
        };
        assert!(contact_line(&contact, &flags).is_none());
    }

    // ── summary / skills ────────────────────────────────────────────────────

    #[test]
    fn test_summary_is_justified_paragraph() {
        let flags = PresenceFlags {
            has_summary: true,
            ..PresenceFlags::default()
        };
        let blocks = summary_section(&flags, Some("  Backend engineer.  "));
        assert_eq!(texts(&blocks), vec!["PROFESSIONAL SUMMARY", "Backend engineer."]);
        assert_eq!(blocks[1].format.alignment, Alignment::Justified);
        assert!(summary_section(&flags, Some("")).is_empty());
    }

    #[test]
    fn test_skills_flow_as_one_paragraph() {
        let flags = PresenceFlags {
            has_skills: true,
            ..PresenceFlags::default()
        };
        let skills = vec!["Rust".to_string(), "".to_string(), "Postgres".to_string()];
        let blocks = skills_section(&flags, &skills);
        assert_eq!(texts(&blocks), vec!["SKILLS", "Rust • Postgres"]);
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert!(skills_section(&flags, &[" ".to_string()]).is_empty());
    }

    // ── repeatable section routine ──────────────────────────────────────────

    #[test]
    fn test_repeatable_section_gate_off_is_empty() {
        let entries = vec![work(Some("Engineer"), None)];
        assert!(repeatable_section(false, &entries, &WORK).is_empty());
    }

    #[test]
    fn test_repeatable_section_no_header_when_all_filtered() {
        let entries = vec![work(None, None), work(Some(" "), Some(""))];
        assert!(repeatable_section(true, &entries, &WORK).is_empty());
    }

    #[test]
    fn test_spacers_only_between_entries() {
        let entries = vec![
            work(Some("Engineer"), Some("Acme")),
            work(None, None),
            work(Some("Intern"), None),
            work(None, Some("Globex")),
        ];
        let blocks = repeatable_section(true, &entries, &WORK);
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Header,
                BlockKind::Paragraph,
                BlockKind::Spacer,
                BlockKind::Paragraph,
                BlockKind::Spacer,
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(blocks[1].plain_text(), "Engineer | Acme");
        assert_eq!(blocks[3].plain_text(), "Intern");
        assert_eq!(blocks[5].plain_text(), "Globex");
    }

    // ── work experience ─────────────────────────────────────────────────────

    #[test]
    fn test_work_entry_full_rendering() {
        let entry = WorkEntry {
            job_title: Some("Staff Engineer".to_string()),
            company: Some("Acme".to_string()),
            location: Some("Remote".to_string()),
            start_date: Some("2020-01".to_string()),
            end_date: None,
            responsibilities: vec![
                "Led the billing rewrite".to_string(),
                "  ".to_string(),
                "Mentored four engineers".to_string(),
            ],
            presence: WorkPresence {
                has_job_title: true,
                has_company: true,
                has_location: true,
                has_start_date: true,
                has_end_date: true,
                has_responsibilities: true,
            },
        };
        let blocks = render_work_entry(&entry);
        assert_eq!(
            texts(&blocks),
            vec![
                "Staff Engineer | Acme",
                "Remote | 2020-01 - Present",
                "Led the billing rewrite",
                "Mentored four engineers",
            ]
        );
        assert_eq!(blocks[2].kind, BlockKind::BulletItem);
        assert!(blocks[1].runs[0].italic);
    }

    #[test]
    fn test_work_entry_location_line_omitted_when_empty() {
        let mut entry = work(Some("Engineer"), None);
        entry.location = Some("Paris".to_string());
        entry.start_date = Some("2019".to_string());
        let blocks = render_work_entry(&entry);
        assert_eq!(texts(&blocks), vec!["Engineer"]);
    }

    #[test]
    fn test_work_responsibilities_gated_by_flag() {
        let mut entry = work(Some("Engineer"), None);
        entry.responsibilities = vec!["Invented a thing".to_string()];
        let blocks = render_work_entry(&entry);
        assert!(blocks.iter().all(|b| b.kind != BlockKind::BulletItem));
    }

    // ── education ───────────────────────────────────────────────────────────

    #[test]
    fn test_education_entry_with_details() {
        let entry = EducationEntry {
            degree: Some("BSc Computer Science".to_string()),
            institution: Some("TU Berlin".to_string()),
            location: None,
            start_year: Some("2015".to_string()),
            end_year: Some("2019".to_string()),
            additional_details: Some("Graduated with honors".to_string()),
            presence: EducationPresence {
                has_degree: true,
                has_institution: true,
                has_start_year: true,
                has_end_year: true,
                has_additional_details: true,
                ..EducationPresence::default()
            },
        };
        assert_eq!(
            texts(&render_education_entry(&entry)),
            vec![
                "BSc Computer Science | TU Berlin",
                "2015 - 2019",
                "Graduated with honors"
            ]
        );
    }

    #[test]
    fn test_education_details_gated_by_flag() {
        let entry = EducationEntry {
            institution: Some("MIT".to_string()),
            end_year: Some("2012".to_string()),
            additional_details: Some("Summa cum laude".to_string()),
            presence: EducationPresence {
                has_institution: true,
                has_end_year: true,
                ..EducationPresence::default()
            },
            ..EducationEntry::default()
        };
        assert_eq!(
            texts(&render_education_entry(&entry)),
            vec!["MIT", "Until 2012"]
        );
    }

    // ── single-line sections ────────────────────────────────────────────────

    #[test]
    fn test_certification_line_uses_dash() {
        let entries = vec![
            CertificationEntry {
                name: Some("AWS Solutions Architect".to_string()),
                issuer: Some("Amazon".to_string()),
                date: Some("2023".to_string()),
                presence: CertificationPresence {
                    has_name: true,
                    has_issuer: true,
                    has_date: true,
                },
            },
            CertificationEntry {
                date: Some("2021".to_string()),
                presence: CertificationPresence {
                    has_date: true,
                    ..CertificationPresence::default()
                },
                ..CertificationEntry::default()
            },
        ];
        let blocks = repeatable_section(true, &entries, &CERTIFICATIONS);
        assert_eq!(
            texts(&blocks),
            vec!["CERTIFICATIONS", "AWS Solutions Architect - Amazon - 2023"]
        );
    }

    #[test]
    fn test_project_line_uses_colon() {
        let entries = vec![
            ProjectEntry {
                title: Some("Ledger".to_string()),
                description: Some("Double-entry bookkeeping in Rust".to_string()),
                presence: ProjectPresence {
                    has_title: true,
                    has_description: true,
                },
            },
            ProjectEntry {
                title: Some("Hidden".to_string()),
                description: Some("Only the description was detected".to_string()),
                presence: ProjectPresence {
                    has_title: false,
                    has_description: true,
                },
            },
        ];
        let blocks = repeatable_section(true, &entries, &PROJECTS);
        assert_eq!(
            texts(&blocks),
            vec![
                "PROJECTS",
                "Ledger: Double-entry bookkeeping in Rust",
                "Only the description was detected",
            ]
        );
        assert!(blocks.iter().all(|b| b.kind != BlockKind::Spacer));
    }

    #[test]
    fn test_language_requires_language_name() {
        let entries = vec![
            LanguageEntry {
                language: Some("German".to_string()),
                proficiency: Some("Native".to_string()),
                presence: LanguagePresence {
                    has_language: true,
                    has_proficiency: true,
                },
            },
            LanguageEntry {
                language: None,
                proficiency: Some("Fluent".to_string()),
                presence: LanguagePresence {
                    has_language: true,
                    has_proficiency: true,
                },
            },
        ];
        let blocks = repeatable_section(true, &entries, &LANGUAGES);
        assert_eq!(texts(&blocks), vec!["LANGUAGES", "German: Native"]);
    }

    #[test]
    fn test_award_line_partial_fields() {
        let entries = vec![AwardEntry {
            title: Some("Hackathon Winner".to_string()),
            issuer: Some("ETHGlobal".to_string()),
            date: Some("2022".to_string()),
            presence: AwardPresence {
                has_title: true,
                has_issuer: false,
                has_date: true,
            },
        }];
        let blocks = repeatable_section(true, &entries, &AWARDS);
        assert_eq!(texts(&blocks), vec!["AWARDS", "Hackathon Winner - 2022"]);
    }

    #[test]
    fn test_name_block_uppercases() {
        let block = name_block("  Jane Doe ");
        assert_eq!(block.plain_text(), "JANE DOE");
        assert_eq!(block.format.alignment, Alignment::Center);
    }
}
