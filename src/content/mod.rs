//! Content data model for Folio
//!
//! Every entity here is immutable and statically seeded at first access; the
//! store is the single source of truth for the whole page. Nothing in the
//! crate creates, mutates or destroys these values after load.

mod store;

pub use store::store;

use serde::{Deserialize, Serialize};

/// Fixed icon vocabulary used by content entries.
///
/// Icons are referenced by tag, never by string key, so every lookup is
/// exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    Shield,
    Network,
    Users,
    Gear,
    Idea,
    Target,
    Clock,
    Award,
    Mail,
    Link,
    Pin,
    Phone,
    Calendar,
    Zap,
    Trend,
    Building,
}

/// Owner identity and contact handles. One instance, global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub years_experience: u32,
    pub current_company: String,
    pub specialization: String,
    /// Lede paragraph shown in the hero section.
    pub tagline: String,
}

/// A named strength with a short blurb (About section cards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strength {
    pub icon: IconTag,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub overview: String,
    pub paragraphs: Vec<String>,
    pub strengths: Vec<Strength>,
    pub expertise: Vec<String>,
}

/// Employment period; `end: None` means "present".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: Option<String>,
}

impl Period {
    pub fn display(&self) -> String {
        format!("{} - {}", self.start, self.end.as_deref().unwrap_or("Present"))
    }
}

/// One entry in the work history, ordered newest-first in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: Period,
    /// Duration label, e.g. "15 years". Hand-written, not derived.
    pub years: String,
    pub location: String,
    /// Role-kind string driving the badge lookup ("Current Role", ...).
    pub kind: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Display-only magnitude; values outside [0,100] are clamped at render.
    pub proficiency: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: IconTag,
    pub title: String,
    pub skills: Vec<Skill>,
}

/// An ordered metric entry; keys follow the `budget`/`teamSize`/`timeline`/
/// `coverage` convention but are not schema-enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub icon: IconTag,
    pub title: String,
    pub category: String,
    /// Status string driving the badge lookup ("Completed", "Ongoing", ...).
    pub status: String,
    pub duration: String,
    pub description: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub impact: Vec<String>,
    pub technologies: Vec<String>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date_obtained: String,
    pub status: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_year: String,
    pub end_year: String,
    pub location: String,
}

/// Precomputed summary numbers. Hand-derived; intentionally not tied to the
/// experience/project entry counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub years_experience: u32,
    pub years_at_current: u32,
    pub projects_managed: u32,
    pub security_domains: u32,
    pub team_size_managed: u32,
    pub budget_managed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub icon: IconTag,
    pub title: String,
    pub value: String,
    /// Outbound URI, opened in an external viewing context; `None` for
    /// informational entries.
    pub href: Option<String>,
    pub description: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub icon: IconTag,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub methods: Vec<ContactMethod>,
    pub availability: Vec<Availability>,
    /// "Why work with me" bullets.
    pub pitch: Vec<String>,
    pub response_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterFact {
    pub icon: IconTag,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub facts: Vec<FooterFact>,
    pub sections: Vec<FooterSection>,
    pub notice: String,
}

/// The full read-only content graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub profile: Profile,
    pub summary: ProfessionalSummary,
    pub statistics: Statistics,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub core_competencies: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<Certification>,
    pub education: Vec<EducationEntry>,
    pub contact: ContactInfo,
    pub footer: FooterContent,
}
