#[derive(Default, Debug, Clone)]
pub(crate) struct PersonalInfo {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    /// Dialable form, used in the `tel:` link
    pub phone: String,
    pub phone_display: String,
    pub photo: Option<String>,
}

/// A card with an icon, a heading and a short blurb
#[derive(Default, Debug, Clone)]
pub(crate) struct Highlight {
    pub icon: &'static str,
    pub title: String,
    pub blurb: String,
}

#[derive(Default, Debug, Clone)]
pub(crate) struct SummaryPoint {
    pub lead: String,
    pub rest: String,
}

#[derive(Default, Debug, Clone)]
pub(crate) struct Experience {
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub period: String,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub kind: String,
}

#[derive(Default, Debug, Clone)]
pub(crate) struct Project {
    pub title: String,
    pub category: String,
    pub icon: &'static str,
    pub featured: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub outcomes: Vec<String>,
    pub proof: String,
    pub link: Option<String>,
}

#[derive(Default, Debug, Clone)]
pub(crate) struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum CertificationStatus {
    Certified,
    InView,
}
impl Default for CertificationStatus {
    fn default() -> Self {
        CertificationStatus::Certified
    }
}
impl CertificationStatus {
    pub fn label(self: &Self) -> &'static str {
        match self {
            CertificationStatus::Certified => "Certified",
            CertificationStatus::InView => "In View",
        }
    }
}

#[derive(Default, Debug, Clone)]
pub(crate) struct Certification {
    pub name: String,
    pub issuer: String,
    pub status: CertificationStatus,
    pub year: Option<String>,
}

#[derive(Default, Debug, Clone)]
pub(crate) struct ProfileLink {
    pub label: String,
    pub blurb: String,
    pub url: String,
}

/// Source text shown on the SecureVigil page. Display only, never run.
#[derive(Default, Debug, Clone)]
pub(crate) struct CodeSnippet {
    pub key: &'static str,
    pub label: &'static str,
    pub file_name: &'static str,
    pub icon: &'static str,
    pub source: &'static str,
}
