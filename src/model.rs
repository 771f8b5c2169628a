//! Structured records built from a completed flow's answers.

use serde::{Deserialize, Serialize};

use crate::flow::ResponseRecord;
use crate::flows::{FlowKind, disability, job_posting, job_seeker};

/// Accessibility needs from the disability assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityInfo {
    /// The disability type answer, e.g. "I have a visual disability".
    pub kind: String,
    pub severity: String,
    pub accommodations: String,
    pub assistive_tech: String,
}

/// Contact details of a job seeker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Not asked by the profile flow; always empty.
    pub state: String,
    /// Not asked by the profile flow; always empty.
    pub country: String,
}

/// What kind of job a seeker is after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPreferences {
    pub position: String,
    pub location: String,
    /// Leading number of the distance answer; 0 when none was given.
    pub max_distance: i64,
    pub work_type: String,
    pub salary: String,
}

/// Job-seeker profile built from the profile flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSeekerProfile {
    pub personal_info: PersonalInfo,
    pub preferences: JobPreferences,
    pub education: String,
    pub experience: String,
    pub skills: Vec<String>,
}

/// Employer job posting built from the employer flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Employment type, e.g. "Full-time".
    pub kind: String,
    pub salary: String,
    /// Percentage of accommodation the company can offer (0-100).
    pub disability_support: i64,
    /// Minimum skills match percentage accepted (0-100).
    pub match_threshold: i64,
    pub accommodations: Vec<String>,
    pub accessibility_equipment: Vec<String>,
}

/// The structured result of a flow, tagged by flow kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flow", rename_all = "snake_case")]
pub enum ParsedConversation {
    Disability(DisabilityInfo),
    Profile(JobSeekerProfile),
    Employer(JobPosting),
}

impl ParsedConversation {
    pub fn kind(&self) -> FlowKind {
        match self {
            Self::Disability(_) => FlowKind::Disability,
            Self::Profile(_) => FlowKind::Profile,
            Self::Employer(_) => FlowKind::Employer,
        }
    }

    /// Human-readable markdown summary.
    pub fn summary(&self) -> String {
        match self {
            Self::Disability(info) => info.summary(),
            Self::Profile(profile) => profile.summary(),
            Self::Employer(posting) => posting.summary(),
        }
    }
}

/// Map a flat record onto the structure for its flow kind. Missing answers
/// become empty strings, zero, or empty lists.
pub fn parse_conversation_data(record: &ResponseRecord, kind: FlowKind) -> ParsedConversation {
    match kind {
        FlowKind::Disability => ParsedConversation::Disability(DisabilityInfo::from_record(record)),
        FlowKind::Profile => ParsedConversation::Profile(JobSeekerProfile::from_record(record)),
        FlowKind::Employer => ParsedConversation::Employer(JobPosting::from_record(record)),
    }
}

impl DisabilityInfo {
    pub fn from_record(record: &ResponseRecord) -> Self {
        Self {
            kind: record.text(disability::DISABILITY_TYPE),
            severity: record.text(disability::SEVERITY),
            accommodations: record.text(disability::ACCOMMODATIONS),
            assistive_tech: record.text(disability::ASSISTIVE_TECH),
        }
    }

    pub fn summary(&self) -> String {
        let mut parts = vec!["# Disability Assessment".to_string()];
        parts.push(format!("- **Disability:** {}", self.kind));
        if !self.severity.is_empty() {
            parts.push(format!("- **Impact:** {}", self.severity));
        }
        if !self.accommodations.is_empty() {
            parts.push(format!("- **Helpful accommodations:** {}", self.accommodations));
        }
        if !self.assistive_tech.is_empty() {
            parts.push(format!("- **Assistive technology:** {}", self.assistive_tech));
        }
        parts.join("\n")
    }
}

impl JobSeekerProfile {
    pub fn from_record(record: &ResponseRecord) -> Self {
        Self {
            personal_info: PersonalInfo {
                name: record.text(job_seeker::NAME),
                email: record.text(job_seeker::EMAIL),
                phone: record.text(job_seeker::PHONE),
                address: record.text(job_seeker::ADDRESS),
                city: record.text(job_seeker::LOCATION),
                state: String::new(),
                country: String::new(),
            },
            preferences: JobPreferences {
                position: record.text(job_seeker::DESIRED_POSITION),
                location: record.text(job_seeker::PREFERRED_LOCATION),
                max_distance: record.number(job_seeker::MAX_DISTANCE),
                work_type: record.text(job_seeker::WORK_TYPE),
                salary: record.text(job_seeker::SALARY),
            },
            education: record.text(job_seeker::EDUCATION),
            experience: record.text(job_seeker::EXPERIENCE),
            skills: record.list(job_seeker::SKILLS),
        }
    }

    pub fn summary(&self) -> String {
        let info = &self.personal_info;
        let prefs = &self.preferences;
        let mut parts = vec!["# Job Seeker Profile".to_string()];

        parts.push(format!("- **Name:** {}", info.name));
        parts.push(format!("- **Email:** {}", info.email));
        if !info.phone.is_empty() {
            parts.push(format!("- **Phone:** {}", info.phone));
        }
        parts.push(format!("- **City:** {}", info.city));
        parts.push(format!("- **Looking for:** {}", prefs.position));
        if !prefs.work_type.is_empty() {
            parts.push(format!("- **Work type:** {}", prefs.work_type));
        }
        if prefs.max_distance > 0 {
            parts.push(format!("- **Max distance:** {}", prefs.max_distance));
        }
        if !prefs.salary.is_empty() {
            parts.push(format!("- **Salary:** {}", prefs.salary));
        }
        if !self.skills.is_empty() {
            parts.push(format!("- **Skills:** {}", self.skills.join(", ")));
        }
        parts.join("\n")
    }
}

impl JobPosting {
    pub fn from_record(record: &ResponseRecord) -> Self {
        Self {
            title: record.text(job_posting::JOB_TITLE),
            description: record.text(job_posting::JOB_DESCRIPTION),
            location: record.text(job_posting::LOCATION),
            kind: record.text(job_posting::JOB_TYPE),
            salary: record.text(job_posting::SALARY),
            disability_support: record.number(job_posting::DISABILITY_SUPPORT),
            match_threshold: record.number(job_posting::MATCH_THRESHOLD),
            accommodations: record.list(job_posting::ACCOMMODATIONS),
            accessibility_equipment: record.list(job_posting::ACCESSIBILITY_EQUIPMENT),
        }
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("# Job Posting: {}", self.title)];
        if !self.location.is_empty() {
            parts.push(format!("- **Location:** {}", self.location));
        }
        if !self.kind.is_empty() {
            parts.push(format!("- **Type:** {}", self.kind));
        }
        if !self.salary.is_empty() {
            parts.push(format!("- **Salary:** {}", self.salary));
        }
        parts.push(format!("- **Disability support:** {}%", self.disability_support));
        parts.push(format!("- **Minimum skills match:** {}%", self.match_threshold));
        if !self.accommodations.is_empty() {
            parts.push(format!("- **Accommodations:** {}", self.accommodations.join(", ")));
        }
        if !self.accessibility_equipment.is_empty() {
            parts.push(format!(
                "- **Accessibility equipment:** {}",
                self.accessibility_equipment.join(", ")
            ));
        }
        parts.join("\n")
    }
}
