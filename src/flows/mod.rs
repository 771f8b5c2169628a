//! Flow catalogs — the three conversational journeys.

pub mod disability;
pub mod job_posting;
pub mod job_seeker;
pub mod validators;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FlowError};
use crate::flow::Flow;

/// Which journey a flow belongs to. Decides how its record is post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Disability assessment for job seekers.
    #[default]
    Disability,
    /// Job-seeker profile.
    Profile,
    /// Employer job posting.
    Employer,
}

impl FlowKind {
    pub const ALL: [FlowKind; 3] = [Self::Disability, Self::Profile, Self::Employer];

    /// Build the flow definition for this journey.
    pub fn flow(&self) -> Result<Flow, FlowError> {
        match self {
            Self::Disability => disability::flow(),
            Self::Profile => job_seeker::flow(),
            Self::Employer => job_posting::flow(),
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Disability => "disability",
            Self::Profile => "profile",
            Self::Employer => "employer",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FlowKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disability" => Ok(Self::Disability),
            "profile" => Ok(Self::Profile),
            "employer" => Ok(Self::Employer),
            _ => Err(ConfigError::UnknownFlowKind(s.to_string())),
        }
    }
}
