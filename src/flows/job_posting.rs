//! Employer job posting — the role, its terms and the support on offer.

use crate::error::FlowError;
use crate::flow::{Flow, Step};

use super::validators::{longer_than, non_empty, percentage};

pub const JOB_TITLE: &str = "job-title";
pub const JOB_DESCRIPTION: &str = "job-description";
pub const LOCATION: &str = "location";
pub const JOB_TYPE: &str = "job-type";
pub const SALARY: &str = "salary";
pub const DISABILITY_SUPPORT: &str = "disability-support";
pub const MATCH_THRESHOLD: &str = "match-threshold";
pub const ACCOMMODATIONS: &str = "accommodations";
pub const ACCESSIBILITY_EQUIPMENT: &str = "accessibility-equipment";
pub const COMPLETION: &str = "completion";

/// Minimum description length, in characters after trimming (exclusive).
const MIN_DESCRIPTION_CHARS: usize = 20;

pub fn flow() -> Result<Flow, FlowError> {
    Flow::new(
        "employer",
        vec![
            Step::text(
                JOB_TITLE,
                "Let's create your job posting. What's the job title for the position you're \
                 hiring for?",
            )
            .with_validator(non_empty())
            .then(JOB_DESCRIPTION),
            Step::text(
                JOB_DESCRIPTION,
                "Please describe this job role. What are the main responsibilities and what would \
                 a typical day look like for someone in this position?",
            )
            .with_validator(longer_than(MIN_DESCRIPTION_CHARS))
            .then(LOCATION),
            Step::text(
                LOCATION,
                "Where is this job located? You can specify a city and state, or say 'remote' if \
                 location doesn't matter.",
            )
            .then(JOB_TYPE),
            Step::choice(
                JOB_TYPE,
                "What type of employment is this? Full-time, part-time, contract, remote, or hybrid?",
                ["Full-time", "Part-time", "Contract", "Remote", "Hybrid"],
            )
            .then(SALARY),
            Step::text(
                SALARY,
                "What's the salary range for this position? You can give me a range like '40,000 \
                 to 60,000 dollars annually' or say what works for your budget.",
            )
            .then(DISABILITY_SUPPORT),
            Step::number(
                DISABILITY_SUPPORT,
                "On a scale from 0 to 100 percent, how much disability support can your company \
                 provide? This helps us match you with suitable candidates who need different \
                 levels of accommodation.",
            )
            .with_validator(percentage())
            .then(MATCH_THRESHOLD),
            Step::number(
                MATCH_THRESHOLD,
                "What's the minimum skills match percentage you'd accept for candidates? For \
                 example, would you consider someone who matches 70% of your requirements, or do \
                 you need a higher match?",
            )
            .with_validator(percentage())
            .then(ACCOMMODATIONS),
            Step::text(
                ACCOMMODATIONS,
                "What accommodations can your company provide? For example, flexible work hours, \
                 remote work options, ergonomic workspaces, screen reader compatibility, sign \
                 language interpreters, quiet workspaces, modified tasks, or any other support \
                 you can offer.",
            )
            .then(ACCESSIBILITY_EQUIPMENT),
            Step::text(
                ACCESSIBILITY_EQUIPMENT,
                "What accessibility equipment or technology does your company have available? \
                 This could include height-adjustable desks, screen magnification software, voice \
                 recognition software, hearing loops, wheelchair accessible facilities, or any \
                 other assistive technology.",
            )
            .then(COMPLETION),
            Step::confirmation(
                COMPLETION,
                "Excellent! I have all the information needed to create your inclusive job \
                 posting. This will help us connect you with qualified candidates who match your \
                 requirements.",
            ),
        ],
    )
}
