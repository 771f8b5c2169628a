//! Job-seeker profile — contact details, preferences and background.

use crate::error::FlowError;
use crate::flow::{Flow, Step};

use super::validators::{email, non_empty};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const LOCATION: &str = "location";
pub const ADDRESS: &str = "address";
pub const DESIRED_POSITION: &str = "desired-position";
pub const WORK_TYPE: &str = "work-type";
pub const PREFERRED_LOCATION: &str = "preferred-location";
pub const MAX_DISTANCE: &str = "max-distance";
pub const SALARY: &str = "salary";
pub const EDUCATION: &str = "education";
pub const EXPERIENCE: &str = "experience";
pub const SKILLS: &str = "skills";
pub const COMPLETION: &str = "completion";

pub fn flow() -> Result<Flow, FlowError> {
    Flow::new(
        "profile",
        vec![
            Step::text(NAME, "Let's start with the basics. What's your full name?")
                .with_validator(non_empty())
                .then(EMAIL),
            Step::text(
                EMAIL,
                "What's your email address? I'll need this for job applications and communication.",
            )
            .with_validator(email())
            .then(PHONE),
            Step::text(
                PHONE,
                "Could you share your phone number? This is optional but helpful for employers to \
                 contact you.",
            )
            .then(LOCATION),
            Step::text(
                LOCATION,
                "What city and state are you located in? Or country if you're outside the US?",
            )
            .with_validator(non_empty())
            .then(ADDRESS),
            Step::text(
                ADDRESS,
                "Would you like to provide your full address? This is optional and only used for \
                 calculating commute distances.",
            )
            .then(DESIRED_POSITION),
            Step::text(
                DESIRED_POSITION,
                "What type of job are you looking for? For example, software developer, teacher, \
                 customer service representative, or any other position.",
            )
            .with_validator(non_empty())
            .then(WORK_TYPE),
            Step::choice(
                WORK_TYPE,
                "What type of work arrangement would you prefer? Full-time, part-time, contract \
                 work, remote work, hybrid, or flexible schedule?",
                [
                    "Full-time",
                    "Part-time",
                    "Contract work",
                    "Remote work",
                    "Hybrid (mix of remote and office)",
                    "Flexible schedule",
                ],
            )
            .then(PREFERRED_LOCATION),
            Step::text(
                PREFERRED_LOCATION,
                "Where would you like to work? You can say the same city you live in, a different \
                 city, or 'remote' if location doesn't matter.",
            )
            .then(MAX_DISTANCE),
            Step::text(
                MAX_DISTANCE,
                "How far are you willing to travel for work? Please tell me the maximum distance in \
                 kilometers or miles, or say 'no limit' for remote work.",
            )
            .then(SALARY),
            Step::text(
                SALARY,
                "What salary range are you looking for? You can give me a range like '40,000 to \
                 60,000 dollars' or say 'negotiable' if you're flexible.",
            )
            .then(EDUCATION),
            Step::text(
                EDUCATION,
                "Could you tell me about your educational background? Include any degrees, \
                 certifications, or relevant training you have.",
            )
            .then(EXPERIENCE),
            Step::text(
                EXPERIENCE,
                "Please describe your work experience. Tell me about your previous jobs, \
                 responsibilities, and any achievements you're proud of.",
            )
            .then(SKILLS),
            Step::text(
                SKILLS,
                "What are your key skills? I'll help you identify relevant ones. You can mention \
                 things like communication, teamwork, computer skills, specific software, \
                 languages you speak, or any other abilities.",
            )
            .then(COMPLETION),
            Step::confirmation(
                COMPLETION,
                "Perfect! I have all the information I need to create your profile and start \
                 finding great job matches for you.",
            ),
        ],
    )
}
