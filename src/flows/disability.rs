//! Disability assessment — what the user needs at work.

use crate::error::FlowError;
use crate::flow::{Flow, Step};

pub const DISABILITY_TYPE: &str = "disability-type";
pub const SEVERITY: &str = "severity";
pub const ACCOMMODATIONS: &str = "accommodations";
pub const ASSISTIVE_TECH: &str = "assistive-tech";
pub const COMPLETION: &str = "completion";

/// Skip straight to the end when the user reports no disability.
/// Matching is case-sensitive.
pub fn route_after_type(answer: &str) -> String {
    if answer.contains("don't have") || answer.contains("none") {
        COMPLETION.to_string()
    } else {
        SEVERITY.to_string()
    }
}

pub fn flow() -> Result<Flow, FlowError> {
    Flow::new(
        "disability",
        vec![
            Step::choice(
                DISABILITY_TYPE,
                "To help me understand your needs better, could you tell me about any disabilities \
                 or conditions you have? You can say 'none' if this doesn't apply to you, or choose \
                 from options like mobility, visual, hearing, cognitive, neurological, mental \
                 health, chronic illness, or multiple disabilities.",
                [
                    "I have a mobility or physical disability",
                    "I have a visual disability",
                    "I have a hearing disability",
                    "I have a cognitive disability",
                    "I have a neurological condition",
                    "I have mental health conditions",
                    "I have a chronic illness",
                    "I have multiple disabilities",
                    "I don't have a disability",
                ],
            )
            .branch(route_after_type),
            Step::choice(
                SEVERITY,
                "Thank you for sharing that. How would you describe the impact on your daily \
                 activities? Is it mild with minimal impact, moderate with some limitations, \
                 severe with significant limitations requiring accommodations, or profound \
                 requiring extensive support?",
                [
                    "Mild - minimal impact on daily activities",
                    "Moderate - some limitations in daily activities",
                    "Severe - significant limitations requiring accommodations",
                    "Profound - extensive support and accommodations needed",
                ],
            )
            .then(ACCOMMODATIONS),
            Step::text(
                ACCOMMODATIONS,
                "What types of workplace accommodations typically help you perform your best? For \
                 example, flexible work hours, screen reader software, ergonomic workspace, quiet \
                 environment, or anything else that comes to mind.",
            )
            .then(ASSISTIVE_TECH),
            Step::text(
                ASSISTIVE_TECH,
                "Do you use any assistive technology or tools that help you work effectively? This \
                 could include screen readers, voice recognition software, mobility aids, \
                 communication devices, or any other tools.",
            )
            .then(COMPLETION),
            Step::confirmation(
                COMPLETION,
                "Thank you for providing this information. This helps me understand your needs \
                 better so I can find the most suitable job opportunities for you.",
            ),
        ],
    )
}
