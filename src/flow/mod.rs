//! Flow engine — steps, flows, sessions and the engine that drives them.
//!
//! A flow is an ordered list of question steps. The engine starts at the
//! first step, validates each answer, records it under the step id, and
//! follows the step's transition until no further step exists. The result
//! is a flat `ResponseRecord` that `crate::model` turns into a structured
//! profile or job posting.

pub mod definition;
pub mod engine;
pub mod session;
pub mod step;

pub use definition::Flow;
pub use engine::{FlowEngine, Outcome, Reply, StepView};
pub use session::{ResponseRecord, SessionState, Speaker, TranscriptEntry, leading_integer};
pub use step::{InputKind, Step, Transition, Validator};
