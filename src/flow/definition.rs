//! Flow — a validated, ordered list of steps.

use std::collections::HashMap;

use crate::error::FlowError;

use super::step::{InputKind, Step, Transition};

/// An ordered sequence of steps. The first step is the entry state.
#[derive(Debug, Clone)]
pub struct Flow {
    name: String,
    steps: Vec<Step>,
    index: HashMap<String, usize>,
}

impl Flow {
    /// Build a flow, checking that step ids are non-empty and unique and
    /// that every choice step offers at least one choice.
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Result<Self, FlowError> {
        let name = name.into();
        if steps.is_empty() {
            return Err(FlowError::Empty { flow: name });
        }

        let mut index = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            if step.id.is_empty() {
                return Err(FlowError::EmptyStepId { flow: name, index: i });
            }
            if step.kind == InputKind::Choice && step.choices.is_empty() {
                return Err(FlowError::MissingChoices {
                    flow: name,
                    id: step.id.clone(),
                });
            }
            if index.insert(step.id.clone(), i).is_some() {
                return Err(FlowError::DuplicateStep {
                    flow: name,
                    id: step.id.clone(),
                });
            }
        }

        Ok(Self { name, steps, index })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry(&self) -> &Step {
        // Non-empty by construction.
        &self.steps[0]
    }

    pub fn step(&self, id: &str) -> Option<&Step> {
        self.index.get(id).map(|&i| &self.steps[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether a step can never lead anywhere: it has no transition, or a
    /// fixed transition naming a step outside this flow. Computed
    /// transitions depend on the answer and are never terminal here.
    pub fn is_terminal(&self, step: &Step) -> bool {
        match &step.transition {
            None => true,
            Some(Transition::Fixed(next)) => !self.contains(next),
            Some(Transition::Computed(_)) => false,
        }
    }
}
