//! Step definitions — one question in a conversational flow.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How the user is expected to answer a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Choice,
    Number,
    Confirmation,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Choice => "choice",
            Self::Number => "number",
            Self::Confirmation => "confirmation",
        };
        write!(f, "{s}")
    }
}

/// A named predicate over the raw answer string.
#[derive(Clone)]
pub struct Validator {
    name: &'static str,
    check: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Validator {
    pub fn new(name: &'static str, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Name used in logs when an answer is rejected.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn accepts(&self, input: &str) -> bool {
        (self.check)(input)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name).finish()
    }
}

/// How the next step is chosen once an answer is accepted.
#[derive(Clone)]
pub enum Transition {
    /// Always go to the named step.
    Fixed(String),
    /// Pick the next step from the answer.
    Computed(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl Transition {
    pub fn fixed(id: impl Into<String>) -> Self {
        Self::Fixed(id.into())
    }

    pub fn computed(route: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(route))
    }

    /// Resolve the next step identifier for an accepted answer.
    pub fn resolve(&self, input: &str) -> String {
        match self {
            Self::Fixed(id) => id.clone(),
            Self::Computed(route) => route(input),
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(id) => f.debug_tuple("Fixed").field(id).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One question/prompt unit in a flow.
#[derive(Debug, Clone)]
pub struct Step {
    /// Unique within its flow; also the Response Record key.
    pub id: String,
    /// Text spoken or shown to the user.
    pub prompt: String,
    pub kind: InputKind,
    /// Choice labels. Only meaningful for `InputKind::Choice`.
    pub choices: Vec<String>,
    pub validator: Option<Validator>,
    /// `None` makes the step terminal.
    pub transition: Option<Transition>,
}

impl Step {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: InputKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            choices: Vec::new(),
            validator: None,
            transition: None,
        }
    }

    pub fn text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, InputKind::Text)
    }

    pub fn number(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, InputKind::Number)
    }

    pub fn confirmation(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, InputKind::Confirmation)
    }

    pub fn choice<I, S>(id: impl Into<String>, prompt: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut step = Self::new(id, prompt, InputKind::Choice);
        step.choices = choices.into_iter().map(Into::into).collect();
        step
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Continue to a fixed step after this one.
    pub fn then(mut self, next: impl Into<String>) -> Self {
        self.transition = Some(Transition::fixed(next));
        self
    }

    /// Continue to a step chosen from the answer.
    pub fn branch(mut self, route: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.transition = Some(Transition::computed(route));
        self
    }

    /// Whether this step accepts the raw input. Steps without a validator accept anything.
    pub fn accepts(&self, input: &str) -> bool {
        self.validator.as_ref().is_none_or(|v| v.accepts(input))
    }

    /// Identifier of the step that follows an accepted answer, if any.
    pub fn next_step(&self, input: &str) -> Option<String> {
        self.transition.as_ref().map(|t| t.resolve(input))
    }
}
