//! FlowEngine — drives one session through a flow, one answer at a time.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ConversationConfig;

use super::definition::Flow;
use super::session::{ResponseRecord, SessionState, Speaker, TranscriptEntry};
use super::step::{InputKind, Step};

/// What the host needs to render a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub id: String,
    pub kind: InputKind,
    pub choices: Vec<String>,
}

impl From<&Step> for StepView {
    fn from(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            kind: step.kind,
            choices: step.choices.clone(),
        }
    }
}

/// Where the session stands after a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Waiting for an answer to this step.
    Asking(StepView),
    /// The answer failed validation; still waiting on the same step.
    Rejected(StepView),
    /// The flow finished with these answers.
    Completed(ResponseRecord),
    /// The session had already finished; the input was ignored.
    Closed,
}

/// Outbound messages, in speaking order, plus the resulting outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub messages: Vec<String>,
    pub outcome: Outcome,
}

impl Reply {
    /// The step now awaiting an answer, if any.
    pub fn step(&self) -> Option<&StepView> {
        match &self.outcome {
            Outcome::Asking(view) | Outcome::Rejected(view) => Some(view),
            _ => None,
        }
    }

    /// The final record, if this reply completed the flow.
    pub fn record(&self) -> Option<&ResponseRecord> {
        match &self.outcome {
            Outcome::Completed(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, Outcome::Completed(_))
    }
}

/// Runs a single flow session.
///
/// Every call is a synchronous state transition. Invalid answers never
/// error: they produce the configured re-prompt and leave the session where
/// it was.
pub struct FlowEngine {
    flow: Flow,
    config: ConversationConfig,
    state: SessionState,
}

impl FlowEngine {
    pub fn new(flow: Flow, config: ConversationConfig) -> Self {
        let state = SessionState::new(flow.entry().id.clone());
        Self {
            flow,
            config,
            state,
        }
    }

    /// Begin a fresh session: greeting, then the entry step's prompt.
    pub fn start(&mut self) -> Reply {
        self.state = SessionState::new(self.flow.entry().id.clone());
        info!(
            session_id = %self.state.id,
            flow = %self.flow.name(),
            "Conversation started"
        );

        let greeting = self.config.greeting.clone();
        self.state.push(Speaker::Assistant, greeting.clone());
        let entry = self.flow.entry().id.clone();
        self.enter(entry, vec![greeting])
    }

    /// Drop everything collected so far and start again from the entry step.
    pub fn restart(&mut self) -> Reply {
        debug!(
            session_id = %self.state.id,
            answered = self.state.record.len(),
            "Restarting conversation"
        );
        self.start()
    }

    /// Submit the user's raw answer to the current step.
    ///
    /// 1. Reject (re-prompt, no state change) if the step's validator fails.
    /// 2. Record the answer under the step id.
    /// 3. Resolve the next step; an unknown or missing id completes the flow.
    /// 4. Otherwise move to the next step and ask its question.
    pub fn submit(&mut self, input: &str) -> Reply {
        if self.state.completed {
            debug!(session_id = %self.state.id, "Input after completion ignored");
            return Reply {
                messages: Vec::new(),
                outcome: Outcome::Closed,
            };
        }

        self.state.push(Speaker::User, input);

        let Some(step) = self.flow.step(&self.state.current_step) else {
            warn!(
                session_id = %self.state.id,
                step = %self.state.current_step,
                "Current step missing from flow, ending conversation"
            );
            return self.finish(Vec::new());
        };

        if !step.accepts(input) {
            debug!(
                session_id = %self.state.id,
                step = %step.id,
                validator = step.validator.as_ref().map(|v| v.name()).unwrap_or_default(),
                "Answer rejected"
            );
            let view = StepView::from(step);
            let reprompt = self.config.reprompt.clone();
            self.state.push(Speaker::Assistant, reprompt.clone());
            return Reply {
                messages: vec![reprompt],
                outcome: Outcome::Rejected(view),
            };
        }

        let next = step.next_step(input);
        self.state.record.insert(step.id.clone(), input);
        debug!(
            session_id = %self.state.id,
            step = %step.id,
            next = next.as_deref().unwrap_or(""),
            "Answer recorded"
        );

        match next {
            Some(next) if self.flow.contains(&next) => self.enter(next, Vec::new()),
            _ => self.finish(Vec::new()),
        }
    }

    /// Current question text, for re-speaking. `None` once complete.
    pub fn repeat_prompt(&self) -> Option<&str> {
        if self.state.completed {
            return None;
        }
        self.flow
            .step(&self.state.current_step)
            .map(|step| step.prompt.as_str())
    }

    /// The step awaiting an answer. `None` once complete.
    pub fn pending_step(&self) -> Option<StepView> {
        if self.state.completed {
            return None;
        }
        self.flow.step(&self.state.current_step).map(StepView::from)
    }

    /// Re-send the current question without touching the transcript.
    pub fn repeat(&self) -> Reply {
        match (self.repeat_prompt(), self.pending_step()) {
            (Some(prompt), Some(view)) => Reply {
                messages: vec![prompt.to_string()],
                outcome: Outcome::Asking(view),
            },
            _ => Reply {
                messages: Vec::new(),
                outcome: Outcome::Closed,
            },
        }
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    pub fn session_id(&self) -> Uuid {
        self.state.id
    }

    pub fn current_step(&self) -> &str {
        &self.state.current_step
    }

    pub fn record(&self) -> &ResponseRecord {
        &self.state.record
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.state.transcript
    }

    pub fn is_complete(&self) -> bool {
        self.state.completed
    }

    /// Number of steps answered so far.
    pub fn answered(&self) -> usize {
        self.state.record.len()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Move to `step_id` and ask its question. A step that can never lead
    /// anywhere needs no answer, so entering it also completes the flow.
    fn enter(&mut self, step_id: String, mut messages: Vec<String>) -> Reply {
        let Some(step) = self.flow.step(&step_id) else {
            return self.finish(messages);
        };
        let terminal = self.flow.is_terminal(step);
        let view = StepView::from(step);
        let prompt = step.prompt.clone();

        self.state.current_step = step_id;
        self.state.push(Speaker::Assistant, prompt.clone());
        messages.push(prompt);

        if terminal {
            return self.finish(messages);
        }
        Reply {
            messages,
            outcome: Outcome::Asking(view),
        }
    }

    fn finish(&mut self, mut messages: Vec<String>) -> Reply {
        self.state.completed = true;
        let closing = self.config.closing.clone();
        self.state.push(Speaker::Assistant, closing.clone());
        messages.push(closing);

        info!(
            session_id = %self.state.id,
            flow = %self.flow.name(),
            answered = self.state.record.len(),
            "Conversation complete"
        );
        Reply {
            messages,
            outcome: Outcome::Completed(self.state.record.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::flows::validators::{non_empty, percentage};
    use crate::flows::{FlowKind, disability};

    use super::*;

    fn engine(steps: Vec<Step>) -> FlowEngine {
        FlowEngine::new(Flow::new("test", steps).unwrap(), ConversationConfig::default())
    }

    fn name_then_done() -> FlowEngine {
        engine(vec![
            Step::text("name", "What's your name?")
                .with_validator(non_empty())
                .then("done"),
            Step::confirmation("done", "Thanks!"),
        ])
    }

    #[test]
    fn start_greets_then_asks_entry_question() {
        let mut engine = name_then_done();
        let reply = engine.start();
        assert_eq!(
            reply.messages,
            vec![
                ConversationConfig::default().greeting,
                "What's your name?".to_string()
            ]
        );
        assert_eq!(reply.step().unwrap().id, "name");
        assert_eq!(engine.transcript().len(), 2);
        assert!(!engine.is_complete());
    }

    #[test]
    fn rejected_answer_changes_nothing() {
        let mut engine = name_then_done();
        engine.start();

        let reply = engine.submit("");
        assert_eq!(reply.messages, vec![ConversationConfig::default().reprompt]);
        assert!(matches!(reply.outcome, Outcome::Rejected(ref v) if v.id == "name"));
        assert_eq!(engine.current_step(), "name");
        assert!(engine.record().is_empty());
        assert!(!engine.is_complete());
    }

    #[test]
    fn reaching_terminal_step_completes() {
        let mut engine = name_then_done();
        engine.start();
        engine.submit("");

        let reply = engine.submit("Alice");
        assert!(reply.is_complete());
        assert_eq!(
            reply.messages,
            vec!["Thanks!".to_string(), ConversationConfig::default().closing]
        );
        let record = reply.record().unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some("Alice"));
        assert_eq!(engine.current_step(), "done");
        assert!(engine.is_complete());
    }

    #[test]
    fn numeric_answer_is_stored_as_given() {
        let mut engine = engine(vec![
            Step::number("score", "0 to 100?")
                .with_validator(percentage())
                .then("next"),
            Step::text("next", "Anything else?"),
        ]);
        engine.start();

        assert!(matches!(engine.submit("150").outcome, Outcome::Rejected(_)));
        assert!(engine.record().is_empty());

        let reply = engine.submit("70");
        assert_eq!(engine.record().get("score"), Some("70"));
        assert!(reply.is_complete());
    }

    #[test]
    fn unvalidated_step_records_verbatim() {
        let mut engine = engine(vec![
            Step::text("notes", "Notes?").then("more"),
            Step::text("more", "More?").then("end"),
            Step::confirmation("end", "Bye"),
        ]);
        engine.start();
        engine.submit("  spaced out  ");
        engine.submit("");
        assert_eq!(engine.record().get("notes"), Some("  spaced out  "));
        assert_eq!(engine.record().get("more"), Some(""));
        assert!(engine.is_complete());
    }

    #[test]
    fn missing_transition_completes_without_moving() {
        let mut engine = engine(vec![
            Step::text("a", "A?").branch(|input| input.to_string()),
            Step::text("b", "B?").then("a"),
        ]);
        engine.start();

        let reply = engine.submit("somewhere-else");
        assert!(reply.is_complete());
        assert_eq!(reply.messages, vec![ConversationConfig::default().closing]);
        assert_eq!(engine.current_step(), "a");
        assert_eq!(reply.record().unwrap().get("a"), Some("somewhere-else"));
    }

    #[test]
    fn revisit_overwrites_answer() {
        let mut engine = engine(vec![
            Step::text("a", "A?").then("b"),
            Step::text("b", "B?").branch(|input| {
                if input == "again" { "a".into() } else { "stop".into() }
            }),
        ]);
        engine.start();
        engine.submit("first");
        engine.submit("again");
        assert_eq!(engine.current_step(), "a");
        engine.submit("second");
        let reply = engine.submit("done");

        let record = reply.record().unwrap();
        assert_eq!(record.get("a"), Some("second"));
        assert_eq!(record.get("b"), Some("done"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn no_disability_skips_to_completion() {
        let mut engine = FlowEngine::new(
            FlowKind::Disability.flow().unwrap(),
            ConversationConfig::default(),
        );
        engine.start();

        let reply = engine.submit("I don't have a disability");
        assert!(reply.is_complete());
        assert_eq!(engine.current_step(), disability::COMPLETION);
        let keys: Vec<&str> = reply.record().unwrap().keys().collect();
        assert_eq!(keys, [disability::DISABILITY_TYPE]);
    }

    #[test]
    fn disability_goes_to_severity() {
        let mut engine = FlowEngine::new(
            FlowKind::Disability.flow().unwrap(),
            ConversationConfig::default(),
        );
        engine.start();

        let reply = engine.submit("I have a hearing disability");
        assert_eq!(engine.current_step(), disability::SEVERITY);
        let view = reply.step().unwrap();
        assert_eq!(view.kind, InputKind::Choice);
        assert_eq!(view.choices.len(), 4);
    }

    #[test]
    fn record_lists_answers_in_order() {
        let mut engine = FlowEngine::new(
            FlowKind::Disability.flow().unwrap(),
            ConversationConfig::default(),
        );
        engine.start();
        engine.submit("I have a visual disability");
        engine.submit("Moderate - some limitations in daily activities");
        engine.submit("Screen reader software, large monitors");
        let reply = engine.submit("JAWS");

        let keys: Vec<&str> = reply.record().unwrap().keys().collect();
        assert_eq!(
            keys,
            [
                disability::DISABILITY_TYPE,
                disability::SEVERITY,
                disability::ACCOMMODATIONS,
                disability::ASSISTIVE_TECH
            ]
        );
    }

    #[test]
    fn submit_after_completion_is_closed() {
        let mut engine = name_then_done();
        engine.start();
        engine.submit("Alice");
        let transcript_len = engine.transcript().len();

        let reply = engine.submit("Bob");
        assert_eq!(reply.outcome, Outcome::Closed);
        assert!(reply.messages.is_empty());
        assert_eq!(engine.record().get("name"), Some("Alice"));
        assert_eq!(engine.transcript().len(), transcript_len);
    }

    #[test]
    fn restart_is_idempotent() {
        let mut engine = name_then_done();
        let first = engine.start();
        let first_session = engine.session_id();
        engine.submit("Alice");

        let again = engine.restart();
        assert_eq!(again, first);
        assert_ne!(engine.session_id(), first_session);
        assert_eq!(engine.current_step(), "name");
        assert!(engine.record().is_empty());
        assert!(!engine.is_complete());
        assert_eq!(engine.transcript().len(), 2);

        let twice = engine.restart();
        assert_eq!(twice, first);
        assert_eq!(engine.transcript().len(), 2);
    }

    #[test]
    fn transcript_keeps_rejected_answers() {
        let mut engine = name_then_done();
        engine.start();
        engine.submit("   ");
        let speakers: Vec<Speaker> = engine.transcript().iter().map(|e| e.speaker).collect();
        assert_eq!(
            speakers,
            [
                Speaker::Assistant,
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant
            ]
        );
    }

    #[test]
    fn repeat_prompt_tracks_current_step() {
        let mut engine = name_then_done();
        engine.start();
        assert_eq!(engine.repeat_prompt(), Some("What's your name?"));
        engine.submit("Alice");
        assert_eq!(engine.repeat_prompt(), None);
    }

    #[test]
    fn repeat_does_not_touch_transcript() {
        let mut engine = name_then_done();
        engine.start();
        let before = engine.transcript().len();

        let reply = engine.repeat();
        assert_eq!(reply.messages, vec!["What's your name?".to_string()]);
        assert_eq!(reply.step().unwrap().id, "name");
        assert_eq!(engine.transcript().len(), before);

        engine.submit("Alice");
        assert_eq!(engine.repeat().outcome, Outcome::Closed);
        assert!(engine.pending_step().is_none());
    }

    #[test]
    fn terminal_entry_step_completes_on_start() {
        let mut engine = engine(vec![Step::confirmation("only", "Nothing to ask.")]);
        let reply = engine.start();
        assert!(reply.is_complete());
        assert_eq!(reply.messages.len(), 3);
        assert!(reply.record().unwrap().is_empty());
    }

    #[test]
    fn submit_without_start_uses_entry_step() {
        let mut engine = name_then_done();
        let reply = engine.submit("Alice");
        assert!(reply.is_complete());
        assert_eq!(engine.answered(), 1);
    }
}
