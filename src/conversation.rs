//! Host loop — binds one flow engine to one channel.

use futures::StreamExt;
use tracing::{debug, info};

use crate::channels::Channel;
use crate::config::RunConfig;
use crate::error::Result;
use crate::flow::{FlowEngine, InputKind, Outcome, StepView};
use crate::flows::FlowKind;
use crate::model::{ParsedConversation, parse_conversation_data};

/// What a line of user input asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Repeat,
    /// Submit this text as the answer to the current step.
    Answer(String),
}

/// Interpret raw input against the step awaiting an answer.
///
/// On a multiple-choice step a bare number picks that choice (1-based), the
/// same as clicking its button.
pub fn interpret(input: &str, pending: Option<&StepView>) -> Command {
    match input.trim() {
        "/quit" => return Command::Quit,
        "/restart" => return Command::Restart,
        "/repeat" => return Command::Repeat,
        _ => {}
    }

    if let Some(step) = pending.filter(|s| s.kind == InputKind::Choice) {
        if let Ok(n) = input.trim().parse::<usize>() {
            if let Some(choice) = n.checked_sub(1).and_then(|i| step.choices.get(i)) {
                return Command::Answer(choice.clone());
            }
        }
    }

    Command::Answer(input.to_string())
}

/// Build the configured flow and an engine ready to start it.
pub fn prepare(config: &RunConfig) -> Result<FlowEngine> {
    let flow = config.flow.flow()?;
    debug!(flow = %config.flow, steps = flow.len(), "Flow built");
    Ok(FlowEngine::new(flow, config.conversation.clone()))
}

/// Run a conversation until the flow completes or input ends.
///
/// Returns the structured result on completion, `None` if the user quit or
/// the channel ran dry first.
pub async fn run(
    kind: FlowKind,
    engine: &mut FlowEngine,
    channel: &dyn Channel,
) -> Result<Option<ParsedConversation>> {
    let mut messages = channel.start().await?;
    info!(channel = channel.name(), flow = %kind, "Channel started");

    let reply = engine.start();
    channel.respond(&reply).await?;
    if let Outcome::Completed(record) = reply.outcome {
        channel.shutdown().await?;
        return Ok(Some(parse_conversation_data(&record, kind)));
    }

    while let Some(msg) = messages.next().await {
        let command = interpret(&msg.content, engine.pending_step().as_ref());
        debug!(channel = %msg.channel, message_id = %msg.id, ?command, "Input received");

        let reply = match command {
            Command::Quit => break,
            Command::Restart => engine.restart(),
            Command::Repeat => engine.repeat(),
            Command::Answer(answer) => engine.submit(&answer),
        };
        channel.respond(&reply).await?;

        if let Outcome::Completed(record) = reply.outcome {
            channel.shutdown().await?;
            return Ok(Some(parse_conversation_data(&record, kind)));
        }
    }

    info!(
        session_id = %engine.session_id(),
        answered = engine.answered(),
        "Conversation ended before completion"
    );
    channel.shutdown().await?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_step() -> StepView {
        StepView {
            id: "work-type".into(),
            kind: InputKind::Choice,
            choices: vec!["Full-time".into(), "Part-time".into()],
        }
    }

    #[test]
    fn prepare_builds_each_catalog_flow() {
        for kind in FlowKind::ALL {
            let config = RunConfig {
                flow: kind,
                conversation: Default::default(),
            };
            let engine = prepare(&config).unwrap();
            assert_eq!(engine.flow().name(), kind.flow().unwrap().name());
            assert!(!engine.is_complete());
        }
    }

    #[test]
    fn commands_are_recognized() {
        assert_eq!(interpret("/quit", None), Command::Quit);
        assert_eq!(interpret(" /restart ", None), Command::Restart);
        assert_eq!(interpret("/repeat", None), Command::Repeat);
    }

    #[test]
    fn number_picks_choice() {
        let step = choice_step();
        assert_eq!(interpret("2", Some(&step)), Command::Answer("Part-time".into()));
        assert_eq!(interpret(" 1 ", Some(&step)), Command::Answer("Full-time".into()));
    }

    #[test]
    fn out_of_range_number_is_passed_through() {
        let step = choice_step();
        assert_eq!(interpret("0", Some(&step)), Command::Answer("0".into()));
        assert_eq!(interpret("3", Some(&step)), Command::Answer("3".into()));
    }

    #[test]
    fn numbers_on_other_steps_are_answers() {
        let step = StepView {
            id: "score".into(),
            kind: InputKind::Number,
            choices: vec![],
        };
        assert_eq!(interpret("2", Some(&step)), Command::Answer("2".into()));
        assert_eq!(interpret("2", None), Command::Answer("2".into()));
    }
}
