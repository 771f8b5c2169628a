//! CLI channel — stdin/stdout conversation for local use.

use async_trait::async_trait;
use futures::stream;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::channels::{Channel, IncomingMessage, MessageStream};
use crate::error::ChannelError;
use crate::flow::{InputKind, Outcome, Reply};

/// Reads answers from stdin, one per line, and prints replies to stdout.
pub struct CliChannel;

impl CliChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Text printed for a reply: its messages, then numbered choices when the
/// pending step is multiple-choice.
pub fn render_reply(reply: &Reply) -> String {
    let mut lines: Vec<String> = reply.messages.clone();

    if let Some(step) = reply.step() {
        if step.kind == InputKind::Choice {
            for (i, choice) in step.choices.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, choice));
            }
        }
    }

    if matches!(reply.outcome, Outcome::Closed) && lines.is_empty() {
        lines.push("(conversation finished; /restart to begin again, /quit to exit)".to_string());
    }

    lines.join("\n")
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(&self) -> Result<MessageStream, ChannelError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            eprint!("> ");
                            continue;
                        }
                        let msg = IncomingMessage::new("cli", &line);
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        let stream = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|msg| (msg, rx))
        });

        Ok(Box::pin(stream))
    }

    async fn respond(&self, reply: &Reply) -> Result<(), ChannelError> {
        let text = render_reply(reply);
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("\n{text}\n\n").as_bytes()).await?;
        stdout.flush().await?;
        if !reply.is_complete() {
            eprint!("> ");
        }
        Ok(())
    }
}
