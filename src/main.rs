use inclusive_jobs::channels::CliChannel;
use inclusive_jobs::config::RunConfig;
use inclusive_jobs::conversation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::from_env(std::env::args().nth(1))?;
    let mut engine = conversation::prepare(&config)?;

    eprintln!("Inclusive Jobs v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Flow: {} ({} steps)", config.flow, engine.flow().len());
    eprintln!("   Language: {}", config.conversation.language);
    eprintln!("   Type your answer and press Enter. /repeat, /restart, /quit.\n");

    let channel = CliChannel::new();

    match conversation::run(config.flow, &mut engine, &channel).await? {
        Some(result) => {
            eprintln!("{}\n", result.summary());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => eprintln!("Conversation ended before all questions were answered."),
    }

    Ok(())
}
