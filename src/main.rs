use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueHint};
use msgcollect::{
    LogFacadeSink, LogMessageCollector, MessageCollector, MessageLocation, Severity,
    DEFAULT_TARGET,
};
use serde::Deserialize;

#[derive(Debug, Parser)]
struct Args {
    #[clap(subcommand)]
    subcommand: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Replay(ReplayArgs),
}

/// Report a recorded list of compiler messages and fail if any of them is an error.
#[derive(Debug, Parser)]
struct ReplayArgs {
    /// Json file with an array of messages.
    ///
    /// Ex: [{"severity": "error", "message": "unresolved reference", "path": "Foo.kt", "line": 3, "column": 5}]
    #[clap(value_hint = ValueHint::FilePath)]
    messages: PathBuf,

    /// Log target the messages are written to.
    #[clap(long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Write the collected errors to this file as json.
    #[clap(long, value_hint = ValueHint::FilePath)]
    errors_output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Message {
    severity: Severity,
    message: String,
    #[serde(flatten)]
    location: MessageLocation,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.subcommand {
        Command::Replay(replay) => command_replay(replay),
    }
}

fn command_replay(replay: ReplayArgs) -> anyhow::Result<()> {
    let content = std::fs::read(&replay.messages)
        .with_context(|| format!("Failed to read {}", replay.messages.display()))?;
    let messages = serde_json::from_slice::<Vec<Message>>(&content)
        .with_context(|| format!("Failed to parse {}", replay.messages.display()))?;
    log::info!(
        "Replaying {} messages from {}",
        messages.len(),
        replay.messages.display()
    );

    let mut collector = LogMessageCollector::new(LogFacadeSink::new(replay.target));
    for message in &messages {
        collector.report(message.severity, &message.message, &message.location);
    }

    if let Some(output) = &replay.errors_output {
        let content = serde_json::to_vec_pretty(collector.collected_errors())?;
        std::fs::write(output, content)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    if collector.has_errors() {
        anyhow::bail!(
            "Compilation failed with {} error(s)",
            collector.error_count()
        );
    }

    Ok(())
}
