mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "exam-ics")]
#[command(about = "Exam schedule to ICS calendar export tool")]
#[command(version)]
struct Cli {
    /// Path to the exam schedule file (prompted for when omitted)
    #[arg(short, long)]
    file: Option<String>,

    /// Comma-separated module codes (prompted for when omitted)
    #[arg(short, long)]
    modules: Option<String>,

    /// Calendar name
    #[arg(long)]
    calendar_name: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("exam_ics={log_level},exam_ics_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::generate_command(commands::GenerateParams {
        file: cli.file,
        modules: cli.modules,
        calendar_name: cli.calendar_name,
    })
}
