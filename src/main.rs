use clap::Parser;
use logdigest::application::report::RunOutcome;
use logdigest::cli::commands::{Cli, Commands};
use logdigest::config::Config;
use logdigest::LogDigest;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = LogDigest::new(config);
    if let Err(e) = run_command(app, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(app: LogDigest, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Run { dry_run, json } => {
            let outcome = app.run(dry_run).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }
            match outcome {
                RunOutcome::Sent(summary) => println!(
                    "Report sent to {} recipient(s): {} ({} entries, {} invalid rows)",
                    summary.recipients,
                    summary.subject,
                    summary.entry_count,
                    summary.invalid_count
                ),
                RunOutcome::Rendered(message) => {
                    println!("Dry run, nothing sent.\nSubject: {}\n", message.subject);
                    print!("{}", message.text_body);
                }
                RunOutcome::Skipped { reason } => println!("Skipped: {reason}"),
            }
        }
        Commands::Preview => match app.run(true).await? {
            RunOutcome::Rendered(message) => {
                println!("Subject: {}\n", message.subject);
                print!("{}", message.text_body);
            }
            RunOutcome::Skipped { reason } => println!("Skipped: {reason}"),
            RunOutcome::Sent(_) => {}
        },
    }
    Ok(())
}
