use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logdigest", about = "Trading-log digest mailer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the log, build the digest, and email the report
    Run {
        /// Render the report but skip the send
        #[arg(long)]
        dry_run: bool,
        /// Print the run outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rendered report to stdout, never sending
    Preview,
}
