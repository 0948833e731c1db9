//! Stack SAN Domain Report
//!
//! Prints the SAN domains of every CloudFront distribution tagged with a
//! stack name, plus a grand total. Credentials come from the ambient AWS
//! environment.
//!
//! # Usage
//! ```bash
//! # Report for the prod stack
//! stack-san-domains --stack-name prod
//!
//! # Pick a profile/region and show debug diagnostics
//! AWS_PROFILE=ops AWS_REGION=us-east-1 RUST_LOG=debug stack-san-domains --stack-name prod
//! ```
//!
//! The report goes to stdout; timestamped diagnostics go to stderr.

use std::io::IsTerminal;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stack_san_domains::{
    report_for_stack, AmbientSession, CloudFrontClient, RunOutcome, StackName, TaggingClient,
};

/// Default diagnostics filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "info,aws_config=warn,aws_smithy_runtime=warn";

#[derive(Parser, Debug)]
#[command(name = "stack-san-domains")]
#[command(about = "List the SAN domains of CloudFront distributions tagged with a stack name")]
#[command(version)]
struct Cli {
    /// The stack name to filter resources (value of the `stack-name` tag)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    stack_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let stack = match StackName::new(cli.stack_name) {
        Ok(stack) => stack,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    info!(stack_name = %stack, "🚀 Building SAN domain report");

    let outcome = report_for_stack(
        &AmbientSession,
        |config| (TaggingClient::new(config), CloudFrontClient::new(config)),
        &stack,
        std::io::stdout(),
    )
    .await?;

    match outcome {
        RunOutcome::NoResources => {
            info!(stack_name = %stack, "No tagged distributions");
        }
        RunOutcome::Completed(summary) => {
            info!(
                discovered = summary.discovered,
                reported = summary.reported,
                skipped = summary.skipped,
                total_domains = summary.total_domains,
                "✅ Report complete"
            );
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
