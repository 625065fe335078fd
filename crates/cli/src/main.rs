//! adfdoc CLI
//!
//! Appends the Markdown documentation of one Data Factory pipeline to a
//! Markdown document.

use std::io::IsTerminal;
use std::path::PathBuf;

use adfdoc_core::config::loader::load_config;
use adfdoc_core::{generate_pipeline_docs, GenerateOptions};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "adfdoc", version)]
#[command(about = "Document a Data Factory pipeline as Markdown", long_about = None)]
struct Cli {
    /// Pipeline JSON file to document
    pipeline: PathBuf,

    /// Markdown file to append to (created if missing)
    output: PathBuf,

    /// Optional TOML configuration file
    #[arg(long, env = "ADFDOC_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so the generated output and stdout stay separate
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adfdoc=info,adfdoc_core=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    debug!("missing values render as {:?}", config.missing_value);

    let options = GenerateOptions::new(&cli.pipeline, &cli.output).with_config(config);
    generate_pipeline_docs(&options)?;

    println!(
        "{} {} -> {}",
        "✓ Documented".green().bold(),
        cli.pipeline.display(),
        cli.output.display()
    );

    Ok(())
}
