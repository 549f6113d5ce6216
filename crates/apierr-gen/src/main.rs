//! Binary entrypoint for the error generator.
use anyhow::{bail, Context};
use apierr_gen::{generate, is_up_to_date, RenderOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apierr-gen")]
#[command(about = "Generate typed API error constructors from YAML definitions")]
#[command(version)]
struct Cli {
    /// Error definitions file
    input: PathBuf,

    /// Rust file to write
    output: PathBuf,

    /// Path used to import `CustomError` in the generated module
    #[arg(long, default_value = "apierr")]
    crate_path: String,

    /// Tool name recorded in the generated header
    #[arg(long, default_value = "apierr-gen")]
    generator: String,

    /// Fail if the output is stale instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = RenderOptions {
        crate_path: cli.crate_path,
        generator: cli.generator,
    };

    if cli.check {
        let fresh = is_up_to_date(&cli.input, &cli.output, &options)
            .with_context(|| format!("checking {}", cli.output.display()))?;
        if !fresh {
            bail!(
                "{} is out of date with {}",
                cli.output.display(),
                cli.input.display()
            );
        }
        tracing::info!("{} is up to date", cli.output.display());
        return Ok(());
    }

    generate(&cli.input, &cli.output, &options)
        .with_context(|| format!("generating {}", cli.output.display()))?;
    Ok(())
}
