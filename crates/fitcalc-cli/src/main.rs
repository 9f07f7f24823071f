//! `fitcalc` — print workout summaries for a list of sensor packages.
//!
//! # Usage
//!
//! ```
//! fitcalc                          # built-in demo packages
//! fitcalc --config workouts.toml --format json
//! ```

mod report;
mod settings;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use settings::{OutputFormat, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "fitcalc",
  version,
  about = "Distance, speed and calories for running, walking and swimming"
)]
struct Args {
  /// Path to a TOML file with `packages` and `display_names`.
  #[arg(short, long, value_name = "FILE", default_value = "fitcalc.toml")]
  config: PathBuf,

  /// Output format; overrides the config file.
  #[arg(long, value_enum)]
  format: Option<OutputFormat>,

  /// Stop at the first invalid package.
  #[arg(long)]
  fail_fast: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr; stdout carries only summaries.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let settings = Settings::load(&args.config)?;
  let format = settings.output_format(args.format);

  let stdout = io::stdout();
  let outcome = report::run(&settings, format, args.fail_fast, &mut stdout.lock())?;
  tracing::debug!(printed = outcome.printed, failed = outcome.failed, "done");

  if outcome.failed > 0 {
    anyhow::bail!(
      "{} of {} packages failed",
      outcome.failed,
      outcome.failed + outcome.printed
    );
  }
  Ok(())
}
