//! `shelter` — command shell for the pet adoption desk.
//!
//! Reads `shelter.toml` (or the path given with `--config`), admits the
//! configured roster into an in-memory shelter, and then reads one command per
//! line from stdin.
//!
//! # Usage
//!
//! ```text
//! shelter --config ./shelter.toml
//! > search --type cat --vaccinated-only
//! > adopt 1004 Malee Srisuk --phone 081-234-5678
//! > records
//! ```

mod config;
mod render;
mod shell;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{config::ShelterConfig, render::Money, shell::Shell};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Pet adoption desk shell")]
struct Args {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "shelter.toml")]
  config: PathBuf,

  /// First animal id to hand out (overrides the config file).
  #[arg(long)]
  id_base: Option<u64>,

  /// Start with an empty shelter instead of the configured roster.
  #[arg(long)]
  no_roster: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Log to stderr so the rendered tables on stdout stay clean.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  let mut cfg = ShelterConfig::load(&args.config)?;
  if let Some(base) = args.id_base {
    cfg.id_base = base;
  }
  if args.no_roster {
    cfg.roster.clear();
  }

  let shelter = cfg.build_shelter()?;
  let money = Money {
    symbol:   cfg.currency_symbol.clone(),
    decimals: cfg.currency_decimals,
  };

  let mut shell = Shell::new(shelter, money);
  shell.run(io::stdin().lock(), io::stdout().lock())?;

  tracing::info!(
    adoptions = shell.shelter().records().len(),
    total_fees = shell.shelter().total_fees().amount(),
    "session ended"
  );
  Ok(())
}
