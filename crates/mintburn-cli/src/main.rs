//! mintburn
//!
//! Command-line front end for the tokenomics engine. Holds the inputs,
//! validates them, runs the engine and renders the result.
//!
//! Usage:
//!   mintburn compute --price <p> --purchases <n> --period <t> --review-quality <q> --return-probability <r> [--clamp]
//!   mintburn curve   --kind price|cashback|diminishing|discount [--to <x>] [--steps <n>]
//!   mintburn params  [--out <path>]
//!
//! Global flags: --config <path> (JSON engine config), --json (machine output).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use mintburn_core::{EngineConfig, UserInputs};
use mintburn_engine::TokenomicsEngine;

mod render;

use render::CurveKind;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "mintburn",
    version,
    about = "Mintburn: purchase cashback token mint/burn calculator"
)]
struct Args {
    /// Engine config file (JSON). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of a summary.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute mint, burn and price for one user's purchases.
    Compute {
        /// Price of each purchase.
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        /// Number of purchases in the session.
        #[arg(long, default_value_t = 1)]
        purchases: u32,
        /// Periods since the epoch (truncated to an integer).
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        period: f64,
        /// Review quality, 0 to 1.
        #[arg(long, default_value_t = 0.8)]
        review_quality: f64,
        /// Probability of a return, 0 to 1.
        #[arg(long, default_value_t = 0.1)]
        return_probability: f64,
        /// Pull out-of-range inputs into range instead of rejecting them.
        #[arg(long, default_value_t = false)]
        clamp: bool,
    },

    /// Print chart data for one of the model's curves.
    Curve {
        #[arg(long, value_enum)]
        kind: CurveKind,
        /// Upper end of the x range (periods for `cashback`).
        #[arg(long)]
        to: Option<f64>,
        /// Number of intervals to sample.
        #[arg(long, default_value_t = 20)]
        steps: usize,
    },

    /// Print the effective engine config, or write it to a file.
    Params {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ── Main ─────────────────────────────────────────────────────────────────────

/// Used when `RUST_LOG` is unset. `mintburn` is this binary's tracing target.
const DEFAULT_LOG_FILTER: &str = "warn,mintburn=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Compute {
            price,
            purchases,
            period,
            review_quality,
            return_probability,
            clamp,
        } => {
            let raw = UserInputs {
                purchase_price: price,
                number_of_purchases: purchases,
                period,
                review_quality,
                return_probability,
            };
            let inputs = prepare_inputs(raw, clamp)?;
            let engine = TokenomicsEngine::from_config(&config);
            let results = engine.compute(&inputs);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render::summary(&inputs, &results));
            }
            Ok(())
        }

        Command::Curve { kind, to, steps } => {
            let points = render::curve_points(kind, &config.params, to, steps)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                print!("{}", render::table(kind, &points));
            }
            Ok(())
        }

        Command::Params { out } => {
            let json = config.to_json_pretty()?;
            match out {
                Some(path) => cmd_write_params(&expand_tilde(&path), &json),
                None => {
                    println!("{json}");
                    Ok(())
                }
            }
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn cmd_write_params(path: &Path, json: &str) -> anyhow::Result<()> {
    if path.exists() {
        bail!(
            "{} already exists. Delete it first to write a fresh config.",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "engine config written");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Load and validate the engine config, or fall back to the defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let config = match path {
        Some(p) => {
            let p = expand_tilde(p);
            EngineConfig::load(&p).with_context(|| format!("loading config {}", p.display()))?
        }
        None => EngineConfig::default(),
    };
    config.validate().context("invalid engine config")?;
    Ok(config)
}

/// Validate the inputs, or clamp them into range when asked to.
fn prepare_inputs(raw: UserInputs, clamp: bool) -> anyhow::Result<UserInputs> {
    if !clamp {
        raw.validate().context("invalid inputs (pass --clamp to correct them)")?;
        return Ok(raw);
    }
    let fixed = raw.clamped();
    if fixed != raw {
        warn!(?raw, ?fixed, "inputs clamped into range");
    }
    Ok(fixed)
}

/// Expand a leading `~` to the user's home directory (`HOME` or `USERPROFILE`).
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}
