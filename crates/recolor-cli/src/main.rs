//! # lottie-recolor CLI
//!
//! Offline companion to the `lottie-recolor` library.
//!
//! ## Commands
//! - `variants`: Write one recolored animation per configured scheme
//! - `remap`: Recolor a single animation with a scheme or a burnout score
//! - `elide`: Strip configured precomp layers without recoloring
//! - `schemes`: Print the configured palettes
//! - `watch`: Rebuild variants whenever the base animation changes

mod commands;
mod watch;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lottie-recolor")]
#[command(about = "Palette variants for Lottie animations")]
#[command(version)]
struct Cli {
    /// RON config with schemes, rules, variants and elision rules
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every configured variant of a base animation
    Variants {
        /// Base animation JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the variant files are written to
        #[arg(short, long, default_value = "assets/animations")]
        out_dir: PathBuf,
    },

    /// Recolor one animation
    Remap {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Scheme name, e.g. "thriving"
        #[arg(short, long, conflicts_with = "burnout", required_unless_present = "burnout")]
        scheme: Option<String>,

        /// Burnout percentage (0-100) used to pick the scheme
        #[arg(short, long)]
        burnout: Option<f64>,

        /// Also apply the configured layer elision rules
        #[arg(long)]
        elide: bool,
    },

    /// Remove configured precomp layers
    Elide {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// List configured color schemes
    Schemes,

    /// Watch the base animation and rebuild variants on change
    Watch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "assets/animations")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("recolor_cli=info,lottie_recolor=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Variants { input, out_dir } => {
            commands::cmd_variants(&config, &input, &out_dir).map(|_| ())
        }
        Commands::Remap {
            input,
            output,
            scheme,
            burnout,
            elide,
        } => {
            let selector = match (scheme, burnout) {
                (Some(name), _) => commands::SchemeSelector::Named(name),
                (None, Some(percent)) => commands::SchemeSelector::Burnout(percent),
                (None, None) => anyhow::bail!("either --scheme or --burnout is required"),
            };
            commands::cmd_remap(&config, &input, &output, &selector, elide)
        }
        Commands::Elide { input, output } => commands::cmd_elide(&config, &input, &output),
        Commands::Schemes => {
            print!("{}", commands::render_schemes(&config));
            Ok(())
        }
        Commands::Watch { input, out_dir } => watch::watch_base(&config, &input, &out_dir),
    }
}
