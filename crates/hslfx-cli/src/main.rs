//! hslfx - HSLA pixel transform CLI
//!
//! Loads a PNG, applies one of the hslfx-ops transforms, saves the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hslfx")]
#[command(author, version, about = "HSLA pixel transforms")]
#[command(long_about = "
Whole-image pixel transforms in HSL space.

Examples:
  hslfx grayscale alma.png -o out-grayscale.png
  hslfx spotlight alma.png -o out-spotlight.png -x 450 -y 150
  hslfx illinify alma.png -o out-illinify.png
  hslfx watermark alma.png i.png -o out-watermark.png
  hslfx all alma.png --stencil i.png --out-dir out/
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove all color (saturation = 0)
    #[command(visible_alias = "gray")]
    Grayscale(GrayscaleArgs),

    /// Darken with distance from a center point
    Spotlight(SpotlightArgs),

    /// Quantize hues to Illini orange and blue
    Illinify(IlliniArgs),

    /// Brighten the base where the stencil is fully white
    Watermark(WatermarkArgs),

    /// Run every transform on one input, writing out-*.png files
    All(AllArgs),
}

/// Arguments for the `grayscale` command.
#[derive(Args)]
struct GrayscaleArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `spotlight` command.
#[derive(Args)]
struct SpotlightArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Center X (may be negative or beyond the image)
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    center_x: i32,

    /// Center Y (may be negative or beyond the image)
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    center_y: i32,
}

/// Arguments for the `illinify` command.
#[derive(Args)]
struct IlliniArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `watermark` command.
#[derive(Args)]
struct WatermarkArgs {
    /// Base image
    base: PathBuf,

    /// Stencil image (same size as base)
    stencil: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `all` command.
#[derive(Args)]
struct AllArgs {
    /// Input image
    input: PathBuf,

    /// Stencil for the watermark step
    #[arg(short, long)]
    stencil: PathBuf,

    /// Directory for out-grayscale.png, out-spotlight.png, out-illinify.png, out-watermark.png
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Spotlight center X
    #[arg(short = 'x', long, default_value = "450", allow_negative_numbers = true)]
    center_x: i32,

    /// Spotlight center Y
    #[arg(short = 'y', long, default_value = "150", allow_negative_numbers = true)]
    center_y: i32,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "hslfx=warn",
        1 => "hslfx=info",
        _ => "hslfx=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Grayscale(args) => commands::grayscale::run(args),
        Commands::Spotlight(args) => commands::spotlight::run(args),
        Commands::Illinify(args) => commands::illinify::run(args),
        Commands::Watermark(args) => commands::watermark::run(args),
        Commands::All(args) => commands::all::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_spotlight_negative_center() {
        let cli = Cli::try_parse_from([
            "hslfx", "spotlight", "in.png", "-o", "out.png", "-x", "-20", "-y", "35",
        ])
        .unwrap();
        match cli.command {
            Commands::Spotlight(args) => {
                assert_eq!(args.center_x, -20);
                assert_eq!(args.center_y, 35);
            }
            _ => panic!("expected spotlight"),
        }
    }

    #[test]
    fn test_all_defaults() {
        let cli = Cli::try_parse_from(["hslfx", "-vv", "all", "alma.png", "-s", "i.png"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::All(args) => {
                assert_eq!((args.center_x, args.center_y), (450, 150));
                assert_eq!(args.out_dir, PathBuf::from("."));
            }
            _ => panic!("expected all"),
        }
    }

    #[test]
    fn test_watermark_requires_stencil() {
        assert!(Cli::try_parse_from(["hslfx", "watermark", "base.png", "-o", "out.png"]).is_err());
    }
}
