//! Porter2 CLI entry point.
//!
//! Provides command-line tools around the stemmer:
//! - `porter2 stem` - Stem words from arguments, files, or stdin
//! - `porter2 explain` - Show every rule applied to one word
//! - `porter2 verify` - Compare stems against an expected output file

mod commands;
mod input;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_explain, run_stem, run_verify, ExplainArgs, StemArgs, VerifyArgs};
use tracing_subscriber::EnvFilter;

/// Porter2 English stemmer tools.
#[derive(Debug, Parser)]
#[command(name = "porter2")]
#[command(about = "Porter2 English stemmer tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem words given as arguments, in files, or on stdin
    Stem(StemArgs),
    /// Show the rules applied to a single word
    Explain(ExplainArgs),
    /// Check stems against an expected output file
    Verify(VerifyArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    let tracing_rules = matches!(&cli.command, Commands::Stem(args) if args.trace);
    setup_logging(cli.verbose || tracing_rules);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Stem(args) => run_stem(args),
        Commands::Explain(args) => run_explain(args),
        Commands::Verify(args) => run_verify(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
