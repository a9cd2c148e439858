//! sinlex CLI — Sinhala pronunciation lexicon generation for Kaldi.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sinlex_core::lexicon::io::LexiconConfig;
use sinlex_core::lexicon::process::process;
use sinlex_core::wer::best_wer_in_file;

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "sinlex",
    about = "Pronunciation lexicon generator for Sinhala ASR",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build lexicon.txt from a word list and its transliteration
    Build(BuildArgs),
    /// Print the minimum %WER found in Kaldi scoring output
    BestWer(BestWerArgs),
}

// ─── Build ───────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Sinhala word list, one word per line
    #[arg(long, default_value = "words.txt")]
    words: PathBuf,

    /// Transliterated phone strings, line-aligned with --words
    #[arg(long, default_value = "phones.txt")]
    phones: PathBuf,

    /// Lexicon output file
    #[arg(short, long, default_value = "lexicon.txt")]
    output: PathBuf,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Best WER ────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct BestWerArgs {
    /// File containing %WER lines
    file: PathBuf,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = match &cli.command {
        Command::Build(a) if a.verbose => "debug",
        Command::BestWer(a) if a.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::BestWer(args) => run_best_wer(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Runners ─────────────────────────────────────────────────────

fn run_build(args: BuildArgs) -> Result<()> {
    let config = LexiconConfig {
        words: args.words,
        transliterations: args.phones,
        output: args.output,
        report: args.report,
    };

    let report = process(&config)?;

    println!("Unambiguous entries: {}", report.unambiguous);
    println!("Ambiguous entries: {}", report.ambiguous);
    if !report.failures.is_empty() {
        println!("Skipped entries: {}", report.failures.len());
        for failure in &report.failures {
            println!("  line {}: {} ({})", failure.line, failure.word, failure.error);
        }
    }
    println!("Output: {}", config.output.display());
    if let Some(path) = &config.report {
        println!("Report: {}", path.display());
    }

    Ok(())
}

fn run_best_wer(args: BestWerArgs) -> Result<()> {
    match best_wer_in_file(&args.file)? {
        Some(best) => {
            println!("Minimum WER = {}", best.wer);
            println!("{}", best.line);
        }
        None => println!("No %WER lines in {}", args.file.display()),
    }
    Ok(())
}
