// src/main.rs
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rayon::prelude::*;

use term_finder::{MatcherConfig, TermMatcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find whole-word term and pronoun occurrences in text", long_about = None)]
struct Cli {
    /// Terms to look for, e.g. "we, you, customer"
    #[arg(short, long)]
    terms: String,

    /// Files to search; stdin is read when none are given
    files: Vec<PathBuf>,

    /// Match terms literally instead of as patterns
    #[arg(long)]
    literal: bool,

    /// Separator between terms
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Worker threads for multiple files (defaults to all cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Fail on the first term that is not a valid pattern
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let matcher = TermMatcher::with_config(
        MatcherConfig::default()
            .delimiter(cli.delimiter)
            .literal_terms(cli.literal),
    );
    let find = |text: &str| -> Result<Vec<String>> {
        if cli.strict {
            Ok(matcher.try_find_term_instances(text, &cli.terms)?)
        } else {
            Ok(matcher.find_term_instances(text, &cli.terms))
        }
    };

    let start_time = Instant::now();

    if cli.files.is_empty() {
        let text = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
        println!("{}", find(&text)?.join(", "));
    } else {
        for line in render_files(&cli.files, find)? {
            println!("{}", line);
        }
    }

    info!("Matched in {:?}", start_time.elapsed());
    Ok(())
}

/// Matches every file in parallel and renders one `path: m1, m2` line per file,
/// in argument order. Any unreadable file or failed match aborts the whole run.
fn render_files<F>(files: &[PathBuf], find: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Result<Vec<String>> + Sync,
{
    // par_iter collect keeps argument order.
    files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            let found =
                find(&text).with_context(|| format!("While matching '{}'", path.display()))?;
            Ok(format!("{}: {}", path.display(), found.join(", ")))
        })
        .collect()
}
