//! Command-line front end for the lexorder resolver.
//!
//! Reads a word list (one word per line, blank lines skipped) from a file
//! or stdin, infers the symbol order, and prints the resulting alphabet as
//! a single string. Failure causes go to stderr with a nonzero exit.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lexorder::{resolve_words_with_config, LexOrderError, ResolverConfig, TieBreak};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
#[command(author, version, about = "Infer an unknown symbol order from a sorted word list")]
struct Cli {
    /// Word list file, or "-" for stdin.
    input: PathBuf,

    /// Resolver configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use first-seen order instead of sorted order among unconstrained
    /// symbols.
    #[arg(long)]
    insertion_order: bool,

    /// Suppress resolver event output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        lexorder::console::init();
    }

    match run(&cli) {
        Ok(alphabet) => {
            println!("{alphabet}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{} {message}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)
            .map_err(|e| format!("cannot load {}: {e}", path.display()))?,
        None => ResolverConfig::default(),
    };
    if cli.insertion_order {
        config = config.with_tie_break(TieBreak::Insertion);
    }

    let contents = read_input(cli)?;
    let words: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let order = resolve_words_with_config(&words, &config).map_err(describe)?;
    Ok(order.into_iter().collect())
}

fn read_input(cli: &Cli) -> Result<String, String> {
    if cli.input.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        Ok(contents)
    } else {
        std::fs::read_to_string(&cli.input)
            .map_err(|e| format!("cannot read {}: {e}", cli.input.display()))
    }
}

fn describe(err: LexOrderError) -> String {
    match err {
        LexOrderError::ContradictoryPrefix { .. } | LexOrderError::CyclicConstraints { .. } => {
            format!("no consistent order exists ({err})")
        }
        other => other.to_string(),
    }
}
