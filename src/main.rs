use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use langspect::{Langspect, MatchKind};

#[derive(Debug, Parser)]
#[command(
    name = "langspect",
    version,
    about = "Resolve language names and tags into standardized BCP 47 codes"
)]
struct Cli {
    /// Language tag or English name (multiple words are joined)
    #[arg(required = true)]
    query: Vec<String>,

    /// Only show the primary result
    #[arg(short, long)]
    simple: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let query = cli.query.join(" ");
    let langspect = Langspect::new();
    let resolution = langspect
        .resolve(&query)
        .with_context(|| format!("cannot resolve `{}`", query.trim()))?;

    if cli.simple {
        match resolution.matched_by {
            MatchKind::Tag => println!("{}", resolution.description),
            MatchKind::Name => println!("{}: {}", resolution.tag, resolution.description),
        }
        return Ok(());
    }

    println!("Tag: {}", resolution.tag);
    println!("Name: {}", resolution.description);
    match &resolution.likely_script {
        Some(script) => println!("Likely script: {script}"),
        None => println!("Likely script: Unknown"),
    }
    if !resolution.related.is_empty() {
        println!("Identical or near-identical codes:");
        for code in &resolution.related {
            println!("  - {}: {}", code.tag, code.name);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("langspect: {err:#}");
            ExitCode::FAILURE
        }
    }
}
