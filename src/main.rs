//! `wordmap` - print the word-to-line mapping of the sample post or of stdin.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordmap::constants::SAMPLE_LINES;
use wordmap::{map_words, render, Config, Error, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "wordmap", version)]
#[command(about = "Map each word of Title:/Description: lines to the line it came from")]
struct Args {
    /// Read lines from standard input instead of the built-in sample
    #[arg(long)]
    stdin: bool,

    /// Output format (defaults to WORDMAP_FORMAT, then python)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Read every line of stdin.
///
/// Exactly one `\n` or `\r\n` terminator is removed per line; any other
/// carriage return stays part of the line.
fn read_stdin_lines() -> wordmap::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.map_err(|e| Error::io(e, "reading stdin")))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let format = args.format.unwrap_or(config.format);
    tracing::info!(
        version = config.app_version(),
        format = format.name(),
        stdin = args.stdin,
        "Starting {}",
        config.app_name()
    );

    let mappings = if args.stdin {
        let lines = read_stdin_lines()?;
        tracing::debug!(lines = lines.len(), "read input");
        map_words(&lines)
    } else {
        map_words(SAMPLE_LINES)
    };

    let output = render(&mappings, format).context("Failed to render mapping")?;
    println!("{output}");

    Ok(())
}
