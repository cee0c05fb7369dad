use std::path::PathBuf;

use crate::constants::{DEFAULT_COUNT, DEFAULT_MAX_COUNT, MAX_COUNT_LIMIT};
use crate::render::Format;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "filler-text")]
#[command(
    about = "Generate paragraphs of filler text picked at random from a fixed corpus, \
                   print them as text or an HTML page, then copy them to the clipboard."
)]
pub struct Cli {
    /// Number of paragraphs. Non-numeric or negative values generate nothing.
    #[arg(default_value = DEFAULT_COUNT, allow_negative_numbers = true)]
    pub count: String,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Escape markup in paragraphs instead of injecting it into the HTML page.
    #[arg(short = 'e', long = "escape-html")]
    pub escape_html: bool,

    /// Corpus file: paragraphs separated by blank lines.
    #[arg(short = 'c', long = "corpus")]
    pub corpus: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Upper bound for the paragraph count; larger requests are clamped.
    #[arg(
        short = 'M',
        long = "max-count",
        default_value_t = DEFAULT_MAX_COUNT,
        value_parser = clap::value_parser!(u64).range(1..=MAX_COUNT_LIMIT)
    )]
    pub max_count: u64,

    /// Write the document to this file.
    #[arg(short = 'o', long = "output", conflicts_with = "interactive")]
    pub output: Option<PathBuf>,

    /// Print the document to stdout even when writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Do not copy to clipboard.
    #[arg(short = 'n', long = "no-clipboard")]
    pub no_clipboard: bool,

    /// Open the terminal form and generate interactively.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,
}
