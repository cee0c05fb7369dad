use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::corpus::Corpus;
use crate::render::Format;
use crate::select::{RandomSource, SeededRandom, ThreadRandom, clamp_count, parse_count};
use anyhow::Result;
use clap::Parser;
use tracing::warn;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested paragraphs, already parsed and clamped to `max_count`.
    pub count: usize,
    pub format: Format,
    pub escape_html: bool,
    pub corpus: Option<PathBuf>,
    pub seed: Option<u64>,
    pub max_count: usize,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub no_clipboard: bool,
    pub interactive: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Self::from_parsed(Cli::parse()))
    }

    /// Same as [`Config::from_cli`] for an explicit argument list.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(Self::from_parsed(cli))
    }

    fn from_parsed(cli: Cli) -> Self {
        let max_count = usize::try_from(cli.max_count).unwrap_or(usize::MAX);
        let requested = parse_count(&cli.count);
        let count = clamp_count(requested, max_count);
        if count < requested {
            warn!("requested {requested} paragraphs, limiting to {max_count}");
        }
        Config {
            count,
            format: cli.format,
            escape_html: cli.escape_html,
            corpus: cli.corpus,
            seed: cli.seed,
            max_count,
            output: cli.output,
            stdout: cli.stdout,
            no_clipboard: cli.no_clipboard,
            interactive: cli.interactive,
        }
    }

    /// The corpus file if one was given, the bundled corpus otherwise.
    pub fn load_corpus(&self) -> Result<Corpus> {
        match &self.corpus {
            Some(path) => Corpus::load(path),
            None => Ok(Corpus::builtin()),
        }
    }

    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::default()),
        }
    }

    /// Stdout receives the document unless it goes to a file only.
    pub fn print_to_stdout(&self) -> bool {
        self.stdout || self.output.is_none()
    }
}
