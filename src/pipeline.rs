use std::io::Write;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::generate::{Generator, generate};
use crate::io::{clipboard, output};
use crate::render::{DocumentSurface, Surface};
use crate::select::RandomSource;
use crate::ui;
use anyhow::Result;
use tracing::debug;

/// Steps of a single non-interactive run: load the corpus, generate into
/// the document surface, then deliver the document.
#[derive(Default)]
pub struct Pipeline {
    corpus: Corpus,
    surface: DocumentSurface,
    paragraphs: Vec<String>,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            surface: DocumentSurface::new(config.format, config.escape_html),
            ..Self::default()
        }
    }

    pub fn set_corpus(
        &mut self,
        corpus: Corpus,
    ) {
        self.corpus = corpus;
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Replace the document with `count` freshly selected paragraphs.
    pub fn generate(
        &mut self,
        count: usize,
        random: &mut dyn RandomSource,
    ) -> Result<()> {
        let picks = generate(&self.corpus, random, &mut self.surface, count)?;
        self.paragraphs = picks.into_iter().map(str::to_string).collect();
        Ok(())
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn document(&self) -> &str {
        self.surface.document()
    }

    /// Send the document to the file, the stream and the clipboard as
    /// configured.
    pub fn deliver<W: Write>(
        &self,
        config: &Config,
        out: &mut W,
    ) -> Result<()> {
        if let Some(path) = &config.output {
            output::write_document(path, self.document())?;
        }
        if config.print_to_stdout() {
            output::print_document(out, self.document())?;
        }
        if !config.no_clipboard {
            clipboard::copy_or_warn(&mut clipboard::SystemClipboard, self.document());
        }
        Ok(())
    }
}

/// After the form closes, prints what was on screen when `--stdout` asks
/// for it, in the configured format.
pub fn print_on_exit<W: Write>(
    config: &Config,
    shown: &[String],
    out: &mut W,
) -> Result<()> {
    if !config.stdout {
        return Ok(());
    }
    let items: Vec<&str> = shown.iter().map(String::as_str).collect();
    let mut surface = DocumentSurface::new(config.format, config.escape_html);
    surface.replace_all(&items)?;
    output::print_document(out, surface.document())
}

/// Entry point shared by the binary: interactive form or one-shot document.
pub fn run(config: &Config) -> Result<()> {
    let corpus = config.load_corpus()?;
    let mut random = config.random_source();

    if config.interactive {
        let mut generator = Generator::new(corpus, random);
        let shown = ui::run_form(
            &mut generator,
            &mut clipboard::SystemClipboard,
            config.count,
            config.max_count,
        )?;
        return print_on_exit(config, &shown, &mut std::io::stdout().lock());
    }

    let mut pipeline = Pipeline::new(config);
    pipeline.set_corpus(corpus);
    pipeline.generate(config.count, random.as_mut())?;
    debug!(
        "rendered {} paragraphs from a corpus of {}",
        pipeline.paragraphs().len(),
        pipeline.corpus().len()
    );
    pipeline.deliver(config, &mut std::io::stdout().lock())
}
