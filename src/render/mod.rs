pub mod html;
pub mod memory;
pub mod plain;

use anyhow::Result;
use clap::ValueEnum;

pub use html::HtmlSurface;
pub use memory::MemorySurface;
pub use plain::PlainSurface;

/// A place that displays an ordered list of paragraphs.
///
/// Every call replaces whatever was displayed before; nothing is appended.
pub trait Surface {
    fn replace_all(
        &mut self,
        items: &[&str],
    ) -> Result<()>;
}

/// Document formats available on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Plain,
    Html,
}

/// A surface whose output is a single text document.
#[derive(Debug, Clone)]
pub enum DocumentSurface {
    Plain(PlainSurface),
    Html(HtmlSurface),
}

impl DocumentSurface {
    pub fn new(
        format: Format,
        escape_html: bool,
    ) -> Self {
        match format {
            Format::Plain => DocumentSurface::Plain(PlainSurface::new()),
            Format::Html => DocumentSurface::Html(HtmlSurface::new(escape_html)),
        }
    }

    pub fn document(&self) -> &str {
        match self {
            DocumentSurface::Plain(s) => s.document(),
            DocumentSurface::Html(s) => s.document(),
        }
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        DocumentSurface::Plain(PlainSurface::new())
    }
}

impl Surface for DocumentSurface {
    fn replace_all(
        &mut self,
        items: &[&str],
    ) -> Result<()> {
        match self {
            DocumentSurface::Plain(s) => s.replace_all(items),
            DocumentSurface::Html(s) => s.replace_all(items),
        }
    }
}
