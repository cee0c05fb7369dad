pub mod paragraphs;

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};

/// Errors raised while building a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The corpus has no paragraphs to choose from.
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CorpusError::Empty => write!(f, "corpus contains no paragraphs"),
        }
    }
}

impl std::error::Error for CorpusError {}

/// Anything that can hand out the fixed, ordered list of candidate paragraphs.
pub trait CorpusProvider {
    fn get_all(&self) -> &[String];
}

/// Immutable, non-empty ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<String>,
}

impl Corpus {
    pub fn new<I, S>(entries: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { entries })
    }

    /// The paragraphs shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            entries: paragraphs::PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Splits a document into paragraphs on blank lines. Lines inside a
    /// paragraph are trimmed and joined with a single space.
    pub fn from_text(text: &str) -> Result<Self, CorpusError> {
        let mut entries = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    entries.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            entries.push(current.join(" "));
        }
        Self::new(entries)
    }

    /// Reads a corpus file, see [`Corpus::from_text`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus file {}", path.display()))?;
        let corpus = Self::from_text(&text)
            .with_context(|| format!("invalid corpus file {}", path.display()))?;
        tracing::debug!(
            "loaded {} paragraphs from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // Always false for a constructed corpus.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(
        &self,
        idx: usize,
    ) -> Option<&str> {
        self.entries.get(idx).map(String::as_str)
    }

    pub fn contains(
        &self,
        text: &str,
    ) -> bool {
        self.entries.iter().any(|e| e == text)
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CorpusProvider for Corpus {
    fn get_all(&self) -> &[String] {
        &self.entries
    }
}
