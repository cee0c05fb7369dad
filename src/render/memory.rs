use super::Surface;
use anyhow::Result;

/// Keeps the displayed paragraphs in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    items: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Paragraphs joined by blank lines.
    pub fn to_plain_text(&self) -> String {
        self.items.join("\n\n")
    }
}

impl Surface for MemorySurface {
    fn replace_all(
        &mut self,
        items: &[&str],
    ) -> Result<()> {
        self.items = items.iter().map(|s| s.to_string()).collect();
        Ok(())
    }
}
