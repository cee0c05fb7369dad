use super::Surface;
use anyhow::Result;

/// Plain terminal text: paragraphs separated by one blank line.
#[derive(Debug, Clone, Default)]
pub struct PlainSurface {
    output: String,
}

impl PlainSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &str {
        &self.output
    }
}

impl Surface for PlainSurface {
    fn replace_all(
        &mut self,
        items: &[&str],
    ) -> Result<()> {
        let mut output = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(item);
            output.push('\n');
        }
        self.output = output;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_clears_output() {
        let mut surface = PlainSurface::new();
        surface.replace_all(&["kept?"]).unwrap();
        surface.replace_all(&[]).unwrap();
        assert_eq!(surface.document(), "");
    }

    #[test]
    fn paragraphs_are_separated() {
        let mut surface = PlainSurface::new();
        surface.replace_all(&["first", "second", "third"]).unwrap();
        insta::assert_snapshot!(surface.document().trim_end(), @r"
        first

        second

        third
        ");
    }
}
