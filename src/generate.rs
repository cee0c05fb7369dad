use crate::corpus::{Corpus, CorpusProvider};
use crate::render::Surface;
use crate::select::{RandomSource, select};
use anyhow::Result;
use tracing::debug;

/// Picks `n` paragraphs from the corpus, hands them to the surface in one
/// replace, and returns them in display order.
pub fn generate<'c, P, R, S>(
    corpus: &'c P,
    random: &mut R,
    surface: &mut S,
    n: usize,
) -> Result<Vec<&'c str>>
where
    P: CorpusProvider + ?Sized,
    R: RandomSource + ?Sized,
    S: Surface + ?Sized,
{
    let entries = corpus.get_all();
    let picks: Vec<&str> = select(n, entries.len(), random)
        .into_iter()
        .map(|idx| entries[idx].as_str())
        .collect();
    debug!(count = n, corpus_size = entries.len(), "generated paragraphs");
    surface.replace_all(&picks)?;
    Ok(picks)
}

/// A corpus paired with its random source, for repeated generate actions.
pub struct Generator {
    corpus: Corpus,
    random: Box<dyn RandomSource>,
}

impl Generator {
    pub fn new(
        corpus: Corpus,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self { corpus, random }
    }

    /// Replaces the surface contents with `n` fresh paragraphs and returns
    /// how many were shown.
    pub fn generate_into<S>(
        &mut self,
        surface: &mut S,
        n: usize,
    ) -> Result<usize>
    where
        S: Surface + ?Sized,
    {
        let picks = generate(&self.corpus, self.random.as_mut(), surface, n)?;
        Ok(picks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemorySurface;
    use crate::select::{FixedRandom, SequenceRandom};

    fn corpus() -> Corpus {
        Corpus::new(["zero", "one", "two", "three", "four"]).unwrap()
    }

    #[test]
    fn fixed_zero_picks_first_entry() {
        let corpus = corpus();
        let mut surface = MemorySurface::new();
        let picks = generate(&corpus, &mut FixedRandom(0.0), &mut surface, 1).unwrap();
        assert_eq!(picks, vec!["zero"]);
        assert_eq!(surface.items(), &["zero".to_string()]);
    }

    #[test]
    fn values_map_through_floor() {
        let corpus = corpus();
        let mut surface = MemorySurface::new();
        let mut random = SequenceRandom::new(vec![0.0, 0.5, 0.99]);
        let picks = generate(&corpus, &mut random, &mut surface, 3).unwrap();
        assert_eq!(picks, vec!["zero", "two", "four"]);
    }

    #[test]
    fn generator_replaces_previous_output() {
        let mut generator = Generator::new(corpus(), Box::new(FixedRandom(0.3)));
        let mut surface = MemorySurface::new();
        assert_eq!(generator.generate_into(&mut surface, 3).unwrap(), 3);
        assert_eq!(generator.generate_into(&mut surface, 2).unwrap(), 2);
        assert_eq!(surface.items(), &["one".to_string(), "one".to_string()]);
        assert_eq!(generator.generate_into(&mut surface, 0).unwrap(), 0);
        assert!(surface.is_empty());
    }
}
