use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

/// Source of uniform random values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Process-wide RNG, used when no seed is requested.
#[derive(Default)]
pub struct ThreadRandom(ThreadRng);

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Reproducible source for a given seed.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values; an empty list yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}

/// Picks `n` indices in `[0, corpus_size)`, one random draw per index.
///
/// Returns an empty list for an empty corpus.
pub fn select<R>(
    n: usize,
    corpus_size: usize,
    random: &mut R,
) -> Vec<usize>
where
    R: RandomSource + ?Sized,
{
    if corpus_size == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|_| unit_to_index(random.next_unit(), corpus_size))
        .collect()
}

fn unit_to_index(
    unit: f64,
    size: usize,
) -> usize {
    // Out-of-range draws are clamped so the index stays valid.
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let idx = (unit * size as f64).floor() as usize;
    idx.min(size - 1)
}

/// Reads a paragraph count from user text. Anything that is not a positive
/// finite number counts as 0; fractions round up.
pub fn parse_count(text: &str) -> usize {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.ceil() as usize,
        _ => 0,
    }
}

/// Caps a requested count at `max`.
pub fn clamp_count(
    count: usize,
    max: usize,
) -> usize {
    count.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_empty() {
        assert!(select(0, 5, &mut FixedRandom(0.3)).is_empty());
    }

    #[test]
    fn empty_corpus_is_empty() {
        assert!(select(4, 0, &mut FixedRandom(0.3)).is_empty());
    }

    #[test]
    fn index_is_floor_of_scaled_unit() {
        let mut random = SequenceRandom::new(vec![0.0, 0.5, 0.99]);
        assert_eq!(select(3, 5, &mut random), vec![0, 2, 4]);
    }

    #[test]
    fn sequence_cycles() {
        let mut random = SequenceRandom::new(vec![0.1, 0.9]);
        assert_eq!(select(5, 10, &mut random), vec![1, 9, 1, 9, 1]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(select(1, 4, &mut FixedRandom(1.0)), vec![3]);
        assert_eq!(select(1, 4, &mut FixedRandom(7.5)), vec![3]);
        assert_eq!(select(1, 4, &mut FixedRandom(-0.2)), vec![0]);
        assert_eq!(select(1, 4, &mut FixedRandom(f64::NAN)), vec![0]);
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut random = || {
            calls += 1;
            0.25
        };
        assert_eq!(select(2, 8, &mut random), vec![2, 2]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn seeded_sources_repeat() {
        let a = select(20, 7, &mut SeededRandom::new(42));
        let b = select(20, 7, &mut SeededRandom::new(42));
        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 7));
    }

    #[test]
    fn thread_random_stays_in_range() {
        let mut random = ThreadRandom::default();
        for _ in 0..1000 {
            let unit = random.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn parse_count_accepts_numbers() {
        assert_eq!(parse_count("3"), 3);
        assert_eq!(parse_count("  12 "), 12);
        assert_eq!(parse_count("1e1"), 10);
        assert_eq!(parse_count("2.2"), 3);
    }

    #[test]
    fn parse_count_coerces_invalid_to_zero() {
        for text in ["", "   ", "abc", "-3", "-0.5", "NaN", "inf", "0", "3 paragraphs"] {
            assert_eq!(parse_count(text), 0, "input {text:?}");
        }
    }

    #[test]
    fn clamp_count_limits() {
        assert_eq!(clamp_count(5, 10), 5);
        assert_eq!(clamp_count(50, 10), 10);
    }
}
