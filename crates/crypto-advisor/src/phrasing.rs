//! Response Phrasing
//!
//! Several answers come in equivalent wordings. Which one is shown is purely
//! cosmetic and delegated to a [`PhrasePicker`], so tests can pin it down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `len` equivalent phrasings
pub trait PhrasePicker: Send {
    /// Index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Random phrasing backed by a seedable RNG
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Default for SeededPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PhrasePicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always the same phrasing
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Take one phrasing out of `options`
pub fn choose(picker: &mut dyn PhrasePicker, mut options: Vec<String>) -> String {
    match options.len() {
        0 => String::new(),
        1 => options.swap_remove(0),
        len => options.swap_remove(picker.pick(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SeededPicker::seeded(42);
        let mut second = SeededPicker::seeded(42);

        let a: Vec<_> = (0..20).map(|_| choose(&mut first, options())).collect();
        let b: Vec<_> = (0..20).map(|_| choose(&mut second, options())).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut picker = SeededPicker::seeded(7);
        for _ in 0..100 {
            assert!(picker.pick(3) < 3);
        }
    }

    #[test]
    fn test_fixed_picker_clamps() {
        assert_eq!(choose(&mut FixedPicker(1), options()), "b");
        assert_eq!(choose(&mut FixedPicker(9), options()), "c");
        assert_eq!(choose(&mut FixedPicker(0), Vec::new()), "");
    }
}
