//! Deterministic generators for tests.
use rand::RngCore;

/// A generator that makes [`Palette::sample`](crate::tree::Palette::sample)
/// return a scripted sequence of palette indices, cycling when exhausted.
///
/// Each draw puts the wanted index in the top bits of the word, which is
/// where widening-multiply range sampling reads it from. Only palettes
/// whose length is a power of two are supported.
#[derive(Debug, Clone)]
pub struct Script {
    picks: Vec<usize>,
    cursor: usize,
    bits: u32,
}

impl Script {
    pub fn new(palette: usize, picks: impl IntoIterator<Item = usize>) -> Self {
        assert!(palette.is_power_of_two());
        let picks = picks.into_iter().collect::<Vec<_>>();
        assert!(!picks.is_empty());
        assert!(picks.iter().all(|&k| k < palette));
        Self {
            picks,
            cursor: 0,
            bits: palette.trailing_zeros(),
        }
    }
    fn pick(&mut self) -> u64 {
        let k = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        k as u64
    }
}

impl RngCore for Script {
    fn next_u32(&mut self) -> u32 {
        match self.bits {
            0 => 0,
            b => (self.pick() as u32) << (32 - b),
        }
    }
    fn next_u64(&mut self) -> u64 {
        match self.bits {
            0 => 0,
            b => self.pick() << (64 - b),
        }
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Color;
    use crate::tree::Palette;

    #[test]
    fn scripted_samples() {
        let palette = Palette::default();
        let ref mut rng = Script::new(palette.len(), [3, 0, 2, 1]);
        let drawn = (0..5).map(|_| palette.sample(rng)).collect::<Vec<_>>();
        assert_eq!(
            drawn,
            vec![Color::Yellow, Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
    }
}
