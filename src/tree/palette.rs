use super::Color;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// The ordered set of colors a board is drawn from.
///
/// Used for initial coloring, sanitization re-rolls, and root refills.
/// All draws go through a caller-supplied generator so boards are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Uniform draw. The palette must not be empty (see [`Palette::validate`]).
    pub fn sample<R>(&self, rng: &mut R) -> Color
    where
        R: Rng + ?Sized,
    {
        self.0[rng.random_range(0..self.0.len())]
    }
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, color: &Color) -> bool {
        self.0.contains(color)
    }
    /// Non-empty, no repeats.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.0.is_empty() {
            return Err(anyhow::anyhow!("palette has no colors"));
        }
        for (i, color) in self.0.iter().enumerate() {
            if self.0[..i].contains(color) {
                return Err(anyhow::anyhow!("palette repeats {}", color));
            }
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(Color::ALL.to_vec())
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl<const K: usize> From<[Color; K]> for Palette {
    fn from(colors: [Color; K]) -> Self {
        Self(colors.to_vec())
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn samples_stay_in_palette() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let palette = Palette::from([Color::Red, Color::Green]);
        for _ in 0..256 {
            assert!(palette.contains(&palette.sample(rng)));
        }
    }

    #[test]
    fn samples_cover_palette() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let palette = Palette::default();
        let drawn = (0..512).map(|_| palette.sample(rng)).collect::<Vec<_>>();
        assert!(Color::ALL.iter().all(|c| drawn.contains(c)));
    }

    #[test]
    fn validation() {
        assert!(Palette::default().validate().is_ok());
        assert!(Palette::from(vec![]).validate().is_err());
        assert!(Palette::from([Color::Red, Color::Blue, Color::Red]).validate().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Palette::default().to_string(), "RBGY");
    }
}
