use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;

/// A tile color.
///
/// Empty slots are modeled as `Option::<Color>::None` on the node rather
/// than as a sentinel variant, so every `Color` is a real, matchable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    /// Hex code for graphical front ends.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => "#FF5252",
            Self::Blue => "#448AFF",
            Self::Green => "#00E676",
            Self::Yellow => "#FFD740",
        }
    }
    /// Single-letter label.
    pub fn letter(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
        }
    }
}

impl Arbitrary for Color {
    fn random() -> Self {
        Self::ALL[rand::random_range(0..Self::ALL.len())]
    }
}

impl TryFrom<char> for Color {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Self::Red),
            'B' => Ok(Self::Blue),
            'G' => Ok(Self::Green),
            'Y' => Ok(Self::Yellow),
            _ => Err(anyhow::anyhow!("invalid color {:?}", c)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
