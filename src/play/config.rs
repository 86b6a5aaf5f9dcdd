use super::Level;
use crate::Moves;
use crate::Score;
use crate::tree::Palette;
use serde::Deserialize;
use serde::Serialize;

/// Static game parameters: palette, branching factor and the campaign tables.
///
/// `turn_limits[i]` and `score_targets[i]` together define level `i`.
/// The default is the 20-level campaign on a binary tree with four colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub palette: Palette,
    pub degree: usize,
    pub turn_limits: Vec<Moves>,
    pub score_targets: Vec<Score>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            degree: crate::DEGREE,
            turn_limits: crate::TURN_LIMITS.to_vec(),
            score_targets: crate::SCORE_TARGETS.to_vec(),
        }
    }
}

impl Config {
    pub fn with_palette(self, palette: Palette) -> Self {
        Self { palette, ..self }
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        self.palette.validate()?;
        if self.degree == 0 {
            return Err(anyhow::anyhow!("degree must be positive"));
        }
        if self.turn_limits.is_empty() {
            return Err(anyhow::anyhow!("campaign has no levels"));
        }
        if self.turn_limits.len() != self.score_targets.len() {
            return Err(anyhow::anyhow!(
                "{} turn limits but {} score targets",
                self.turn_limits.len(),
                self.score_targets.len()
            ));
        }
        Ok(())
    }
    /// Number of levels in the campaign.
    pub fn levels(&self) -> usize {
        self.turn_limits.len()
    }
    /// Fresh parameters for a level, or `None` past the end of the campaign.
    pub fn level(&self, index: usize) -> Option<Level> {
        let moves = *self.turn_limits.get(index)?;
        let target = *self.score_targets.get(index)?;
        Some(Level::new(index, moves, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Color;

    #[test]
    fn default_campaign() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.levels(), 20);
        let first = config.level(0).unwrap();
        assert_eq!((first.moves(), first.target()), (9, 700));
        let last = config.level(19).unwrap();
        assert_eq!((last.moves(), last.target()), (15, 10000));
        assert_eq!(config.level(20), None);
    }

    #[test]
    fn rejects_inconsistent_tables() {
        let mut config = Config::default();
        config.score_targets.pop();
        assert!(config.validate().is_err());
        let config = Config {
            turn_limits: vec![],
            score_targets: vec![],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_shape_or_palette() {
        let config = Config {
            degree: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config::default().with_palette(Palette::from(vec![]));
        assert!(config.validate().is_err());
        let config = Config::default().with_palette(Palette::from([Color::Red, Color::Blue]));
        assert!(config.validate().is_ok());
    }
}
