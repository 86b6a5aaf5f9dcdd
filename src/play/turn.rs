use crate::COMBO_CAP;
use crate::Score;
use crate::tree::Group;
use serde::Deserialize;
use serde::Serialize;

/// Score bookkeeping for one player action and every cascade it triggers.
///
/// Points from each cleared group accumulate into `base`; `matches` counts
/// the groups. On finalize the base is scaled by the combo multiplier
/// `min(4, 1 + (matches - 1) * 0.5)`.
///
/// | matches | 1   | 2   | 3   | 4   | 5   | 6   | 7+  |
/// |---------|-----|-----|-----|-----|-----|-----|-----|
/// | ×       | 1.0 | 1.5 | 2.0 | 2.5 | 3.0 | 3.5 | 4.0 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    active: bool,
    base: Score,
    matches: usize,
}

impl Turn {
    /// A fresh, active accumulator.
    pub fn start() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    /// Unscaled points so far.
    pub fn base(&self) -> Score {
        self.base
    }
    /// Groups cleared so far.
    pub fn matches(&self) -> usize {
        self.matches
    }
    /// Books one cleared group and returns its points.
    pub fn score(&mut self, group: &Group) -> Score {
        let points = group.points();
        self.base += points;
        self.matches += 1;
        points
    }
    /// Current combo multiplier, 1.0 when nothing has matched yet.
    pub fn multiplier(&self) -> f32 {
        self.halves() as f32 / 2.0
    }
    /// Scaled total, rounded down.
    pub fn total(&self) -> Score {
        match self.matches {
            0 => 0,
            _ => self.base * self.halves() / 2,
        }
    }
    /// Closes the turn and returns its scaled total.
    pub fn finalize(&mut self) -> Score {
        self.active = false;
        self.total()
    }

    /// Multiplier in half-steps, so scoring stays in integers.
    fn halves(&self) -> Score {
        match self.matches {
            0 => 2,
            n => (n as Score + 1).min(COMBO_CAP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    fn triple() -> Group {
        Tree::shape(1, 2).paint("R RR").unwrap().groups().remove(0)
    }

    #[test]
    fn multiplier_table() {
        let expected = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.0, 4.0];
        let group = triple();
        let mut turn = Turn::start();
        for multiplier in expected {
            turn.score(&group);
            assert_eq!(turn.multiplier(), multiplier, "{} matches", turn.matches());
        }
    }

    #[test]
    fn totals_round_down_through_multiplier() {
        let group = triple();
        let mut turn = Turn::start();
        turn.score(&group);
        assert_eq!(turn.total(), 100);
        turn.score(&group);
        assert_eq!(turn.total(), 300);
        for _ in 0..8 {
            turn.score(&group);
        }
        assert_eq!(turn.base(), 1000);
        assert_eq!(turn.total(), 4000);
    }

    #[test]
    fn empty_turn_scores_nothing() {
        let mut turn = Turn::start();
        assert!(turn.is_active());
        assert_eq!(turn.multiplier(), 1.0);
        assert_eq!(turn.finalize(), 0);
        assert!(!turn.is_active());
    }

    #[test]
    fn start_resets() {
        let mut turn = Turn::start();
        turn.score(&triple());
        turn.finalize();
        let turn = Turn::start();
        assert_eq!(turn.base(), 0);
        assert_eq!(turn.matches(), 0);
    }
}
