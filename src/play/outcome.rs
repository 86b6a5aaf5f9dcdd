use super::Level;
use super::Status;
use crate::Moves;
use crate::Score;
use crate::cascade::Delta;
use serde::Deserialize;
use serde::Serialize;

/// Result of a rotate command.
///
/// A rejected or ignored command has `accepted == false`, no deltas, and
/// reports the unchanged level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub accepted: bool,
    /// Scaled points this action added.
    pub score_delta: Score,
    /// Cumulative level score after the action.
    pub level_score: Score,
    pub moves_left: Moves,
    pub status: Status,
    /// Every board change in order, starting with the rotation.
    pub deltas: Vec<Delta>,
}

impl Outcome {
    pub fn ignored(level: &Level) -> Self {
        Self {
            accepted: false,
            score_delta: 0,
            level_score: level.score(),
            moves_left: level.moves(),
            status: level.status(),
            deltas: Vec::new(),
        }
    }
    pub fn accepted(level: &Level, score_delta: Score, deltas: Vec<Delta>) -> Self {
        Self {
            accepted: true,
            score_delta,
            level_score: level.score(),
            moves_left: level.moves(),
            status: level.status(),
            deltas,
        }
    }
    /// Groups cleared across the whole action.
    pub fn combo(&self) -> usize {
        self.deltas
            .iter()
            .rev()
            .find_map(|d| match d {
                Delta::Clear { combo, .. } => Some(*combo),
                _ => None,
            })
            .unwrap_or(0)
    }
}

/// What a level transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progress {
    /// A level started at this index.
    Started(usize),
    /// The level was won and play moved on to this index.
    Advanced(usize),
    /// The level was lost and restarted at this index.
    Restarted(usize),
    /// The last level was won (or an index past the end was requested);
    /// play wrapped around to level 0.
    CampaignComplete,
    /// The level is still in play; nothing changed.
    Unchanged,
}
