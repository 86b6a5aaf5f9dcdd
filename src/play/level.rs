use crate::Depth;
use crate::Moves;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// Where a level stands after the most recent turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "level complete"),
            Self::Lost => write!(f, "out of moves"),
        }
    }
}

/// Move budget, target and running score of the level in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    index: usize,
    moves: Moves,
    target: Score,
    score: Score,
    status: Status,
}

impl Level {
    pub fn new(index: usize, moves: Moves, target: Score) -> Self {
        Self {
            index,
            moves,
            target,
            score: 0,
            status: Status::Playing,
        }
    }
    /// Levels before [`DEEP_LEVEL`](crate::DEEP_LEVEL) use the shallow tree.
    pub fn depth_of(index: usize) -> Depth {
        match index < crate::DEEP_LEVEL {
            true => crate::SHALLOW_DEPTH,
            false => crate::DEEP_DEPTH,
        }
    }
}

impl Level {
    /// 0-based position in the campaign.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn depth(&self) -> Depth {
        Self::depth_of(self.index)
    }
    pub fn moves(&self) -> Moves {
        self.moves
    }
    pub fn target(&self) -> Score {
        self.target
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn status(&self) -> Status {
        self.status
    }
    /// Accepting moves: still playing with budget left.
    pub fn is_open(&self) -> bool {
        self.status == Status::Playing && self.moves > 0
    }
}

impl Level {
    /// Books a finished turn: adds its points, spends exactly one move,
    /// and re-evaluates. Reaching the target wins even on the last move.
    pub fn record(&mut self, points: Score) -> Status {
        self.score += points;
        self.moves = self.moves.saturating_sub(1);
        self.status = if self.score >= self.target {
            Status::Won
        } else if self.moves == 0 {
            Status::Lost
        } else {
            Status::Playing
        };
        self.status
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level {} | Moves {} | Score {} / {}",
            self.index + 1,
            self.moves,
            self.score,
            self.target
        )
    }
}
