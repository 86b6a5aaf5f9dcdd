use crate::NodeId;

/// Why a requested action was refused.
///
/// Every rejection leaves the board, the level and the move budget untouched.
/// None of these are fatal: callers either surface them to the player or,
/// in the case of [`Rejection::Busy`], drop the input on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No node with this id exists on the current board.
    UnknownNode(NodeId),
    /// Leaves have no children to rotate with.
    Leaf(NodeId),
    /// A cascade is still being resolved.
    Busy,
    /// The level is already won or lost, or out of moves.
    LevelOver,
}

impl Rejection {
    /// Invalid moves are the player's fault; the rest are timing.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::Leaf(_))
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "invalid move: no node #{}", id),
            Self::Leaf(id) => write!(f, "invalid move: node #{} is a leaf", id),
            Self::Busy => write!(f, "busy: cascade in progress"),
            Self::LevelOver => write!(f, "level is over"),
        }
    }
}

impl std::error::Error for Rejection {}
