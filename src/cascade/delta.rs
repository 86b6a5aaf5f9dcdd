use crate::NodeId;
use crate::Score;
use crate::tree::Color;
use crate::tree::Group;
use serde::Deserialize;
use serde::Serialize;

/// One discrete board change, in the order it happened.
///
/// An action produces exactly one `Rotate`, then zero or more rounds of
/// `Clear` followed by `Fall`/`Refill` steps until the board is quiet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delta {
    /// Colors shifted around this ring (node first, then its children).
    Rotate(Vec<NodeId>),
    /// Matched groups were scored and emptied. `combo` is the running
    /// number of groups cleared so far this action.
    Clear {
        groups: Vec<Group>,
        points: Score,
        combo: usize,
    },
    /// One gravity sweep. Each pair moved a color from a parent into its child.
    Fall(Vec<(NodeId, NodeId)>),
    /// The empty root drew a fresh color.
    Refill(Color),
}

impl Delta {
    /// Nodes whose color this delta changed.
    pub fn touched(&self) -> Vec<NodeId> {
        match self {
            Self::Rotate(ring) => ring.clone(),
            Self::Clear { groups, .. } => groups
                .iter()
                .flat_map(|g| g.nodes().iter().copied())
                .collect(),
            Self::Fall(moves) => moves.iter().flat_map(|&(a, b)| [a, b]).collect(),
            Self::Refill(_) => vec![0],
        }
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rotate(ring) => write!(f, "ROTATE #{}", ring[0]),
            Self::Clear {
                groups,
                points,
                combo,
            } => write!(
                f,
                "CLEAR  {} group(s) +{} (combo {})",
                groups.len(),
                points,
                combo
            ),
            Self::Fall(moves) => write!(f, "FALL   {} move(s)", moves.len()),
            Self::Refill(color) => write!(f, "REFILL {}", color),
        }
    }
}
