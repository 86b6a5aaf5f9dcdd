use super::Color;
use super::Tree;
use crate::Depth;
use crate::NodeId;
use serde::Deserialize;
use serde::Serialize;

/// One node as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: NodeId,
    pub depth: Depth,
    pub color: Option<Color>,
    pub parent: Option<NodeId>,
}

/// Everything a renderer needs to redraw the board.
///
/// Placement, drawing and hover indicators are the renderer's business;
/// the snapshot only carries identity, coloring and the static edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub depth: Depth,
    pub degree: usize,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl From<&Tree> for Snapshot {
    fn from(tree: &Tree) -> Self {
        Self {
            depth: tree.depth(),
            degree: tree.degree(),
            vertices: tree
                .nodes()
                .iter()
                .map(|n| Vertex {
                    id: n.id(),
                    depth: n.depth(),
                    color: n.color(),
                    parent: n.parent(),
                })
                .collect(),
            edges: tree.edges(),
        }
    }
}
