use super::Color;
use crate::Depth;
use crate::NodeId;

/// A slot in the tree.
///
/// Identity, depth and links are fixed at construction; only the color
/// changes during play. The parent link is a plain index into the owning
/// [`Tree`](super::Tree) arena, used for traversal only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    depth: Depth,
    color: Option<Color>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, depth: Depth, parent: Option<NodeId>) -> Self {
        Self {
            id,
            depth,
            color: None,
            parent,
            children: Vec::new(),
        }
    }
    pub(crate) fn adopt(&mut self, child: NodeId) {
        self.children.push(child);
    }
    pub(crate) fn paint(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn depth(&self) -> Depth {
        self.depth
    }
    pub fn color(&self) -> Option<Color> {
        self.color
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
    }
    /// Parent first, then children in order. Edges are undirected for matching.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parent.into_iter().chain(self.children.iter().copied())
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "#{}{}", self.id, color),
            None => write!(f, "#{}.", self.id),
        }
    }
}
