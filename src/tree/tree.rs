use super::Color;
use super::Node;
use super::Palette;
use crate::Arbitrary;
use crate::Depth;
use crate::NodeId;
use rand::Rng;

/// A perfect k-ary tree of colored nodes, stored as an arena.
///
/// Nodes are numbered breadth-first from the root (id 0), so the arena order
/// is also level order. Every node above `depth` has exactly `degree`
/// children; every node at `depth` is a leaf. The shape never changes after
/// construction, only colors do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    depth: Depth,
    degree: usize,
}

/// Construction.
impl Tree {
    /// An uncolored perfect tree. `degree` must be at least 1.
    pub fn shape(depth: Depth, degree: usize) -> Self {
        debug_assert!(degree >= 1, "degree must be positive");
        let mut nodes = vec![Node::new(0, 0, None)];
        let mut frontier = vec![0];
        for d in 1..=depth {
            let mut next = Vec::with_capacity(frontier.len() * degree);
            for parent in frontier {
                for _ in 0..degree {
                    let id = nodes.len();
                    nodes.push(Node::new(id, d, Some(parent)));
                    nodes[parent].adopt(id);
                    next.push(id);
                }
            }
            frontier = next;
        }
        Self {
            nodes,
            depth,
            degree,
        }
    }
    /// A perfect tree with every node drawn uniformly from the palette,
    /// in breadth-first order.
    pub fn build<R>(depth: Depth, degree: usize, palette: &Palette, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut tree = Self::shape(depth, degree);
        for node in tree.nodes.iter_mut() {
            node.paint(Some(palette.sample(rng)));
        }
        tree
    }
    /// Colors the tree from a breadth-first string of color letters,
    /// with `.` for an empty slot. Whitespace is ignored.
    pub fn paint(mut self, colors: &str) -> anyhow::Result<Self> {
        let colors = colors
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Ok(None),
                c => Color::try_from(c).map(Some),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if colors.len() != self.nodes.len() {
            return Err(anyhow::anyhow!(
                "expected {} colors, got {}",
                self.nodes.len(),
                colors.len()
            ));
        }
        for (node, color) in self.nodes.iter_mut().zip(colors) {
            node.paint(color);
        }
        Ok(self)
    }
}

/// Board generation.
impl Tree {
    /// Re-rolls every node in a match until no match remains, giving up
    /// after `attempts` passes. Residual matches may survive. Returns the
    /// number of passes that re-rolled something.
    pub fn sanitize<R>(&mut self, palette: &Palette, rng: &mut R, attempts: usize) -> usize
    where
        R: Rng + ?Sized,
    {
        for attempt in 0..attempts {
            let matches = self.matches();
            if matches.is_empty() {
                return attempt;
            }
            log::debug!("re-rolling {} initial matches", matches.len());
            for id in matches.iter().flat_map(|g| g.nodes().iter().copied()) {
                self.set(id, Some(palette.sample(rng)));
            }
        }
        attempts
    }
}

/// Structure and color accessors.
impl Tree {
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
    /// Color of a node; `None` for an empty slot or an unknown id.
    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.node(id).and_then(Node::color)
    }
    pub fn colors(&self) -> Vec<Option<Color>> {
        self.nodes.iter().map(Node::color).collect()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn depth(&self) -> Depth {
        self.depth
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
    /// All nodes at one depth, left to right.
    pub fn level(&self, depth: Depth) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.depth() == depth)
    }
    /// Nodes that can be rotated.
    pub fn internals(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| !n.is_leaf())
    }
    /// Static (parent, child) pairs.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.nodes
            .iter()
            .flat_map(|n| n.children().iter().map(move |&c| (n.id(), c)))
            .collect()
    }
    pub(crate) fn set(&mut self, id: NodeId, color: Option<Color>) {
        self.nodes[id].paint(color);
    }
}

impl Arbitrary for Tree {
    fn random() -> Self {
        Self::build(
            crate::SHALLOW_DEPTH,
            crate::DEGREE,
            &Palette::default(),
            &mut rand::rng(),
        )
    }
}

/// One row per depth, e.g. `R | B R | ...`.
impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for depth in 0..=self.depth {
            let row = self
                .level(depth)
                .map(|n| n.color().map_or('.', |c| c.letter()))
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            if depth > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
