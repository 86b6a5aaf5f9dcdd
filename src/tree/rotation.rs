use super::Tree;
use crate::NodeId;
use crate::Rejection;

/// The rotation move.
///
/// Rotating node `n` with children `c_0 … c_{k-1}` shifts the colors of the
/// ring `[n, c_0, …, c_{k-1}]` one step to the right: the last child's color
/// moves up into `n`, `n`'s color moves down into `c_0`, and each other
/// child takes its left sibling's color. The multiset of ring colors is
/// preserved and `k + 1` rotations restore the original coloring.
impl Tree {
    /// The ring a rotation at `id` would shift, in shift order.
    pub fn preview(&self, id: NodeId) -> Result<Vec<NodeId>, Rejection> {
        let node = self.node(id).ok_or(Rejection::UnknownNode(id))?;
        if node.is_leaf() {
            return Err(Rejection::Leaf(id));
        }
        Ok(std::iter::once(id)
            .chain(node.children().iter().copied())
            .collect())
    }
    /// Rotates colors around the ring at `id` and returns that ring.
    /// Nothing changes when the node is unknown or a leaf.
    pub fn rotate(&mut self, id: NodeId) -> Result<Vec<NodeId>, Rejection> {
        let ring = self.preview(id)?;
        let mut colors = ring.iter().map(|&i| self.color(i)).collect::<Vec<_>>();
        colors.rotate_right(1);
        for (&i, color) in ring.iter().zip(colors) {
            self.set(i, color);
        }
        log::trace!("rotated #{}: {}", id, self);
        Ok(ring)
    }
}
