use crate::NodeId;
use crate::tree::Color;
use crate::tree::Group;
use crate::tree::Palette;
use crate::tree::Tree;
use rand::Rng;

/// Gravity: colors fall from the root toward emptied slots.
impl Tree {
    /// Empties every node in the given groups.
    pub fn clear(&mut self, groups: &[Group]) {
        for id in groups.iter().flat_map(|g| g.nodes().iter().copied()) {
            self.set(id, None);
        }
    }
    /// One sweep over internal nodes, deepest level first. A colored node
    /// with an empty child moves its color into the first such child.
    /// Returns the (parent, child) moves made; empty means nothing changed.
    pub fn fall(&mut self) -> Vec<(NodeId, NodeId)> {
        let mut moves = Vec::new();
        for depth in (0..self.depth()).rev() {
            let ids = self.level(depth).map(|n| n.id()).collect::<Vec<_>>();
            for id in ids {
                if let Some(target) = self.vacancy(id) {
                    self.set(target, self.color(id));
                    self.set(id, None);
                    moves.push((id, target));
                }
            }
        }
        moves
    }
    /// Draws a fresh color into the root if it is empty.
    pub fn refill<R>(&mut self, palette: &Palette, rng: &mut R) -> Option<Color>
    where
        R: Rng + ?Sized,
    {
        if self.root().is_empty() {
            let color = palette.sample(rng);
            self.set(self.root().id(), Some(color));
            Some(color)
        } else {
            None
        }
    }

    /// First empty child of a colored node.
    fn vacancy(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id)?;
        if node.is_empty() {
            return None;
        }
        node.children()
            .iter()
            .copied()
            .find(|&c| self.color(c).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn clear_empties_groups() {
        let mut tree = Tree::shape(2, 2).paint("R BB BBRR").unwrap();
        let matches = tree.matches();
        tree.clear(&matches);
        assert_eq!(tree.to_string(), "R | . B | . . R R");
    }

    #[test]
    fn fall_moves_into_first_empty_child() {
        let mut tree = Tree::shape(1, 2).paint("R ..").unwrap();
        assert_eq!(tree.fall(), vec![(0, 1)]);
        assert_eq!(tree.to_string(), ". | R .");
        assert!(tree.fall().is_empty());
    }

    #[test]
    fn fall_sweeps_deepest_first() {
        // a (1) drops into a0 (3) before r (0) is visited, so r can
        // follow into a within the same sweep
        let mut tree = Tree::shape(2, 2).paint("R BY .GYY").unwrap();
        assert_eq!(tree.fall(), vec![(1, 3), (0, 1)]);
        assert_eq!(tree.to_string(), ". | R Y | B G Y Y");
    }

    #[test]
    fn fall_ignores_empty_parents() {
        let mut tree = Tree::shape(2, 2).paint(". .. ....").unwrap();
        assert!(tree.fall().is_empty());
    }

    #[test]
    fn refill_only_when_root_empty() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let palette = Palette::from([Color::Yellow]);
        let mut tree = Tree::shape(1, 2).paint("R ..").unwrap();
        assert_eq!(tree.refill(&palette, rng), None);
        tree.fall();
        assert_eq!(tree.refill(&palette, rng), Some(Color::Yellow));
        assert_eq!(tree.color(0), Some(Color::Yellow));
    }
}
