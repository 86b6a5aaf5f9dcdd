use super::Color;
use super::Tree;
use crate::MATCH_SIZE;
use crate::NodeId;
use crate::POINTS_PER_NODE;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;
use std::collections::VecDeque;

/// A maximal set of tree-adjacent nodes sharing one color.
///
/// Node ids are listed in breadth-first discovery order from the
/// lowest-numbered member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    color: Color,
    nodes: Vec<NodeId>,
}

impl Group {
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }
    /// Large enough to clear.
    pub fn is_match(&self) -> bool {
        self.len() >= MATCH_SIZE
    }
    /// (size - 2) * 100
    pub fn points(&self) -> Score {
        self.len().saturating_sub(2) as Score * POINTS_PER_NODE
    }
}

/// Group detection.
///
/// Full recomputation on every call; nothing is cached between calls.
impl Tree {
    /// Partitions every colored node into groups. Empty slots belong to none.
    pub fn groups(&self) -> Vec<Group> {
        let mut seen = vec![false; self.len()];
        let mut groups = Vec::new();
        for node in self.nodes() {
            if seen[node.id()] {
                continue;
            }
            if let Some(color) = node.color() {
                groups.push(self.flood(node.id(), color, &mut seen));
            }
        }
        groups
    }
    /// Groups of at least [`MATCH_SIZE`].
    pub fn matches(&self) -> Vec<Group> {
        self.groups().into_iter().filter(Group::is_match).collect()
    }

    fn flood(&self, start: NodeId, color: Color, seen: &mut [bool]) -> Group {
        let mut nodes = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(id) = queue.pop_front() {
            nodes.push(id);
            for next in self.nodes()[id].neighbors() {
                if !seen[next] && self.color(next) == Some(color) {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Group { color, nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn scenario_after_rotation() {
        let mut tree = Tree::shape(2, 2).paint("R RB RB BB").unwrap();
        tree.rotate(1).unwrap();
        let matches = tree.matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].color(), Color::Blue);
        assert_eq!(matches[0].nodes(), &[2, 5, 6]);
        assert_eq!(matches[0].points(), 100);
        // r and a differ now, so no red group spans the left side
        let groups = tree.groups();
        assert!(groups.iter().filter(|g| g.contains(0)).all(|g| g.len() == 1));
        assert!(groups.iter().filter(|g| g.contains(1)).all(|g| g.len() == 1));
    }

    #[test]
    fn siblings_connect_only_through_parent() {
        let tree = Tree::shape(1, 2).paint("B RR").unwrap();
        assert_eq!(tree.groups().len(), 3);
        assert!(tree.matches().is_empty());
        let tree = Tree::shape(1, 2).paint("R RR").unwrap();
        assert_eq!(tree.matches().len(), 1);
    }

    #[test]
    fn empty_slots_belong_to_no_group() {
        let tree = Tree::shape(2, 2).paint(". RR .R R.").unwrap();
        let groups = tree.groups();
        let covered = groups.iter().map(Group::len).sum::<usize>();
        assert_eq!(covered, 4);
        assert!(groups.iter().all(|g| !g.contains(0) && !g.contains(3) && !g.contains(6)));
        // 1-4 and 2-5 are connected, the two halves are not (root is empty)
        assert_eq!(groups.len(), 2);
        assert!(tree.matches().is_empty());
    }

    #[test]
    fn groups_partition_colored_nodes() {
        let palette = Palette::from([Color::Red, Color::Blue]);
        for seed in 0..16 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let tree = Tree::build(4, 2, &palette, rng);
            let groups = tree.groups();
            let mut owner = vec![None; tree.len()];
            for (g, group) in groups.iter().enumerate() {
                for &id in group.nodes() {
                    assert_eq!(owner[id], None, "node in two groups");
                    assert_eq!(tree.color(id), Some(group.color()));
                    owner[id] = Some(g);
                }
            }
            assert!(owner.iter().all(Option::is_some));
            // maximal: no same-colored edge crosses two groups
            for (parent, child) in tree.edges() {
                if tree.color(parent) == tree.color(child) {
                    assert_eq!(owner[parent], owner[child]);
                }
            }
            // connected: every member but the first has a same-group neighbor
            for group in groups.iter() {
                for &id in group.nodes().iter().skip(1) {
                    let node = tree.node(id).unwrap();
                    assert!(node.neighbors().any(|n| group.contains(n)));
                }
            }
        }
    }

    #[test]
    fn points_per_size() {
        let tree = Tree::shape(2, 2).paint("B BB BBBB").unwrap();
        let groups = tree.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].points(), 500);
    }
}
