use super::Player;
use crate::NodeId;
use crate::Score;
use crate::play::Level;
use crate::play::Turn;
use crate::tree::Tree;

/// Greedy autoplay.
///
/// Tries every rotation on a scratch copy of the board and keeps the one
/// whose immediate matches score highest, combo included. Cascades past the
/// first clear are not simulated since refills are random. Ties go to the
/// lowest node id, so the choice never depends on the generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Robot {
    /// Points the matches right after rotating `id` would be worth.
    pub fn evaluate(tree: &Tree, id: NodeId) -> Score {
        let ref mut scratch = tree.clone();
        match scratch.rotate(id) {
            Err(_) => 0,
            Ok(_) => {
                let mut turn = Turn::start();
                for group in scratch.matches() {
                    turn.score(&group);
                }
                turn.total()
            }
        }
    }
    /// Best rotation and its value.
    pub fn best(tree: &Tree) -> Option<(NodeId, Score)> {
        tree.internals()
            .map(|node| (node.id(), Self::evaluate(tree, node.id())))
            .fold(None, |best, (id, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((id, score)),
            })
    }
}

impl Player for Robot {
    fn decide(&mut self, tree: &Tree, level: &Level) -> Option<NodeId> {
        if !level.is_open() {
            return None;
        }
        let (id, score) = Self::best(tree)?;
        log::debug!("robot picks #{} worth {}", id, score);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Session;
    use crate::play::Status;

    fn board() -> Tree {
        Tree::shape(2, 2).paint("Y YG RBRY").unwrap()
    }

    #[test]
    fn evaluates_each_rotation() {
        let tree = board();
        assert!(tree.matches().is_empty());
        assert_eq!(Robot::evaluate(&tree, 0), 0);
        assert_eq!(Robot::evaluate(&tree, 1), 0);
        assert_eq!(Robot::evaluate(&tree, 2), 100);
        assert_eq!(Robot::evaluate(&tree, 3), 0);
        assert_eq!(Robot::evaluate(&tree, 99), 0);
    }

    #[test]
    fn picks_the_scoring_rotation() {
        let level = Level::new(0, 9, 700);
        assert_eq!(Robot.decide(&board(), &level), Some(2));
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let tree = Tree::shape(2, 2).paint("R BG YRGB").unwrap();
        assert_eq!(Robot::best(&tree), Some((0, 0)));
    }

    #[test]
    fn leaves_board_untouched() {
        let tree = board();
        let before = tree.clone();
        Robot::best(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn stops_when_level_is_over() {
        let mut level = Level::new(0, 1, 700);
        level.record(0);
        assert_eq!(Robot.decide(&board(), &level), None);
    }

    #[test]
    fn plays_a_level_to_the_end() {
        let mut session = Session::seeded(7).unwrap();
        let mut robot = Robot;
        let mut turns = 0;
        while let Some(id) = robot.decide(session.tree(), session.level()) {
            assert!(session.rotate(id).accepted);
            turns += 1;
        }
        assert!(session.level().status().is_over());
        assert!(turns <= 9);
        assert_ne!(session.level().status(), Status::Playing);
    }
}
