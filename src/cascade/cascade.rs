use super::Delta;
use crate::Score;
use crate::play::Turn;
use crate::tree::Palette;
use crate::tree::Tree;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Detect,
    Gravity,
    Done,
}

/// Pull-based resolution of everything one action sets off.
///
/// Each call to [`advance`](Self::advance) performs the next discrete step
/// and reports it as a [`Delta`]:
///
/// 1. detect matches; if there are none, the cascade is over
/// 2. score every match into the [`Turn`] and empty it (`Clear`)
/// 3. sweep gravity (`Fall`) until a sweep moves nothing
/// 4. if the root is then empty, refill it (`Refill`) and go back to 3
/// 5. go back to 1
///
/// Gravity always settles: every sweep either moves a color strictly
/// deeper or the root refill fires, and the board has finitely many slots.
#[derive(Debug, Clone, Default)]
pub struct Cascade {
    phase: Phase,
    rounds: usize,
}

impl Cascade {
    pub fn new() -> Self {
        Self::default()
    }
    /// True once a detection pass found nothing to clear.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
    /// Clear/refill rounds completed or in flight.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Performs the next step, or returns `None` once the board is quiet.
    pub fn advance<R>(
        &mut self,
        tree: &mut Tree,
        palette: &Palette,
        rng: &mut R,
        turn: &mut Turn,
    ) -> Option<Delta>
    where
        R: Rng + ?Sized,
    {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Detect => {
                    let groups = tree.matches();
                    if groups.is_empty() {
                        log::debug!("quiet after {} round(s)", self.rounds);
                        self.phase = Phase::Done;
                        return None;
                    }
                    let points: Score = groups.iter().map(|g| turn.score(g)).sum();
                    tree.clear(&groups);
                    self.rounds += 1;
                    self.phase = Phase::Gravity;
                    log::debug!(
                        "round {}: cleared {} group(s) for {} (combo x{})",
                        self.rounds,
                        groups.len(),
                        points,
                        turn.multiplier()
                    );
                    return Some(Delta::Clear {
                        groups,
                        points,
                        combo: turn.matches(),
                    });
                }
                Phase::Gravity => {
                    let moves = tree.fall();
                    if !moves.is_empty() {
                        log::trace!("fall {:?}: {}", moves, tree);
                        return Some(Delta::Fall(moves));
                    }
                    if let Some(color) = tree.refill(palette, rng) {
                        log::trace!("refill {}: {}", color, tree);
                        return Some(Delta::Refill(color));
                    }
                    self.phase = Phase::Detect;
                }
            }
        }
    }

    /// Runs to quiescence and collects every step.
    pub fn drain<R>(
        &mut self,
        tree: &mut Tree,
        palette: &Palette,
        rng: &mut R,
        turn: &mut Turn,
    ) -> Vec<Delta>
    where
        R: Rng + ?Sized,
    {
        std::iter::from_fn(|| self.advance(tree, palette, rng, turn)).collect()
    }
}
