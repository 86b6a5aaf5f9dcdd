use super::Config;
use super::Level;
use super::Outcome;
use super::Progress;
use super::Status;
use super::Turn;
use crate::NodeId;
use crate::Rejection;
use crate::SANITIZE_ATTEMPTS;
use crate::cascade::Cascade;
use crate::cascade::Delta;
use crate::tree::Snapshot;
use crate::tree::Tree;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The whole mutable state of a game in one place.
///
/// A session owns the board, the level in play, the turn accumulator, the
/// in-flight cascade (if any) and the random generator. It is created at a
/// level start and its board and level are replaced at every transition.
///
/// # Commands
///
/// - [`start_level`](Self::start_level) — fresh board and budget for a level
/// - [`rotate`](Self::rotate) — one full action, resolved synchronously
/// - [`act`](Self::act) + [`step`](Self::step) — the same action, one delta at a time
/// - [`proceed`](Self::proceed) — advance after a win, retry after a loss
/// - [`snapshot`](Self::snapshot) — current coloring for redraw
///
/// # Processing
///
/// Between `act` and the `step` that returns `None`, the session is
/// processing: further actions are ignored rather than queued, and the
/// cascade cannot be cancelled.
#[derive(Debug, Clone)]
pub struct Session<R = SmallRng> {
    config: Config,
    rng: R,
    level: Level,
    tree: Tree,
    turn: Turn,
    cascade: Option<Cascade>,
}

impl Session<SmallRng> {
    /// The default campaign from level 0, reproducible from `seed`.
    pub fn seeded(seed: u64) -> anyhow::Result<Self> {
        Self::new(Config::default(), SmallRng::seed_from_u64(seed))
    }
}

/// Construction and level transitions.
impl<R> Session<R>
where
    R: Rng,
{
    /// Starts level 0 of the given campaign.
    pub fn new(config: Config, mut rng: R) -> anyhow::Result<Self> {
        config.validate()?;
        let (level, tree) = Self::deal(&config, &mut rng, 0);
        Ok(Self {
            config,
            rng,
            level,
            tree,
            turn: Turn::default(),
            cascade: None,
        })
    }
    /// Resumes from an explicit board and level, e.g. a hand-built puzzle.
    pub fn from_parts(config: Config, level: Level, tree: Tree, rng: R) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            level,
            tree,
            turn: Turn::default(),
            cascade: None,
        })
    }
    /// Replaces board and level with a fresh start at `index`. Past the end
    /// of the campaign this wraps to level 0 and reports completion.
    /// Ignored while a cascade is in progress.
    pub fn start_level(&mut self, index: usize) -> Progress {
        if self.is_processing() {
            log::debug!("ignored level start: {}", Rejection::Busy);
            return Progress::Unchanged;
        }
        let (index, progress) = match index < self.config.levels() {
            true => (index, Progress::Started(index)),
            false => (0, Progress::CampaignComplete),
        };
        if progress == Progress::CampaignComplete {
            log::info!("campaign complete, starting over");
        }
        let (level, tree) = Self::deal(&self.config, &mut self.rng, index);
        self.level = level;
        self.tree = tree;
        self.turn = Turn::default();
        progress
    }
    /// Moves on from a finished level: the next one after a win, the same
    /// one again after a loss. Does nothing while the level is in play.
    pub fn proceed(&mut self) -> Progress {
        let index = self.level.index();
        match self.level.status() {
            Status::Playing => Progress::Unchanged,
            Status::Won => match self.start_level(index + 1) {
                Progress::Started(next) => Progress::Advanced(next),
                progress => progress,
            },
            Status::Lost => self.restart(),
        }
    }
    /// Starts the current level over from scratch.
    pub fn restart(&mut self) -> Progress {
        let index = self.level.index();
        match self.start_level(index) {
            Progress::Started(_) => Progress::Restarted(index),
            progress => progress,
        }
    }

    fn deal(config: &Config, rng: &mut R, index: usize) -> (Level, Tree) {
        let level = Level::new(
            index,
            config.turn_limits[index],
            config.score_targets[index],
        );
        let mut tree = Tree::build(level.depth(), config.degree, &config.palette, rng);
        if tree.sanitize(&config.palette, rng, SANITIZE_ATTEMPTS) == SANITIZE_ATTEMPTS
            && !tree.matches().is_empty()
        {
            log::warn!("level {} starts with matches on the board", index + 1);
        }
        log::info!("{}", level);
        (level, tree)
    }
}

/// Player actions.
impl<R> Session<R>
where
    R: Rng,
{
    /// Plays one full action: rotation, every cascade round, and turn
    /// finalization. Rejected or ignored input comes back with
    /// `accepted == false` and changes nothing.
    pub fn rotate(&mut self, id: NodeId) -> Outcome {
        match self.try_rotate(id) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::debug!("ignored rotate #{}: {}", id, e);
                Outcome::ignored(&self.level)
            }
        }
    }
    /// Fallible version of [`rotate`](Self::rotate). The error is a
    /// [`Rejection`] explaining why nothing happened.
    pub fn try_rotate(&mut self, id: NodeId) -> anyhow::Result<Outcome> {
        let mut deltas = vec![self.act(id)?];
        while let Some(delta) = self.step() {
            deltas.push(delta);
        }
        Ok(Outcome::accepted(&self.level, self.turn.total(), deltas))
    }
    /// Starts an action: rotates and begins processing. Drive the rest
    /// with [`step`](Self::step).
    pub fn act(&mut self, id: NodeId) -> anyhow::Result<Delta> {
        if self.is_processing() {
            return Err(Rejection::Busy.into());
        }
        if !self.level.is_open() {
            return Err(Rejection::LevelOver.into());
        }
        let ring = self.tree.rotate(id)?;
        self.turn = Turn::start();
        self.cascade = Some(Cascade::new());
        log::debug!("rotate #{}", id);
        Ok(Delta::Rotate(ring))
    }
    /// Next board change of the action in progress. Returns `None` once the
    /// board is quiet, at which point the turn has been scored, a move
    /// spent, and the level status updated.
    pub fn step(&mut self) -> Option<Delta> {
        let delta = self.cascade.as_mut()?.advance(
            &mut self.tree,
            &self.config.palette,
            &mut self.rng,
            &mut self.turn,
        );
        if delta.is_none() {
            self.finalize();
        }
        delta
    }

    fn finalize(&mut self) {
        self.cascade = None;
        let points = self.turn.finalize();
        let status = self.level.record(points);
        log::info!("+{} | {}", points, self.level);
        if status.is_over() {
            log::info!("{}", status);
        }
    }
}

/// Read access.
impl<R> Session<R> {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn level(&self) -> &Level {
        &self.level
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn turn(&self) -> &Turn {
        &self.turn
    }
    /// An action is being resolved; new input is ignored.
    pub fn is_processing(&self) -> bool {
        self.cascade.is_some()
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.tree)
    }
}
