//! Tile-matching puzzle engine played on a perfect k-ary tree.
//!
//! Every node of the tree holds a color. A move rotates the colors of a node
//! and its children one step around the ring `[node, child_0, …, child_{k-1}]`.
//! Connected monochromatic groups of three or more are cleared, colors fall
//! toward the emptied slots, the root is refilled from the palette, and the
//! whole thing repeats until the board is quiet.
//!
//! ## Modules
//!
//! - [`tree`] — the board: colors, nodes, rotation, group detection, snapshots
//! - [`cascade`] — clearing, gravity and refill as a pull-based sequence of deltas
//! - [`play`] — turns, combo scoring, levels and the [`play::Session`] context
//! - [`players`] — interactive and automated move selection
pub mod cascade;
pub mod play;
pub mod players;
pub mod rejection;
pub mod tree;

#[cfg(test)]
mod testing;

pub use rejection::Rejection;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stable arena index of a node. The root is always 0.
pub type NodeId = usize;
/// Distance from the root (root = 0).
pub type Depth = usize;
/// Points, both per turn and cumulative per level.
pub type Score = u32;
/// Remaining player actions in a level.
pub type Moves = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD SHAPE
// ============================================================================
/// Children per internal node.
pub const DEGREE: usize = 2;
/// Tree depth for the early levels.
pub const SHALLOW_DEPTH: Depth = 3;
/// Tree depth from `DEEP_LEVEL` onward.
pub const DEEP_DEPTH: Depth = 4;
/// First level index played on the deeper tree.
pub const DEEP_LEVEL: usize = 10;

// ============================================================================
// MATCHING AND SCORING
// Group points: (size - 2) * 100. Combo: min(4, 1 + (matches - 1) * 0.5).
// ============================================================================
/// Smallest group that counts as a match.
pub const MATCH_SIZE: usize = 3;
/// Points awarded per node beyond the first two in a matched group.
pub const POINTS_PER_NODE: Score = 100;
/// Combo multiplier cap, in half-steps (8 halves = x4.0).
pub const COMBO_CAP: Score = 8;

// ============================================================================
// BOARD GENERATION
// ============================================================================
/// Re-roll passes spent removing matches from a freshly built board.
/// Best effort: residual matches may survive the last attempt.
pub const SANITIZE_ATTEMPTS: usize = 50;

// ============================================================================
// CAMPAIGN
// Two parallel tables indexed by level.
// ============================================================================
/// Moves granted per level.
pub const TURN_LIMITS: [Moves; 20] = [
    9, 9, 9, 9, 10, 10, 10, 10, 11, 11, 13, 13, 13, 13, 14, 14, 14, 14, 15, 15,
];
/// Score needed to clear each level.
pub const SCORE_TARGETS: [Score; 20] = [
    700, 800, 900, 1000, 1150, 1300, 1450, 1600, 1800, 2000, //
    2600, 3000, 3500, 4100, 4800, 5600, 6500, 7500, 8700, 10000,
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given verbosity.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
