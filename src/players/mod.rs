//! Move selection.
//!
//! Concrete types implementing [`Player`], the seam between a
//! [`Session`](crate::play::Session) loop and whatever picks the next node.
//!
//! - [`Robot`] — greedy autoplay, deterministic
//! - [`Human`] — interactive terminal prompt (requires `cli` feature)
#[cfg(feature = "cli")]
mod human;
mod robot;

#[cfg(feature = "cli")]
pub use human::*;
pub use robot::*;

use crate::NodeId;
use crate::play::Level;
use crate::play::Outcome;
use crate::tree::Tree;

/// Anything that can choose which node to rotate next.
pub trait Player {
    /// Picks an internal node to rotate, or `None` to stop playing.
    /// Called only while the level accepts moves.
    fn decide(&mut self, tree: &Tree, level: &Level) -> Option<NodeId>;
    /// Receives the result of every accepted or ignored command.
    fn notify(&mut self, _outcome: &Outcome) {}
}
