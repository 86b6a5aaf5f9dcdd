//! The board: a perfect k-ary tree of colored nodes.
//!
//! - [`Color`] and [`Palette`] — what a node can hold and where fresh colors come from
//! - [`Node`] and [`Tree`] — arena-backed tree with parent and child indices
//! - [`Tree::rotate`] — the one move a player can make
//! - [`Group`] and [`Tree::matches`] — connected monochromatic regions
//! - [`Snapshot`] — read-only view handed to renderers
mod color;
mod group;
mod node;
mod palette;
mod rotation;
mod snapshot;
#[allow(clippy::module_inception)]
mod tree;

pub use color::*;
pub use group::*;
pub use node::*;
pub use palette::*;
pub use snapshot::*;
pub use tree::*;
