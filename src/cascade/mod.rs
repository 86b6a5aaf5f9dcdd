//! Clearing, gravity and refill.
//!
//! A [`Cascade`] resolves one player action one [`Delta`] at a time so an
//! animation layer can pace it however it likes. The core never sleeps.
#[allow(clippy::module_inception)]
mod cascade;
mod delta;
mod gravity;

pub use cascade::*;
pub use delta::*;
