//! Turns, levels and the session that ties them to a board.
//!
//! - [`Turn`] — per-action score and combo accumulator
//! - [`Level`] and [`Status`] — move budget, target, win/loss
//! - [`Config`] — palette, degree and the campaign tables
//! - [`Session`] — the single owner of board, level, turn and generator
//! - [`Outcome`] and [`Progress`] — what commands report back
mod config;
mod level;
mod outcome;
mod session;
mod turn;

pub use config::*;
pub use level::*;
pub use outcome::*;
pub use session::*;
pub use turn::*;
