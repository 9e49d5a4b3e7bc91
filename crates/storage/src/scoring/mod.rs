//! Prediction scoring and leaderboard engine.
//!
//! Everything in this module is a pure, synchronous computation over rows
//! already fetched for the season in question. Re-running with the same
//! inputs yields identical output; the only time input is the caller-supplied
//! "now" used by the submission service, never by the scoring itself.

pub mod aggregate;
pub mod results;
pub mod scorer;
pub mod slots;
pub mod snapshot;

pub use aggregate::{RankedTotals, season_leaderboard};
pub use results::{ResultIndex, SlotResults};
pub use scorer::{SlotScore, score_slot};
pub use slots::{DIVISIONS, Slot, SlotKey, Split, build_universe};
pub use snapshot::{RankMovement, RankedWithMovement, leaderboard_with_movement};
