pub mod history;
pub mod leaderboard;
pub mod predictions;

/// Placeholder labels for cosmetic joins that came back empty. A missing
/// member or driver row never fails a computation.
pub(crate) const UNKNOWN_MEMBER: &str = "Unknown member";
pub(crate) const UNKNOWN_DRIVER: &str = "Unknown driver";
