pub mod history;
pub mod leaderboard;
pub mod predictions;
pub mod seasons;
