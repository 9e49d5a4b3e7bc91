pub mod driver;
pub mod member;
pub mod prediction;
pub mod race_result;
pub mod schedule;
pub mod season;
