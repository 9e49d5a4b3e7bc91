mod driver;
mod member;
mod prediction;
mod race_result;
mod schedule;
mod season;

pub use driver::Driver;
pub use member::Member;
pub use prediction::Prediction;
pub use race_result::RaceResult;
pub use schedule::Schedule;
pub use season::Season;
