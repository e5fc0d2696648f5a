pub mod calculations;
pub mod constants;
pub mod matcher;
pub mod units;

pub use calculations::Summarizer;
pub use constants::*;
pub use matcher::{find_closest_match, similarity};
pub use units::UnitTable;
