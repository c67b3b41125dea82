mod day;
mod mass;
mod time;

pub use day::*;
pub use mass::*;
pub use time::*;
