pub(crate) mod health;
pub mod masses;

pub use health::health_check;
