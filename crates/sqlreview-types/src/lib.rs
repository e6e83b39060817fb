pub mod domain;
mod timestamp;

pub use domain::*;
pub use timestamp::Timestamp;
