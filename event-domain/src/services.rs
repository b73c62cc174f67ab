// Domain services
pub mod progress;

pub use progress::*;
