pub mod json_file;
pub mod memory;
mod store;

#[cfg(test)]
mod fixtures;

pub use json_file::*;
pub use memory::*;
