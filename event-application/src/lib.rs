// Event Management Application Layer

pub mod commands;
pub mod dtos;
pub mod error;
pub mod permissions;
pub mod queries;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use permissions::{EventOperation, PermissionKind, PermissionRequirement};
pub use state::AppState;
