// Domain entities
pub mod account;
pub mod calendar;
pub mod config;
pub mod event;
pub mod media;
pub mod task;
pub mod task_list;

pub use account::*;
pub use calendar::*;
pub use config::*;
pub use event::*;
pub use media::*;
pub use task::*;
pub use task_list::*;
