// Domain value objects
pub mod event_type;
pub mod identifiers;
pub mod money;
pub mod progress_type;
pub mod task_status;

pub use event_type::*;
pub use identifiers::*;
pub use money::*;
pub use progress_type::*;
pub use task_status::*;
