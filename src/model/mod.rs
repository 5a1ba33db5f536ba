pub mod task;
pub mod list;
pub mod registry;
pub mod timer;
pub mod config;

pub use task::*;
pub use list::*;
pub use registry::*;
pub use timer::*;
pub use config::*;
