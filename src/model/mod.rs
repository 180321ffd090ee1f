pub mod config;
pub mod task;
pub mod theme_mode;

pub use config::*;
pub use task::*;
pub use theme_mode::*;
