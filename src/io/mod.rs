pub mod config_io;
pub mod paths;
pub mod session;
pub mod storage;
pub mod tasks_io;
