pub mod cache;
pub mod catchers;
pub mod file_handler;
pub mod method_gate;
pub mod range;
pub mod static_files;
