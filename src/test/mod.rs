use std::fs;
use std::fs::remove_dir_all;
use std::path::Path;

use crate::config::{FileServerConfig, ServerVariant};


#[cfg(test)]
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// each test thread gets its own storage directory so tests can run in parallel
#[cfg(test)]
pub fn storage_dir() -> String {
    let thread_name = current_thread_name();
    format!("./{thread_name}_files")
}

/// config pointed at [`storage_dir`], which is created if needed
#[cfg(test)]
pub fn test_config(variant: ServerVariant) -> FileServerConfig {
    fs::create_dir_all(Path::new(storage_dir().as_str())).unwrap();
    let mut config = FileServerConfig::default();
    config.server.variant = variant;
    config.storage.root = format!("{}/", storage_dir());
    config
}

#[cfg(test)]
pub fn create_file_disk(file_name: &str, contents: &str) {
    fs::create_dir_all(Path::new(storage_dir().as_str())).unwrap();
    fs::write(
        Path::new(format!("{}/{file_name}", storage_dir()).as_str()),
        contents,
    )
    .unwrap();
}

#[cfg(test)]
pub fn create_folder_disk(folder_name: &str) {
    fs::create_dir_all(Path::new(format!("{}/{folder_name}", storage_dir()).as_str())).unwrap();
}

#[cfg(test)]
pub fn read_file_disk(file_name: &str) -> Option<Vec<u8>> {
    fs::read(Path::new(format!("{}/{file_name}", storage_dir()).as_str())).ok()
}

#[cfg(test)]
pub fn cleanup() {
    remove_dir_all(Path::new(storage_dir().as_str())).unwrap_or(());
}
