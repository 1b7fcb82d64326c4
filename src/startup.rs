use std::ffi::OsStr;
use std::fmt;

use crate::config::FileServerConfig;
use crate::model::repository::DirEntry;
use crate::repository::FileRepository;

#[derive(Debug, PartialEq)]
pub enum LocationError {
    /// argv\[0\] wasn't available at all
    Unknown { expected: String },
    Mismatch { expected: String, actual: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { expected } => write!(
                f,
                "Could not determine where the fileserver is running from. It should be located at {expected}"
            ),
            Self::Mismatch { expected, actual } => write!(
                f,
                "Fileserver is running from {actual}, but it should be located at {expected}"
            ),
        }
    }
}

pub fn announce(config: &FileServerConfig) {
    log::info!("» Starting Milkyteadrop Fileserver...");
    log::info!("{}", location_banner(config));
}

fn location_banner(config: &FileServerConfig) -> String {
    format!(
        "» Fileserver should be located at:  {}",
        config.expected_location()
    )
}

/// logs everything at the top level of the storage directory. Failing to read it isn't fatal
pub fn list_files(repository: &FileRepository) {
    log::info!("» Dir = Directory, F = File");
    log::info!("» Current files:");
    let entries = match repository.list() {
        Ok(entries) => entries,
        Err(e) => {
            log::error!(
                "Error occurred while trying to list files in fileserver root {}: {e}",
                repository.root().display()
            );
            return;
        }
    };
    for (index, entry) in entries.iter().enumerate() {
        log::info!("{}", format_entry(index, entry));
    }
    log::info!("—————————————————————————————————————————————————————");
}

fn format_entry(index: usize, entry: &DirEntry) -> String {
    let kind = if entry.is_dir { "Dir" } else { "F" };
    format!("{index}. {kind}:  {}", entry.name)
}

/// makes sure the process was started from `expected`, compared against argv\[0\] as given.
/// argv\[0\] doesn't have to be valid unicode
pub fn verify_location(expected: &str, actual: Option<&OsStr>) -> Result<(), LocationError> {
    match actual {
        Some(actual) if actual == OsStr::new(expected) => Ok(()),
        Some(actual) => Err(LocationError::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string_lossy().into_owned(),
        }),
        None => Err(LocationError::Unknown {
            expected: expected.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_entry_file_and_dir() {
        let file = DirEntry {
            name: "a.txt".to_string(),
            is_dir: false,
        };
        let dir = DirEntry {
            name: "images".to_string(),
            is_dir: true,
        };
        assert_eq!(format_entry(0, &file), "0. F:  a.txt");
        assert_eq!(format_entry(1, &dir), "1. Dir:  images");
    }

    #[test]
    fn verify_location_matches() {
        let expected = "/usr/local/bin/milkyteadrop-fs/milkyteadrop-fileserver";
        assert_eq!(verify_location(expected, Some(OsStr::new(expected))), Ok(()));
    }

    #[test]
    fn verify_location_is_exact() {
        let expected = "/usr/local/bin/milkyteadrop-fs/milkyteadrop-fileserver";
        // relative invocations don't count, even if they point at the same binary
        let res = verify_location(expected, Some(OsStr::new("./milkyteadrop-fileserver")));
        assert_eq!(
            res,
            Err(LocationError::Mismatch {
                expected: expected.to_string(),
                actual: "./milkyteadrop-fileserver".to_string(),
            })
        );
    }

    #[test]
    fn verify_location_without_argv() {
        let res = verify_location("/a/b", None);
        assert!(matches!(res, Err(LocationError::Unknown { .. })));
        assert!(res.unwrap_err().to_string().contains("/a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn verify_location_non_unicode_argv() {
        use std::os::unix::ffi::OsStrExt;

        let res = verify_location("/a/b", Some(OsStr::from_bytes(b"/a/\xffb")));
        assert!(matches!(res, Err(LocationError::Mismatch { .. })));
    }

    #[test]
    fn location_banner_spacing() {
        let mut config = FileServerConfig::default();
        config.storage.root = "/srv/fs/".to_string();
        config.startup.executable_name = "fs".to_string();
        assert_eq!(
            location_banner(&config),
            "» Fileserver should be located at:  /srv/fs/fs"
        );
    }
}
