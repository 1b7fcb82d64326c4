use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::model::error::file_errors::FileExistsError;
use crate::model::repository::DirEntry;

/// every read and write against the storage directory goes through here.
/// Callers are responsible for making sure names don't escape the root,
/// see [`crate::model::request::CreateFileRequest::file_name`]
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    pub fn new(root: impl Into<PathBuf>) -> FileRepository {
        FileRepository { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// the on-disk location of `relative`
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// lists the root directory, sorted by name
    pub fn list(&self) -> io::Result<Vec<DirEntry>> {
        self.list_dir(Path::new(""))
    }

    /// lists a directory under the root, sorted by name
    pub fn list_dir(&self, relative: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = fs::read_dir(self.resolve(relative))?
            .map(|entry| {
                let entry = entry?;
                Ok(DirEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    is_dir: entry.file_type()?.is_dir(),
                })
            })
            .collect::<io::Result<Vec<DirEntry>>>()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// `Ok` only when nothing is at `file_name` yet.
    /// Any stat failure other than not found is passed back untouched
    pub fn exists(&self, file_name: &str) -> Result<(), FileExistsError> {
        match fs::metadata(self.resolve(file_name)) {
            Ok(_) => {
                log::warn!("File with name {file_name} already exists in directory");
                Err(FileExistsError::AlreadyExists)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileExistsError::Io(e)),
        }
    }

    /// creates or truncates `file_name` and writes `contents` to it. Parent directories are not created
    pub fn write(&self, file_name: &str, contents: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }
        let mut file = options.open(self.resolve(file_name))?;
        file.write_all(contents)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::model::error::file_errors::FileExistsError;
    use crate::model::repository::DirEntry;
    use crate::repository::file_repository::FileRepository;
    use crate::test::{cleanup, create_file_disk, create_folder_disk, storage_dir};

    fn repository() -> FileRepository {
        fs::create_dir_all(storage_dir()).unwrap();
        FileRepository::new(storage_dir())
    }

    #[test]
    fn exists_is_ok_when_missing() {
        let repo = repository();
        assert!(repo.exists("missing.txt").is_ok());
        cleanup();
    }

    #[test]
    fn exists_fails_when_present() {
        let repo = repository();
        create_file_disk("a.txt", "hello");
        assert!(matches!(
            repo.exists("a.txt"),
            Err(FileExistsError::AlreadyExists)
        ));
        cleanup();
    }

    #[test]
    fn exists_fails_for_directories() {
        let repo = repository();
        create_folder_disk("images");
        assert!(matches!(
            repo.exists("images"),
            Err(FileExistsError::AlreadyExists)
        ));
        cleanup();
    }

    #[test]
    fn exists_passes_through_other_errors() {
        let repo = repository();
        create_file_disk("a.txt", "hello");
        // a path through a regular file can't be stat'd, and isn't a not found either
        let result = repo.exists("a.txt/b.txt");
        assert!(matches!(result, Err(FileExistsError::Io(_))));
        cleanup();
    }

    #[test]
    fn write_creates_file() {
        let repo = repository();
        repo.write("b.bin", &[0, 1, 2, 255]).unwrap();
        let contents = fs::read(format!("{}/b.bin", storage_dir())).unwrap();
        assert_eq!(contents, vec![0, 1, 2, 255]);
        cleanup();
    }

    #[test]
    fn write_overwrites_file() {
        let repo = repository();
        create_file_disk("a.txt", "a much longer first version");
        repo.write("a.txt", b"short").unwrap();
        let contents = fs::read_to_string(format!("{}/a.txt", storage_dir())).unwrap();
        assert_eq!(contents, "short");
        cleanup();
    }

    #[test]
    fn write_fails_without_parent() {
        let repo = repository();
        assert!(repo.write("missing/a.txt", b"hello").is_err());
        cleanup();
    }

    #[cfg(unix)]
    #[test]
    fn write_uses_permissive_mode() {
        use std::os::unix::fs::PermissionsExt;
        let repo = repository();
        repo.write("a.txt", b"hello").unwrap();
        let mode = fs::metadata(format!("{}/a.txt", storage_dir()))
            .unwrap()
            .permissions()
            .mode();
        // umask may strip bits, but never adds execute
        assert_eq!(mode & 0o111, 0);
        assert_eq!(mode & 0o600, 0o600);
        cleanup();
    }

    #[test]
    fn list_is_sorted() {
        let repo = repository();
        create_file_disk("b.txt", "");
        create_folder_disk("c");
        create_file_disk("a.txt", "");
        assert_eq!(
            repo.list().unwrap(),
            vec![
                DirEntry {
                    name: "a.txt".to_string(),
                    is_dir: false
                },
                DirEntry {
                    name: "b.txt".to_string(),
                    is_dir: false
                },
                DirEntry {
                    name: "c".to_string(),
                    is_dir: true
                },
            ]
        );
        cleanup();
    }

    #[test]
    fn list_missing_root_fails() {
        let repo = FileRepository::new(format!("{}/nope", storage_dir()));
        assert!(repo.list().is_err());
        cleanup();
    }
}
