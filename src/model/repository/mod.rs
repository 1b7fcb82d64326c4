/// a single item of a directory listing. Only ever built from a directory read, never persisted
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}
