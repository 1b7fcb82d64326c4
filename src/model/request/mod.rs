use once_cell::sync::Lazy;
use regex::Regex;
use rocket::serde::{Deserialize, Serialize};

/// matches names that would land outside the root directory: absolute paths, `..` path segments, and NUL bytes
static UNSAFE_NAME: Lazy<Regex> = Lazy::new(|| {
    //language=RegExp
    Regex::new(r"^[/\\]|(^|[/\\])\.\.([/\\]|$)|\x00").unwrap()
});

/// the json body of `POST /api/v1/create/file`
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct CreateFileRequest {
    /// this value may be unsafe, see [`CreateFileRequest::file_name`]
    pub filename: String,
    /// kept as a string so an unknown tag can be told apart from a malformed body
    pub filetype: String,
    /// raw text, or base64 when `filetype` is `image`
    #[serde(rename = "fileContent")]
    pub file_content: String,
}

impl CreateFileRequest {
    /// returns the file name if it is safe to append to the root directory.
    /// Subdirectories are allowed (`images/cat.png`), but leaving the root is not.
    /// will return None if the name is empty or would escape the root
    pub fn file_name(&self) -> Option<&str> {
        if self.filename.is_empty() || UNSAFE_NAME.is_match(&self.filename) {
            return None;
        }
        Some(&self.filename)
    }
}
