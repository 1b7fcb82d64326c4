/// the client-declared tag on a create request that decides how `fileContent` is decoded before it hits the disk.
/// This is never derived from the file's contents or extension
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum FileKind {
    /// `fileContent` is standard base64 and the decoded bytes are written
    Image,
    /// `fileContent` is written as-is
    Text,
}

impl TryFrom<&str> for FileKind {
    /// the unrecognized tag
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "image" => Ok(Self::Image),
            "text" => Ok(Self::Text),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileKind;

    #[test]
    fn parses_known_tags() {
        assert_eq!(FileKind::try_from("image"), Ok(FileKind::Image));
        assert_eq!(FileKind::try_from("text"), Ok(FileKind::Text));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(FileKind::try_from("Image"), Err("Image".to_string()));
        assert_eq!(FileKind::try_from("TEXT"), Err("TEXT".to_string()));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(FileKind::try_from("video"), Err("video".to_string()));
        assert_eq!(FileKind::try_from(""), Err(String::new()));
    }
}
