use rocket::http::Status;

/// everything that can stop `POST /api/v1/create/file` from writing a file
#[derive(PartialEq, Debug)]
pub enum CreateFileError {
    /// the body could not be read off the connection
    UnreadableBody,
    /// the body is larger than `storage.maxuploadbytes`
    BodyTooLarge,
    /// the body isn't a valid [`crate::model::request::CreateFileRequest`]
    MalformedJson,
    /// the filename is empty or would land outside the root directory
    InvalidFilename,
    /// `fileContent` of an image isn't valid base64
    InvalidBase64,
    /// a file with the same name is already in the root directory
    AlreadyExists,
    /// checking for an existing file failed for some reason other than it not being there
    ExistenceCheck,
    /// the filetype tag is neither `image` nor `text`
    UnsupportedFiletype,
    FailWriteDisk,
}

impl CreateFileError {
    pub fn status(&self) -> Status {
        match self {
            Self::UnreadableBody
            | Self::MalformedJson
            | Self::InvalidFilename
            | Self::InvalidBase64 => Status::BadRequest,
            Self::BodyTooLarge => Status::PayloadTooLarge,
            Self::UnsupportedFiletype => Status::UnsupportedMediaType,
            // an existing file is a 500, not a 409
            Self::AlreadyExists | Self::ExistenceCheck | Self::FailWriteDisk => {
                Status::InternalServerError
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::UnreadableBody => "Error reading request body",
            Self::BodyTooLarge => "Request body is too large",
            Self::MalformedJson => "Invalid request format",
            Self::InvalidFilename => "Invalid file name",
            Self::InvalidBase64 => "Invalid base64 data",
            Self::AlreadyExists => "File already exists",
            Self::ExistenceCheck => "Failed to check if file already exists",
            Self::UnsupportedFiletype => "Filetype is not supported",
            Self::FailWriteDisk => "Error writing file",
        }
    }
}

/// everything that can stop a file from being served under `/api/v1/file/`
#[derive(PartialEq, Debug)]
pub enum RetrieveFileError {
    NotFound,
    /// the server process isn't allowed to read the path
    Forbidden,
    /// any other failure reading the path
    Unreadable,
    /// the requested byte range starts past the end of the file
    RangeNotSatisfiable,
}

impl RetrieveFileError {
    pub fn status(&self) -> Status {
        match self {
            Self::NotFound => Status::NotFound,
            Self::Forbidden => Status::Forbidden,
            Self::Unreadable => Status::InternalServerError,
            Self::RangeNotSatisfiable => Status::RangeNotSatisfiable,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "File not found",
            Self::Forbidden => "Permission denied",
            Self::Unreadable => "Failed to read file",
            Self::RangeNotSatisfiable => "Requested range not satisfiable",
        }
    }
}

impl From<&std::io::Error> for RetrieveFileError {
    fn from(value: &std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Unreadable,
        }
    }
}

/// result of probing for a file before it gets written
#[derive(Debug)]
pub enum FileExistsError {
    /// something is already at that path
    AlreadyExists,
    /// the check itself failed, e.g. permission denied on a parent directory
    Io(std::io::Error),
}
