use base64::{engine::general_purpose, Engine as _};

use crate::model::error::file_errors::{CreateFileError, FileExistsError};
use crate::model::file_types::FileKind;
use crate::model::request::CreateFileRequest;
use crate::repository::FileRepository;

/// parses the raw body of a create request
pub fn parse_create_request(body: &str) -> Result<CreateFileRequest, CreateFileError> {
    rocket::serde::json::from_str(body).map_err(|e| {
        log::error!("Error while trying to unmarshal request: {e:?}");
        CreateFileError::MalformedJson
    })
}

/// writes the contents of `request` to the storage directory.
/// Fails if anything already exists at that name.
///
/// returns the name of the file that was written
pub fn create_file(
    request: &CreateFileRequest,
    repository: &FileRepository,
) -> Result<String, CreateFileError> {
    let Some(file_name) = request.file_name() else {
        log::error!(
            "Refusing to create file with unsafe name {:?}",
            request.filename
        );
        return Err(CreateFileError::InvalidFilename);
    };
    match repository.exists(file_name) {
        Ok(()) => { /* no op */ }
        Err(FileExistsError::AlreadyExists) => return Err(CreateFileError::AlreadyExists),
        Err(FileExistsError::Io(e)) => {
            log::error!("Failed to check if file {file_name} already exists. Error is {e:?}");
            return Err(CreateFileError::ExistenceCheck);
        }
    };
    let contents = decode_contents(request)?;
    if let Err(e) = repository.write(file_name, &contents) {
        log::error!("Error writing file {file_name}: {e:?}");
        return Err(CreateFileError::FailWriteDisk);
    }
    log::info!("Created file {file_name} ({} bytes)", contents.len());
    Ok(file_name.to_string())
}

/// turns `fileContent` into the bytes that go on disk, based on the filetype tag
fn decode_contents(request: &CreateFileRequest) -> Result<Vec<u8>, CreateFileError> {
    match FileKind::try_from(request.filetype.as_str()) {
        Ok(FileKind::Image) => general_purpose::STANDARD
            .decode(&request.file_content)
            .map_err(|e| {
                log::error!("Error decoding base64 data: {e:?}");
                CreateFileError::InvalidBase64
            }),
        Ok(FileKind::Text) => Ok(request.file_content.as_bytes().to_vec()),
        Err(tag) => {
            log::error!("Filetype {tag:?} is not supported");
            Err(CreateFileError::UnsupportedFiletype)
        }
    }
}
