use rocket::data::{Data, ToByteUnit};
use rocket::http::uri::Origin;
use rocket::State;

use crate::config::FileServerConfig;
use crate::model::error::file_errors::CreateFileError;
use crate::model::response::file_responses::CreateFileResponse;
use crate::repository::FileRepository;
use crate::service::file_service;

/// accepts a json [`crate::model::request::CreateFileRequest`] and writes its contents to the storage directory.
/// Other methods on this path are answered by a [`crate::handler::method_gate::MethodGate`]
#[post("/create/file", data = "<body>")]
pub async fn create_file(
    body: Data<'_>,
    uri: &Origin<'_>,
    repository: &State<FileRepository>,
    config: &State<FileServerConfig>,
) -> CreateFileResponse {
    log::info!("» Received request: Method=POST, URL={}", uri.path().as_str());
    let body = match read_body(body, config.storage.max_upload_bytes).await {
        Ok(body) => body,
        Err(e) => return e.into(),
    };
    let request = match file_service::parse_create_request(&body) {
        Ok(request) => request,
        Err(e) => return e.into(),
    };
    match file_service::create_file(&request, repository) {
        Ok(file_name) => CreateFileResponse::created(&file_name),
        Err(e) => e.into(),
    }
}

async fn read_body(body: Data<'_>, limit: u64) -> Result<String, CreateFileError> {
    match body.open(limit.bytes()).into_string().await {
        Ok(body) if body.is_complete() => Ok(body.into_inner()),
        Ok(_) => {
            log::error!("Request body is larger than the limit of {limit} bytes");
            Err(CreateFileError::BodyTooLarge)
        }
        Err(e) => {
            log::error!("Error reading request body: {e:?}");
            Err(CreateFileError::UnreadableBody)
        }
    }
}
