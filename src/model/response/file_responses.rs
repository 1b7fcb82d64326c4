use rocket::http::Status;
use rocket::serde::json::Json;

use crate::model::error::file_errors::CreateFileError;
use crate::model::response::ApiResponse;

#[derive(Responder, Debug)]
pub enum CreateFileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ApiResponse>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ApiResponse>),
    #[response(status = 413, content_type = "json")]
    TooLarge(Json<ApiResponse>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<ApiResponse>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<ApiResponse>),
}

impl CreateFileResponse {
    pub fn created(file_name: &str) -> CreateFileResponse {
        CreateFileResponse::Success(ApiResponse::new(
            Status::Ok,
            "Successfully created file",
            file_name,
        ))
    }
}

impl From<CreateFileError> for CreateFileResponse {
    fn from(value: CreateFileError) -> Self {
        let body = ApiResponse::error(value.status(), value.message());
        match value {
            CreateFileError::UnreadableBody
            | CreateFileError::MalformedJson
            | CreateFileError::InvalidFilename
            | CreateFileError::InvalidBase64 => Self::BadRequest(body),
            CreateFileError::BodyTooLarge => Self::TooLarge(body),
            CreateFileError::UnsupportedFiletype => Self::UnsupportedMediaType(body),
            CreateFileError::AlreadyExists
            | CreateFileError::ExistenceCheck
            | CreateFileError::FailWriteDisk => Self::Failure(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_keep_their_status_in_the_body() {
        for (error, code) in [
            (CreateFileError::MalformedJson, 400),
            (CreateFileError::InvalidBase64, 400),
            (CreateFileError::BodyTooLarge, 413),
            (CreateFileError::UnsupportedFiletype, 415),
            (CreateFileError::AlreadyExists, 500),
            (CreateFileError::FailWriteDisk, 500),
        ] {
            let body = match CreateFileResponse::from(error) {
                CreateFileResponse::Success(b)
                | CreateFileResponse::BadRequest(b)
                | CreateFileResponse::TooLarge(b)
                | CreateFileResponse::UnsupportedMediaType(b)
                | CreateFileResponse::Failure(b) => b.into_inner(),
            };
            assert_eq!(body.status, code);
            assert_eq!(body.body, "");
        }
    }

    #[test]
    fn created_echoes_file_name() {
        let CreateFileResponse::Success(body) = CreateFileResponse::created("a.txt") else {
            panic!("expected a success response");
        };
        assert_eq!(
            body.into_inner(),
            ApiResponse {
                status: 200,
                message: "Successfully created file".to_string(),
                body: "a.txt".to_string(),
            }
        );
    }
}
