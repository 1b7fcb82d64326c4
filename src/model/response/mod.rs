use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod file_responses;
pub mod served_file;

/// the envelope every json response of this server is wrapped in, errors included
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ApiResponse {
    /// mirrors the http status code
    pub status: u16,
    pub message: String,
    /// the created file name on success, empty on errors
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: Status, message: &str, body: &str) -> Json<ApiResponse> {
        Json::from(ApiResponse {
            status: status.code,
            message: message.to_string(),
            body: body.to_string(),
        })
    }

    pub fn error(status: Status, message: &str) -> Json<ApiResponse> {
        Self::new(status, message, "")
    }
}
