use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;

use crate::model::response::ApiResponse;

/// wraps anything no route answered (unknown paths, oversized headers, etc.) in the json envelope
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request) -> (Status, Json<ApiResponse>) {
    let message = status.reason().unwrap_or("Unknown Error");
    (status, ApiResponse::error(status, message))
}
