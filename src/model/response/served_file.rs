use std::io::Cursor;

use rocket::fs::NamedFile;
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use rocket::Request;

use crate::model::error::file_errors::RetrieveFileError;
use crate::model::response::ApiResponse;

/// a file out of the storage directory, with the caching and range headers that go along with it
pub enum ServedFile {
    Whole {
        file: NamedFile,
        last_modified: Option<String>,
    },
    /// 206 with just the requested bytes
    Partial {
        bytes: Vec<u8>,
        content_type: Option<ContentType>,
        content_range: String,
        last_modified: Option<String>,
    },
    /// 304, the client's copy is current
    NotModified { last_modified: String },
    /// 416, carries the full size of the file
    NotSatisfiable { file_size: u64 },
}

impl<'r> Responder<'r, 'static> for ServedFile {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ServedFile::Whole {
                file,
                last_modified,
            } => {
                let mut builder = Response::build_from(file.respond_to(req)?);
                builder.raw_header("Accept-Ranges", "bytes");
                if let Some(last_modified) = last_modified {
                    builder.raw_header("Last-Modified", last_modified);
                }
                builder.ok()
            }
            ServedFile::Partial {
                bytes,
                content_type,
                content_range,
                last_modified,
            } => {
                let mut builder = Response::build();
                builder
                    .status(Status::PartialContent)
                    .raw_header("Accept-Ranges", "bytes")
                    .raw_header("Content-Range", content_range);
                if let Some(content_type) = content_type {
                    builder.header(content_type);
                }
                if let Some(last_modified) = last_modified {
                    builder.raw_header("Last-Modified", last_modified);
                }
                builder.sized_body(bytes.len(), Cursor::new(bytes)).ok()
            }
            ServedFile::NotModified { last_modified } => Response::build()
                .status(Status::NotModified)
                .raw_header("Last-Modified", last_modified)
                .ok(),
            ServedFile::NotSatisfiable { file_size } => {
                let reason = RetrieveFileError::RangeNotSatisfiable;
                let body = ApiResponse::error(reason.status(), reason.message());
                Response::build_from(body.respond_to(req)?)
                    .status(reason.status())
                    .raw_header("Content-Range", format!("bytes */{file_size}"))
                    .ok()
            }
        }
    }
}
