use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};

use rocket::fs::NamedFile;
use rocket::http::uri::fmt::Path as UriPath;
use rocket::http::uri::Segments;
use rocket::http::{ContentType, Method, RawStr, Status};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::route::{Handler, Outcome, Route};
use rocket::serde::json::Json;
use rocket::tokio::fs;
use rocket::tokio::io::{AsyncReadExt, AsyncSeekExt};
use rocket::{Data, Request};

use crate::handler::cache::{http_date, not_modified_since};
use crate::handler::range::{parse_range, ByteRange, RangeRequest};
use crate::model::error::file_errors::RetrieveFileError;
use crate::model::repository::DirEntry;
use crate::model::response::served_file::ServedFile;
use crate::model::response::ApiResponse;
use crate::repository::FileRepository;

/// Serves everything under the storage directory, relative to wherever it's mounted.
/// Directories are served as their `index.html` if they have one, and as a link listing otherwise.
///
/// This is registered once when the server is built, see [`StaticFiles::any_method`] and [`StaticFiles::get_only`]
#[derive(Clone)]
pub struct StaticFiles {
    repository: FileRepository,
    methods: Vec<Method>,
}

impl StaticFiles {
    /// every method is answered with the file, POST and DELETE included
    pub fn any_method(repository: FileRepository) -> StaticFiles {
        StaticFiles {
            repository,
            methods: vec![
                Method::Get,
                Method::Head,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Patch,
                Method::Options,
            ],
        }
    }

    /// only GET (and so HEAD) is routed here. Pair this with a [`crate::handler::method_gate::MethodGate`]
    /// so other methods get a 405 instead of a 404
    pub fn get_only(repository: FileRepository) -> StaticFiles {
        StaticFiles {
            repository,
            methods: vec![Method::Get],
        }
    }

    async fn serve<'r>(&self, req: &'r Request<'_>, relative: PathBuf) -> Outcome<'r> {
        let path = self.repository.resolve(&relative);
        let metadata = match fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Failed to read {}: {e:?}", path.display());
                return error(req, RetrieveFileError::from(&e));
            }
        };
        if !metadata.is_dir() {
            return open(req, &path).await;
        }
        // relative links in the listing only resolve against a url ending in a slash
        if !req.uri().path().as_str().ends_with('/') {
            return Outcome::from(req, Redirect::moved(format!("{}/", req.uri().path().as_str())));
        }
        let index = path.join("index.html");
        if fs::metadata(&index).await.is_ok_and(|m| m.is_file()) {
            return open(req, &index).await;
        }
        match self.repository.list_dir(&relative) {
            Ok(entries) => Outcome::from(req, RawHtml(directory_listing(&entries))),
            Err(e) => {
                log::error!("Failed to list directory {}: {e:?}", path.display());
                error(req, RetrieveFileError::from(&e))
            }
        }
    }
}

#[rocket::async_trait]
impl Handler for StaticFiles {
    async fn handle<'r>(&self, req: &'r Request<'_>, _data: Data<'r>) -> Outcome<'r> {
        log::info!(
            "» Received request: Method={}, URL={}",
            req.method(),
            req.uri().path().as_str()
        );
        let relative = req
            .segments::<Segments<'_, UriPath>>(0..)
            .ok()
            .and_then(|segments| segments.to_path_buf(true).ok());
        match relative {
            Some(relative) => self.serve(req, relative).await,
            None => {
                log::warn!("Refusing to serve unsafe path {}", req.uri().path().as_str());
                error(req, RetrieveFileError::NotFound)
            }
        }
    }
}

impl From<StaticFiles> for Vec<Route> {
    fn from(files: StaticFiles) -> Self {
        files
            .methods
            .iter()
            .map(|method| Route::new(*method, "/<path..>", files.clone()))
            .collect()
    }
}

/// Serves the file at `path` with `Last-Modified` and `Accept-Ranges`.
/// GET and HEAD honor `If-Modified-Since`, and a single `Range` gets a 206 (or a 416 if it starts past the end)
async fn open<'r>(req: &'r Request<'_>, path: &Path) -> Outcome<'r> {
    let file = match NamedFile::open(path).await {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Failed to open {}: {e:?}", path.display());
            return error(req, RetrieveFileError::from(&e));
        }
    };
    let metadata = match file.metadata().await {
        Ok(m) => m,
        Err(e) => {
            log::warn!("Failed to read metadata for {}: {e:?}", path.display());
            return error(req, RetrieveFileError::from(&e));
        }
    };
    let modified = metadata.modified().ok();
    let headers = req.headers();
    if let Some(modified) = modified {
        let conditional = matches!(req.method(), Method::Get | Method::Head);
        if conditional && not_modified_since(headers.get_one("If-Modified-Since"), modified) {
            let last_modified = http_date(modified);
            return Outcome::from(req, ServedFile::NotModified { last_modified });
        }
    }
    let last_modified = modified.map(http_date);
    let file_size = metadata.len();
    match parse_range(headers.get_one("Range"), file_size) {
        RangeRequest::Whole => Outcome::from(
            req,
            ServedFile::Whole {
                file,
                last_modified,
            },
        ),
        RangeRequest::NotSatisfiable => {
            log::warn!(
                "Range {:?} is outside of {} ({file_size} bytes)",
                headers.get_one("Range"),
                path.display()
            );
            Outcome::from(req, ServedFile::NotSatisfiable { file_size })
        }
        RangeRequest::Partial(range) => {
            let content_type = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ContentType::from_extension);
            match read_range(file, range).await {
                Ok(bytes) => Outcome::from(
                    req,
                    ServedFile::Partial {
                        bytes,
                        content_type,
                        content_range: range.content_range(file_size),
                        last_modified,
                    },
                ),
                Err(e) => {
                    log::error!("Failed to read {range:?} of {}: {e:?}", path.display());
                    error(req, RetrieveFileError::from(&e))
                }
            }
        }
    }
}

async fn read_range(file: NamedFile, range: ByteRange) -> io::Result<Vec<u8>> {
    let mut file = file.take_file();
    file.seek(SeekFrom::Start(range.start)).await?;
    let mut bytes = Vec::new();
    file.take(range.len()).read_to_end(&mut bytes).await?;
    Ok(bytes)
}

fn error<'r>(req: &'r Request<'_>, reason: RetrieveFileError) -> Outcome<'r> {
    let body: Json<ApiResponse> = ApiResponse::error(reason.status(), reason.message());
    let status: Status = reason.status();
    Outcome::from(req, (status, body))
}

/// renders `entries` as a `<pre>` block of links, with a trailing slash on directories
fn directory_listing(entries: &[DirEntry]) -> String {
    let mut html = String::from("<pre>\n");
    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let name = RawStr::new(&entry.name);
        html.push_str(&format!(
            "<a href=\"{}{suffix}\">{}{suffix}</a>\n",
            name.percent_encode(),
            name.html_escape()
        ));
    }
    html.push_str("</pre>\n");
    html
}
