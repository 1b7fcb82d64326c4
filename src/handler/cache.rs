use std::time::SystemTime;

use chrono::{DateTime, Utc};

const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// formats `time` the way `Last-Modified` wants it, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`
pub fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(HTTP_DATE).to_string()
}

/// Whether a file last modified at `modified` can be answered with a 304.
/// Http dates only go down to the second, so that's what gets compared. A missing or unparseable header never matches
pub fn not_modified_since(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(|h| DateTime::parse_from_rfc2822(h.trim()).ok())
    else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}
