/// one `bytes=` range, both ends inclusive and already clamped to the file
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// value for the `Content-Range` header of a 206
    pub fn content_range(&self, file_size: u64) -> String {
        format!("bytes {}-{}/{file_size}", self.start, self.end)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RangeRequest {
    /// no usable Range header, send everything
    Whole,
    Partial(ByteRange),
    /// starts past the end of the file, answered with a 416
    NotSatisfiable,
}

/// Parses a single-range `Range` header against a file of `file_size` bytes.
///
/// Handles `bytes=start-end`, `bytes=start-` and `bytes=-suffix`. Other units, multiple ranges
/// and anything that doesn't parse are ignored and the whole file is sent
pub fn parse_range(header: Option<&str>, file_size: u64) -> RangeRequest {
    let Some(ranges) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
        return RangeRequest::Whole;
    };
    if ranges.contains(',') {
        return RangeRequest::Whole;
    }
    let Some((start, end)) = ranges.split_once('-') else {
        return RangeRequest::Whole;
    };
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() {
        return suffix_range(end, file_size);
    }
    let Ok(start) = start.parse::<u64>() else {
        return RangeRequest::Whole;
    };
    if start >= file_size {
        return RangeRequest::NotSatisfiable;
    }
    let end = if end.is_empty() {
        file_size - 1
    } else {
        match end.parse::<u64>() {
            Ok(end) => end.min(file_size - 1),
            Err(_) => return RangeRequest::Whole,
        }
    };
    if start > end {
        return RangeRequest::NotSatisfiable;
    }
    RangeRequest::Partial(ByteRange { start, end })
}

fn suffix_range(suffix: &str, file_size: u64) -> RangeRequest {
    let Ok(suffix) = suffix.parse::<u64>() else {
        return RangeRequest::Whole;
    };
    if suffix == 0 || file_size == 0 {
        return RangeRequest::NotSatisfiable;
    }
    RangeRequest::Partial(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: file_size - 1,
    })
}
