use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("invalid request line: {0:?}")]
    InvalidRequestLine(String),
}

/// Parses one request from a buffer holding everything the client sent.
///
/// Lines without a colon in the header block are skipped. A missing blank
/// line means the whole buffer is treated as the head and the body is empty.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let (header_bytes, body_bytes) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], &buf[end + 4..]),
        None => (buf, &buf[buf.len()..]),
    };

    let head = String::from_utf8_lossy(header_bytes);
    let mut lines = head.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

    // Request line
    let request_line = lines.next().unwrap_or("");
    if request_line.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parts = request_line.split(' ').map(str::trim);
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    let version = parts.next().unwrap_or("");

    if method.is_empty() || !path.starts_with('/') {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    }

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    let mut request = Request {
        method: Method::parse(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: body_bytes.to_vec(),
    };

    // Body
    if let Some(len) = request.content_length() {
        request.body.truncate(len);
    }

    Ok(request)
}

/// Offset of the `\r\n\r\n` that ends the header block.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
