use crate::http::headers::Headers;
use crate::http::request::{Method, Request, parse_form, split_target};
use crate::http::response::StatusCode;

/// Upper bound for the request line plus header block.
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Upper bound for a request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// More bytes are needed; not a failure while the stream is still open.
    #[error("incomplete request")]
    Incomplete,
    #[error("stream ended before the request was complete")]
    UnexpectedEof,
    #[error("malformed request line")]
    InvalidRequest,
    #[error("unsupported method")]
    InvalidMethod,
    #[error("malformed header line")]
    InvalidHeader,
    #[error("invalid Content-Length")]
    InvalidContentLength,
    #[error("header block too large")]
    HeadersTooLarge,
    #[error("body too large")]
    BodyTooLarge,
}

impl ParseError {
    /// Status to answer with, or `None` when the connection should just be closed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ParseError::Incomplete | ParseError::UnexpectedEof => None,
            ParseError::InvalidMethod => Some(StatusCode::MethodNotAllowed),
            ParseError::BodyTooLarge => Some(StatusCode::PayloadTooLarge),
            _ => Some(StatusCode::BadRequest),
        }
    }
}

/// Parses one request from the front of `buf`.
///
/// On success returns the request and the number of bytes it occupied. Bytes
/// past the declared body length are never consumed. A body is only read for
/// POST requests carrying `Content-Length`.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = match find_headers_end(buf) {
        Some(end) => end,
        None if buf.len() > MAX_HEADER_BYTES => return Err(ParseError::HeadersTooLarge),
        None => return Err(ParseError::Incomplete),
    };
    if headers_end > MAX_HEADER_BYTES {
        return Err(ParseError::HeadersTooLarge);
    }

    let headers_str =
        std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequest)?;
    let mut lines = headers_str.split("\r\n");

    // Request line: METHOD SP TARGET SP VERSION
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let parts: Vec<&str> = request_line.split(' ').collect();
    let &[method_str, target, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequest);
    };

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;
    if !target.starts_with('/') || !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidRequest);
    }

    let mut headers = Headers::new();
    for line in lines {
        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidHeader);
        }
        headers.insert(key, value.trim());
    }

    let content_length = headers
        .get("Content-Length")
        .map(|v| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?;

    let body_start = headers_end + 4;
    let body_len = match (method, content_length) {
        (Method::POST, Some(len)) => len,
        _ => 0,
    };
    if body_len > MAX_BODY_BYTES {
        return Err(ParseError::BodyTooLarge);
    }
    if buf.len() - body_start < body_len {
        return Err(ParseError::Incomplete);
    }

    let body = buf[body_start..body_start + body_len].to_vec();
    let (path, query) = split_target(target);

    let request = Request {
        method,
        path,
        query,
        version: version.to_string(),
        headers,
        form: parse_form(&body),
        body,
    };

    Ok((request, body_start + body_len))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
