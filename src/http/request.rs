use std::collections::HashMap;

use crate::http::encoding::{self, Encoding};

/// HTTP request methods.
///
/// Only GET and POST have routes behind them; any other token is carried in
/// `Other` so the router can answer 405 on the file prefix and ignore it
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any token not listed above, kept verbatim
    Other(String),
}

/// A parsed HTTP request.
///
/// Header names are stored lowercased; the last occurrence of a repeated
/// header wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, always starting with "/"
    pub path: String,
    /// Version token from the request line, empty when the client omitted it
    pub version: String,
    /// Request headers keyed by lowercased name
    pub headers: HashMap<String, String>,
    /// Bytes following the blank line after the headers
    pub body: Vec<u8>,
}

impl Method {
    /// Maps a request-line token to a method. Matching is case-sensitive, so
    /// `get` ends up as `Other("get")`.
    ///
    /// # Example
    ///
    /// ```
    /// # use harbor::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("BREW"), Method::Other("BREW".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(s) => s,
        }
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Returns the declared Content-Length, or `None` if it is missing or not
    /// a valid number.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
    }

    /// The User-Agent value, or an empty string when the client sent none.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }

    /// The first scheme in Accept-Encoding that the server recognises.
    pub fn accepted_encoding(&self) -> Option<Encoding> {
        self.header("Accept-Encoding").and_then(encoding::negotiate)
    }

    /// Body decoded as text with surrounding whitespace removed.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_string()
    }
}
