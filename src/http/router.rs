use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::files::{FileResponder, FileStore};
use crate::http::compression;
use crate::http::encoding::Encoding;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Bytes stripped from the front of the path on `/echo` requests.
const ECHO_OFFSET: usize = "/echo/".len();

/// Dispatches a request to one of the fixed routes.
///
/// Prefixes are checked in order: `/` (exact), `/echo`, `/user-agent`,
/// `/files`. Everything else is a 404.
pub struct Router<S> {
    files: Option<FileResponder<S>>,
}

impl<S: FileStore> Router<S> {
    pub fn new(files: Option<FileResponder<S>>) -> Self {
        Self { files }
    }

    pub fn from_config(cfg: &Config, store: Arc<S>) -> Self {
        let files = cfg
            .directory
            .as_ref()
            .map(|dir| FileResponder::new(dir.clone(), store));
        Self::new(files)
    }

    pub async fn respond(&self, req: &Request) -> Response {
        let encoding = req.accepted_encoding();
        let path = req.path.as_str();

        if path == "/" {
            ResponseBuilder::new(StatusCode::Ok)
                .encoding(encoding)
                .build()
        } else if path.starts_with("/echo") {
            echo(path, encoding)
        } else if path.starts_with("/user-agent") {
            ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "text/plain")
                .encoding(encoding)
                .body(req.user_agent().as_bytes().to_vec())
                .build()
        } else if path.starts_with("/files") {
            self.files(req).await
        } else {
            Response::not_found()
        }
    }

    async fn files(&self, req: &Request) -> Response {
        if !matches!(req.method, Method::GET | Method::POST) {
            return Response::empty(StatusCode::MethodNotAllowed);
        }

        let Some(files) = &self.files else {
            debug!(path = %req.path, "No directory configured");
            return Response::not_found();
        };

        let Some(path) = files.resolve(&req.path) else {
            return Response::not_found();
        };

        match req.method {
            Method::POST => files.write(&path, req.body_text().as_bytes()).await,
            _ => files.read(&path).await,
        }
    }
}

/// Echoes the path tail, starting at the first char boundary at or after
/// `ECHO_OFFSET`. Only gzip is actually applied; any other negotiated
/// scheme is named in `Content-Encoding` over an uncompressed body.
fn echo(path: &str, encoding: Option<Encoding>) -> Response {
    let start = (ECHO_OFFSET..=path.len())
        .find(|&i| path.is_char_boundary(i))
        .unwrap_or(path.len());
    let text = &path[start..];
    let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");

    match encoding {
        Some(Encoding::Gzip) => match compression::gzip(text.as_bytes()) {
            Ok(zipped) => builder.encoding(encoding).body(zipped).build(),
            Err(e) => {
                warn!(error = %e, "gzip failed, sending body uncompressed");
                builder.body(text.as_bytes().to_vec()).build()
            }
        },
        other => builder.encoding(other).body(text.as_bytes().to_vec()).build(),
    }
}
