use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::files::store::FileStore;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Serves and stores files under a single root directory.
pub struct FileResponder<S> {
    root: PathBuf,
    store: Arc<S>,
}

impl<S: FileStore> FileResponder<S> {
    pub fn new(root: impl Into<PathBuf>, store: Arc<S>) -> Self {
        Self {
            root: root.into(),
            store,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `/files/<name>` to `<root>/<name>`.
    ///
    /// Only the segment right after `/files/` is used, so `/files/a/b`
    /// resolves to `<root>/a`. Empty names, `.` and `..` resolve to nothing.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let name = request_path.split('/').nth(2)?;

        if name.is_empty() || name == "." || name == ".." {
            return None;
        }

        Some(self.root.join(name))
    }

    /// 200 with the file contents, or 404 if the path is not a readable
    /// regular file.
    pub async fn read(&self, path: &Path) -> Response {
        match self.store.stat(path).await {
            Ok(meta) if meta.is_file => {}
            Ok(_) => {
                debug!(path = %path.display(), "Not a regular file");
                return Response::not_found();
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "File not found");
                return Response::not_found();
            }
        }

        match self.store.read(path).await {
            Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "application/octet-stream")
                .body(contents)
                .build(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                Response::not_found()
            }
        }
    }

    /// Writes `contents` to `path`, creating parent directories first.
    /// Store failures are reported as 404.
    pub async fn write(&self, path: &Path, contents: &[u8]) -> Response {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = self.store.create_dir_all(parent).await {
                warn!(path = %parent.display(), error = %e, "Failed to create directory");
                return Response::not_found();
            }
        }

        if let Err(e) = self.store.write(path, contents).await {
            warn!(path = %path.display(), error = %e, "Failed to write file");
            return Response::not_found();
        }

        debug!(path = %path.display(), bytes = contents.len(), "File written");
        Response::empty(StatusCode::Created)
    }
}
