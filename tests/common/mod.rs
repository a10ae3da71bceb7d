#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use harbor::files::{FileMeta, FileResponder, FileStore};
use harbor::http::connection::Connection;
use harbor::http::router::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const ROOT: &str = "/srv/files";

/// In-memory `FileStore` that records every call.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<HashSet<PathBuf>>,
    broken_reads: bool,
    broken_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stat succeeds, read fails.
    pub fn with_broken_reads() -> Self {
        Self {
            broken_reads: true,
            ..Self::default()
        }
    }

    pub fn with_broken_writes() -> Self {
        Self {
            broken_writes: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        self.files.lock().unwrap().insert(path.into(), contents.to_vec());
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().insert(path.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl FileStore for MemoryStore {
    async fn stat(&self, path: &Path) -> io::Result<FileMeta> {
        if let Some(contents) = self.files.lock().unwrap().get(path) {
            return Ok(FileMeta {
                len: contents.len() as u64,
                is_file: true,
            });
        }

        if self.dirs.lock().unwrap().contains(path) {
            return Ok(FileMeta {
                len: 0,
                is_file: false,
            });
        }

        Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.broken_reads {
            return Err(io::Error::other("read failed"));
        }

        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.broken_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }

        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}

pub fn router(store: &Arc<MemoryStore>) -> Arc<Router<MemoryStore>> {
    Arc::new(Router::new(Some(FileResponder::new(ROOT, Arc::clone(store)))))
}

/// Sends `raw` through a full connection cycle and returns everything the
/// server wrote before closing.
pub async fn exchange<S: FileStore>(router: Arc<Router<S>>, raw: &[u8]) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let mut conn = Connection::new(server, router);

    let client_side = async {
        client.write_all(raw).await.unwrap();
        let mut out = Vec::new();
        client.read_to_end(&mut out).await.unwrap();
        out
    };

    let (res, out) = tokio::join!(conn.run(), client_side);
    res.unwrap();
    out
}

/// Splits a raw response into its head (without the blank line) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    (
        String::from_utf8(raw[..end].to_vec()).unwrap(),
        raw[end + 4..].to_vec(),
    )
}
