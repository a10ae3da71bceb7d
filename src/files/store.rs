use std::future::Future;
use std::io;
use std::path::Path;

/// The subset of file metadata the responder looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub len: u64,
    pub is_file: bool,
}

/// Filesystem operations used by the `/files` routes.
///
/// Every operation is an await point; other connections keep being served
/// while one is outstanding.
pub trait FileStore: Send + Sync + 'static {
    fn stat(&self, path: &Path) -> impl Future<Output = io::Result<FileMeta>> + Send;

    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;

    /// Creates or truncates `path` and writes `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> impl Future<Output = io::Result<()>> + Send;

    fn create_dir_all(&self, path: &Path) -> impl Future<Output = io::Result<()>> + Send;
}

/// `FileStore` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    async fn stat(&self, path: &Path) -> io::Result<FileMeta> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(FileMeta {
            len: meta.len(),
            is_file: meta.is_file(),
        })
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}
