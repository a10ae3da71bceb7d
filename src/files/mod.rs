//! File storage behind the `/files` routes.
//!
//! - **`store`**: the `FileStore` seam and its `tokio::fs` implementation
//! - **`responder`**: turns a resolved path into a 200/201/404 response

pub mod responder;
pub mod store;

pub use responder::FileResponder;
pub use store::{DiskStore, FileMeta, FileStore};
