//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! chunked bodies, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: per-socket state machine driving one request/response cycle
//! - **`parser`**: parses a request out of the bytes read from the socket
//! - **`request`**: request representation and header helpers
//! - **`encoding`**: Accept-Encoding negotiation
//! - **`compression`**: gzip body compression
//! - **`router`**: dispatch on the fixed path prefixes
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │   AwaitingData   │ ← Wait for the request bytes
//!        └──────┬───────────┘
//!               │ Data received (EOF → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Processing    │ ← Parse, dispatch, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← Write head, then body
//!        └──────┬───────────┘
//!               │ Response sent, write side shut down
//!               ▼
//!        ┌──────────────────┐
//!        │      Closed      │
//!        └──────────────────┘
//! ```

pub mod compression;
pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
