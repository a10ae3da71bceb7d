use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::files::FileStore;
use crate::http::parser::{ParseError, find_headers_end, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::writer::ResponseWriter;

type Parsed = Result<Request, ParseError>;

const READ_CHUNK: usize = 4096;

/// How long to wait for the rest of a request that arrived in pieces before
/// answering from what is already buffered.
const CONTINUATION_GRACE: Duration = Duration::from_millis(200);

pub struct Connection<T, S> {
    stream: T,
    router: Arc<Router<S>>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingData,
    Processing(Parsed),
    Responding(ResponseWriter),
    Closed,
}

impl<T, S> Connection<T, S>
where
    T: AsyncRead + AsyncWrite + Unpin,
    S: FileStore,
{
    pub fn new(stream: T, router: Arc<Router<S>>) -> Self {
        Self {
            stream,
            router,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::AwaitingData,
        }
    }

    /// Drives one request/response cycle and closes the write side.
    ///
    /// An I/O error at any point leaves the connection `Closed`.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::AwaitingData => match self.read_request().await? {
                    Some(parsed) => ConnectionState::Processing(parsed),
                    None => ConnectionState::Closed,
                },

                ConnectionState::Processing(parsed) => {
                    let response = self.process(parsed).await;
                    ConnectionState::Responding(ResponseWriter::new(response))
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    debug!(bytes = writer.len(), "Response sent");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Waits for the first bytes, then keeps reading while the header block
    /// is unterminated or shorter than its declared Content-Length. Each
    /// further read waits at most `CONTINUATION_GRACE`; after that the
    /// request is parsed from what arrived.
    async fn read_request(&mut self) -> anyhow::Result<Option<Parsed>> {
        let n = self.stream.read_buf(&mut self.buffer).await?;

        if n == 0 {
            // Client closed connection
            return Ok(None);
        }

        while !request_complete(&self.buffer) {
            self.buffer.reserve(READ_CHUNK);

            match timeout(CONTINUATION_GRACE, self.stream.read_buf(&mut self.buffer)).await {
                Ok(read) => {
                    if read? == 0 {
                        break;
                    }
                }
                Err(_) => {
                    debug!(
                        buffered = self.buffer.len(),
                        "Request incomplete, answering from what arrived"
                    );
                    break;
                }
            }
        }

        Ok(Some(parse_http_request(&self.buffer)))
    }

    async fn process(&self, parsed: Parsed) -> Response {
        match parsed {
            Ok(req) => {
                let response = self.router.respond(&req).await;
                info!(
                    method = req.method.as_str(),
                    path = %req.path,
                    status = response.status.as_u16(),
                    "Request handled"
                );
                response
            }
            Err(e) => {
                debug!(error = %e, "Unparseable request");
                Response::not_found()
            }
        }
    }
}

fn request_complete(buf: &[u8]) -> bool {
    if find_headers_end(buf).is_none() {
        return false;
    }

    match parse_http_request(buf) {
        Ok(req) => req
            .content_length()
            .is_none_or(|len| req.body.len() >= len),
        Err(_) => true,
    }
}
