use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, info, warn};

use crate::app::Processor;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Drives a single client connection: one request in, at most one response out.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    processor: Processor,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, processor: Processor) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            processor,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Err(ReadError::Parse(e)) => match e.status() {
                        Some(status) => {
                            warn!(error = %e, status = status.as_u16(), "Rejecting malformed request");
                            let writer = ResponseWriter::new(&Response::error(status));
                            self.state = ConnectionState::Writing(writer);
                        }
                        None => {
                            debug!(error = %e, "Connection closed before a complete request");
                            self.state = ConnectionState::Closed;
                        }
                    },
                    Err(ReadError::Io(e)) => return Err(e.into()),
                },

                ConnectionState::Processing(req) => {
                    let response = self.processor.handle(req);
                    info!(
                        method = req.method.as_str(),
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> Result<Request, ReadError> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(request);
                }
                Err(ParseError::Incomplete) => {}
                Err(e) => return Err(ReadError::Parse(e)),
            }

            let n = self
                .stream
                .read_buf(&mut self.buffer)
                .await
                .map_err(ReadError::Io)?;

            if n == 0 {
                return Err(ReadError::Parse(ParseError::UnexpectedEof));
            }
        }
    }
}
