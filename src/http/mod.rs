//! HTTP/1.1 protocol layer.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine (read, process, write, close)
//! - **`parser`**: parses a request from a byte buffer, body bounded by `Content-Length`
//! - **`request`**: request representation and request-line predicates
//! - **`headers`**: ordered, case-insensitive header collection
//! - **`cookie`**: `Cookie` header parsing and the session cookie name
//! - **`response`**: status codes and response builder
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received (malformed → error response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and generate response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! There is no keep-alive: every connection carries exactly one request.

pub mod connection;
pub mod cookie;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
