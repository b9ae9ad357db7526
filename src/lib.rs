//! Minicat - minimal HTTP/1.1 server with cookie sessions
//!
//! Parses one request per connection, routes it to a static page or a
//! login/registration handler, and tracks logins in a server-side session
//! store keyed by the `JSESSIONID` cookie.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
pub mod session;
