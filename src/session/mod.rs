//! Server-side sessions.
//!
//! A session is created when a user registers or logs in and is carried by
//! the client in the `JSESSIONID` cookie. Sessions live until they are
//! removed from the store; nothing expires them.

pub mod store;

pub use store::{Session, SessionStore};
