use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::app::users::User;

/// Session state keyed by an opaque random id.
///
/// Attributes map an account name to the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    attributes: HashMap<String, User>,
}

impl Session {
    /// Creates an empty session with a fresh random (v4 UUID) id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, user: User) {
        self.attributes.insert(key.into(), user);
    }

    pub fn attribute(&self, key: &str) -> Option<&User> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &HashMap<String, User> {
        &self.attributes
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Concurrent registry of live sessions.
///
/// Cloning is cheap; clones share the same underlying map, so one store is
/// created at startup and handed to every connection.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new empty session and returns its id.
    pub fn create(&self) -> String {
        let session = Session::new();
        let id = session.id.clone();
        self.add(session);
        id
    }

    /// Registers `session` under its id, replacing any session with that id.
    pub fn add(&self, session: Session) {
        self.inner.insert(session.id.clone(), session);
    }

    pub fn find(&self, id: &str) -> Option<Session> {
        self.inner.get(id).map(|r| r.value().clone())
    }

    pub fn remove(&self, id: &str) -> Option<Session> {
        self.inner.remove(id).map(|(_, session)| session)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
