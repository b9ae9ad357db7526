//! Application layer: route table, handlers and their collaborators.
//!
//! This module decides what each request means. The `http` module only
//! frames bytes; the [`Processor`] picks one [`Route`] per request and
//! consults the session store, user directory and static bundle.

pub mod processor;
pub mod resources;
pub mod router;
pub mod users;

use std::sync::Arc;

use crate::config::Config;
use crate::session::SessionStore;

pub use processor::Processor;
pub use resources::{DirectoryResources, MemoryResources, ResourceError, StaticResources};
pub use router::Route;
pub use users::{InMemoryUserStore, User, UserStore};

impl Processor {
    /// Wires a processor from configuration: files under `static_files.root`,
    /// an in-memory user directory seeded with `users`, and an empty session store.
    pub fn from_config(cfg: &Config) -> Self {
        let resources = DirectoryResources::new(&cfg.static_files.root);
        let users = InMemoryUserStore::with_users(cfg.users.iter().cloned());

        Processor::new(SessionStore::new(), Arc::new(resources), Arc::new(users))
    }
}
