//! User directory.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub account: String,
    password: String,
    pub email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Directory of registered users, looked up by account name.
pub trait UserStore: Send + Sync {
    /// Stores `user`, replacing any user with the same account.
    fn save(&self, user: User);

    /// Stores `user` only if its account is free. Returns false when taken.
    /// The check and the insert are one atomic step.
    fn insert_new(&self, user: User) -> bool;

    fn find_by_account(&self, account: &str) -> Option<User>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<DashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        for user in users {
            store.save(user);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn save(&self, user: User) {
        self.users.insert(user.account.clone(), user);
    }

    fn insert_new(&self, user: User) -> bool {
        match self.users.entry(user.account.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(user);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users.get(account).map(|r| r.value().clone())
    }
}
