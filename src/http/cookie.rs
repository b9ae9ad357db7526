//! `Cookie` request header parsing.
//!
//! Pairs are separated by `;`, each split on its first `=`. Pairs without an
//! `=` or with an empty name are skipped; parsing never fails.

use std::collections::HashMap;

/// Cookie carrying the server-side session id.
pub const SESSION_COOKIE: &str = "JSESSIONID";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    values: HashMap<String, String>,
}

impl Cookies {
    pub fn parse(header: &str) -> Self {
        let values = header
            .split(';')
            .map(str::trim)
            .filter_map(|pair| pair.split_once('='))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_str())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.get(SESSION_COOKIE)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `Set-Cookie` value announcing a freshly created session.
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}", SESSION_COOKIE, session_id)
}
