use std::collections::HashMap;

use crate::http::cookie::Cookies;
use crate::http::headers::Headers;

/// HTTP request methods understood by the processor.
///
/// Anything else is rejected by the parser with 405 Method Not Allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Submit a form
    POST,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Example
    ///
    /// ```
    /// # use minicat::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// A parsed HTTP request.
///
/// `path` never contains the query string; `query` is `Some` only when the
/// request target carried a `?`. `form` holds the percent-decoded
/// `application/x-www-form-urlencoded` pairs of `body`.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    /// Protocol version as sent, e.g. "HTTP/1.1"
    pub version: String,
    pub headers: Headers,
    pub body: Vec<u8>,
    pub form: HashMap<String, String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Request target as it appears on the request line, query included.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        let (path, query) = split_target(&target);

        Ok(Request {
            method,
            path,
            query,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            form: parse_form(&self.body),
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a request target into its path and optional query string.
pub(crate) fn split_target(target: &str) -> (String, Option<String>) {
    match target.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (target.to_string(), None),
    }
}

/// Decodes an `application/x-www-form-urlencoded` body. Duplicate keys: last wins.
pub(crate) fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form.get(key).map(|v| v.as_str())
    }

    /// Cookies carried by the `Cookie` header; empty when absent.
    pub fn cookies(&self) -> Cookies {
        self.header("Cookie").map(Cookies::parse).unwrap_or_default()
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }

    pub fn is_post(&self) -> bool {
        self.method == Method::POST
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    pub fn is_index(&self) -> bool {
        self.path == "/" || self.path == "/index.html"
    }

    pub fn is_path(&self, path: &str) -> bool {
        self.path == path
    }

    /// True when the path ends with `.{ext}`.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.path
            .rsplit_once('.')
            .is_some_and(|(stem, e)| !stem.is_empty() && e == ext)
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }
}
