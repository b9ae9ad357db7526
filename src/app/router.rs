use crate::http::request::{Method, Request};

/// Error page that failed logins are sent to.
pub const UNAUTHORIZED_PATH: &str = "/401";

/// Landing page after a successful login or registration.
pub const INDEX_PATH: &str = "/index.html";

/// The single handler chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`: fixed greeting
    Hello,
    /// A fixed HTML page from the static bundle
    Page(&'static str),
    /// A stylesheet or script, resolved from the request path
    Asset,
    /// `GET /login` from a client that already holds a live session
    AlreadyAuthenticated,
    Register,
    Login,
    NotFound,
}

impl Route {
    /// Picks exactly one route. Arms are tried in order and the first match wins.
    pub fn resolve(req: &Request, authenticated: bool) -> Route {
        let path = req.path.as_str();

        match req.method {
            Method::GET => match path {
                "/login" | "/login.html" if authenticated && !req.has_query() => {
                    Route::AlreadyAuthenticated
                }
                "/" => Route::Hello,
                "/index.html" => Route::Page("/index.html"),
                "/401" | "/401.html" => Route::Page("/401.html"),
                "/register" | "/register.html" => Route::Page("/register.html"),
                "/login" | "/login.html" if !req.has_query() => Route::Page("/login.html"),
                _ if req.has_extension("css") || req.has_extension("js") => Route::Asset,
                _ => Route::NotFound,
            },
            Method::POST => match path {
                "/register" => Route::Register,
                "/login" => Route::Login,
                _ => Route::NotFound,
            },
        }
    }
}
