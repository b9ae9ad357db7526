use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::app::resources::{ResourceError, StaticResources};
use crate::app::router::{INDEX_PATH, Route, UNAUTHORIZED_PATH};
use crate::app::users::{User, UserStore};
use crate::http::cookie::session_cookie;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::session::{Session, SessionStore};

const HELLO_BODY: &str = "Hello world!";

/// Turns a parsed request into exactly one response.
///
/// All collaborators are shared handles, so a `Processor` is cloned into
/// every connection task.
#[derive(Clone)]
pub struct Processor {
    sessions: SessionStore,
    resources: Arc<dyn StaticResources>,
    users: Arc<dyn UserStore>,
}

impl Processor {
    pub fn new(
        sessions: SessionStore,
        resources: Arc<dyn StaticResources>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            sessions,
            resources,
            users,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn handle(&self, req: &Request) -> Response {
        let route = Route::resolve(req, self.has_live_session(req));
        debug!(route = ?route, path = %req.path, "Route resolved");

        let response = match route {
            Route::Hello => Response::ok(mime::TEXT_HTML, HELLO_BODY),
            Route::Page(page) => self.serve_static(page),
            Route::Asset => self.serve_static(&req.path),
            Route::AlreadyAuthenticated => Response::redirect(INDEX_PATH),
            Route::Register => self.register(req),
            Route::Login => self.login(req),
            Route::NotFound => Response::not_found(),
        };

        response.with_version(req.version.as_str())
    }

    fn has_live_session(&self, req: &Request) -> bool {
        req.cookies()
            .session_id()
            .is_some_and(|id| self.sessions.find(id).is_some())
    }

    fn serve_static(&self, path: &str) -> Response {
        match self.resources.load(path) {
            Ok(body) => Response::ok(mime::content_type_for(path), body),
            Err(ResourceError::NotFound(_)) => Response::not_found(),
            Err(e) => {
                error!(error = %e, "Failed to load static resource");
                Response::internal_error()
            }
        }
    }

    fn register(&self, req: &Request) -> Response {
        let (Some(account), Some(password), Some(email)) = (
            req.form_value("account"),
            req.form_value("password"),
            req.form_value("email"),
        ) else {
            return Response::error(StatusCode::BadRequest);
        };

        if account.is_empty() || password.is_empty() {
            return Response::error(StatusCode::BadRequest);
        }
        let user = User::new(account, password, email);
        if !self.users.insert_new(user.clone()) {
            warn!(account, "Registration rejected: account exists");
            return Response::error(StatusCode::Conflict);
        }
        info!(account, "User registered");

        let session_id = self.open_session(user);
        Response::redirect_with_cookie(INDEX_PATH, &session_cookie(&session_id))
    }

    fn login(&self, req: &Request) -> Response {
        let account = req.form_value("account").unwrap_or_default();
        let password = req.form_value("password").unwrap_or_default();

        match self.users.find_by_account(account) {
            Some(user) if user.check_password(password) => {
                info!(account, "Login succeeded");
                let session_id = self.open_session(user);
                Response::redirect_with_cookie(INDEX_PATH, &session_cookie(&session_id))
            }
            Some(_) => {
                info!(account, "Login rejected: password mismatch");
                Response::redirect(UNAUTHORIZED_PATH)
            }
            None => {
                info!(account, "Login rejected: unknown account");
                Response::redirect(UNAUTHORIZED_PATH)
            }
        }
    }

    fn open_session(&self, user: User) -> String {
        let mut session = Session::new();
        session.set_attribute(user.account.clone(), user);
        let id = session.id().to_string();
        self.sessions.add(session);

        debug!(session = %id, "Session created");
        id
    }
}
