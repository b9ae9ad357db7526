use minicat::app::router::Route;
use minicat::http::request::{Method, Request, RequestBuilder};

fn req(method: Method, target: &str) -> Request {
    RequestBuilder::new()
        .method(method)
        .target(target)
        .build()
        .unwrap()
}

fn route(method: Method, target: &str) -> Route {
    Route::resolve(&req(method, target), false)
}

#[test]
fn test_root_is_greeting_not_index() {
    assert_eq!(route(Method::GET, "/"), Route::Hello);
}

#[test]
fn test_static_pages() {
    assert_eq!(route(Method::GET, "/index.html"), Route::Page("/index.html"));
    assert_eq!(route(Method::GET, "/401"), Route::Page("/401.html"));
    assert_eq!(route(Method::GET, "/401.html"), Route::Page("/401.html"));
    assert_eq!(route(Method::GET, "/register"), Route::Page("/register.html"));
    assert_eq!(route(Method::GET, "/login"), Route::Page("/login.html"));
    assert_eq!(route(Method::GET, "/login.html"), Route::Page("/login.html"));
}

#[test]
fn test_assets() {
    assert_eq!(route(Method::GET, "/css/styles.css"), Route::Asset);
    assert_eq!(route(Method::GET, "/js/scripts.js"), Route::Asset);
    assert_eq!(route(Method::GET, "/assets/chart.js?v=2"), Route::Asset);
}

#[test]
fn test_form_posts() {
    assert_eq!(route(Method::POST, "/register"), Route::Register);
    assert_eq!(route(Method::POST, "/login"), Route::Login);
}

#[test]
fn test_login_with_query_is_not_the_login_page() {
    assert_eq!(route(Method::GET, "/login?account=gugu"), Route::NotFound);
}

#[test]
fn test_authenticated_login_redirects() {
    let login = req(Method::GET, "/login");
    assert_eq!(Route::resolve(&login, true), Route::AlreadyAuthenticated);

    let login_html = req(Method::GET, "/login.html");
    assert_eq!(Route::resolve(&login_html, true), Route::AlreadyAuthenticated);

    let with_query = req(Method::GET, "/login?next=/");
    assert_eq!(Route::resolve(&with_query, true), Route::NotFound);

    // only GET /login short-circuits
    let post = req(Method::POST, "/login");
    assert_eq!(Route::resolve(&post, true), Route::Login);
    let index = req(Method::GET, "/index.html");
    assert_eq!(Route::resolve(&index, true), Route::Page("/index.html"));
}

#[test]
fn test_unmatched_routes() {
    assert_eq!(route(Method::GET, "/nowhere"), Route::NotFound);
    assert_eq!(route(Method::GET, "/favicon.ico"), Route::NotFound);
    assert_eq!(route(Method::POST, "/"), Route::NotFound);
    assert_eq!(route(Method::POST, "/index.html"), Route::NotFound);
    assert_eq!(route(Method::POST, "/css/styles.css"), Route::NotFound);
}
