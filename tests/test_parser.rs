use minicat::http::parser::{ParseError, parse_http_request};
use minicat::http::request::Method;
use minicat::http::response::StatusCode;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_request_without_headers() {
    let req = b"GET /index.html HTTP/1.0\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.0");
    assert!(parsed.headers.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_form_body() {
    let req = b"POST /register HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: 37\r\n\r\naccount=bob&password=pw&email=e@x.com";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/register");
    assert_eq!(parsed.form_value("account"), Some("bob"));
    assert_eq!(parsed.form_value("password"), Some("pw"));
    assert_eq!(parsed.form_value("email"), Some("e@x.com"));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_form_round_trips_percent_encoding() {
    let body = "account=j%C3%BCrgen&password=a%26b%3Dc&email=x%2By%40z.io";
    let req = format!(
        "POST /register HTTP/1.1\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();

    assert_eq!(parsed.form_value("account"), Some("jürgen"));
    assert_eq!(parsed.form_value("password"), Some("a&b=c"));
    assert_eq!(parsed.form_value("email"), Some("x+y@z.io"));
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[test]
fn test_parse_header_value_split_on_first_colon() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:8080\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("localhost:8080"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /login?account=gugu&password=password HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/login");
    assert_eq!(parsed.query.as_deref(), Some("account=gugu&password=password"));
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_get_body_is_not_read() {
    let req = b"GET / HTTP/1.1\r\nContent-Length: 5\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_without_content_length_has_empty_body() {
    let req = b"POST /login HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
    assert!(parsed.form.is_empty());
}

#[test]
fn test_parse_unsupported_http_method() {
    let req = b"PUT / HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_malformed_request_line() {
    for req in [
        &b"GET /\r\n\r\n"[..],
        b"GET  / HTTP/1.1\r\n\r\n",
        b"GET / HTTP/1.1 extra\r\n\r\n",
        b"GET index.html HTTP/1.1\r\n\r\n",
        b"GET / FTP/1.0\r\n\r\n",
    ] {
        let result = parse_http_request(req);
        assert!(matches!(result, Err(ParseError::InvalidRequest)), "{:?}", result);
    }
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: ten\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_body_too_large() {
    let req = b"POST /login HTTP/1.1\r\nContent-Length: 99999999\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::BodyTooLarge)));
}

#[test]
fn test_parse_error_status_mapping() {
    assert_eq!(ParseError::Incomplete.status(), None);
    assert_eq!(ParseError::UnexpectedEof.status(), None);
    assert_eq!(ParseError::InvalidMethod.status(), Some(StatusCode::MethodNotAllowed));
    assert_eq!(ParseError::InvalidHeader.status(), Some(StatusCode::BadRequest));
    assert_eq!(ParseError::BodyTooLarge.status(), Some(StatusCode::PayloadTooLarge));
}
