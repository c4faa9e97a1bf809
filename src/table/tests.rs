use super::{openapi_path, pattern_to_regex, RouteSet};
use http::Method;

#[test]
fn test_root_pattern() {
    let (re, params) = pattern_to_regex("/").unwrap();
    assert!(re.is_match("/"));
    assert!(params.is_empty());
}

#[test]
fn test_constrained_param() {
    let (re, params) = pattern_to_regex(r"/posts/:id(\d+)").unwrap();
    assert!(re.is_match("/posts/42"));
    assert!(!re.is_match("/posts/abc"));
    assert!(!re.is_match("/posts/42/edit"));
    assert_eq!(params, vec!["id"]);
}

#[test]
fn test_nested_params() {
    let (re, params) = pattern_to_regex(r"/posts/:post_id(\d+)/comments/:id(\d+)/edit").unwrap();
    let caps = re.captures("/posts/7/comments/9/edit").unwrap();
    assert_eq!(&caps[1], "7");
    assert_eq!(&caps[2], "9");
    assert_eq!(params, vec!["post_id", "id"]);
}

#[test]
fn test_unconstrained_param_and_escaping() {
    let (re, params) = pattern_to_regex("/files/:name/v1.0").unwrap();
    assert!(re.is_match("/files/report/v1.0"));
    assert!(!re.is_match("/files/report/v1x0"));
    assert_eq!(params, vec!["name"]);
}

#[test]
fn test_invalid_constraint() {
    assert!(pattern_to_regex("/posts/:id([0-9)").is_err());
}

#[test]
fn test_openapi_path() {
    assert_eq!(openapi_path(r"/posts/:id(\d+)/edit"), "/posts/{id}/edit");
    assert_eq!(
        openapi_path(r"/posts/:post_id(\d+)/comments"),
        "/posts/{post_id}/comments"
    );
    assert_eq!(openapi_path("/health"), "/health");
}

#[test]
fn test_find_returns_last_registration() {
    let routes = RouteSet::draw(|r| {
        r.get("/dup", "first#show")?;
        r.get("/dup", "second#show")
    })
    .unwrap();

    let entry = routes.find(&Method::GET, "/dup").unwrap();
    assert_eq!(entry.controller(), "second");
    assert!(routes.find(&Method::POST, "/dup").is_none());
    assert_eq!(routes.path_patterns(), vec!["/dup", "/dup"]);
}

#[test]
fn test_entry_pattern_helpers() {
    let routes = RouteSet::draw(|r| r.resources("posts", |_| Ok(()))).unwrap();
    let edit = routes.find(&Method::GET, r"/posts/:id(\d+)/edit").unwrap();
    assert_eq!(edit.openapi_path(), "/posts/{id}/edit");
    let (re, _) = edit.pattern_regex().unwrap();
    assert!(re.is_match("/posts/3/edit"));
}
