use http::Method;
use routeset::{load_routes, routes_from_yaml, Route, Router};

fn example_yaml() -> &'static str {
    r#"
routes:
  - method: GET
    path: /
  - method: GET
    path: /contact
  - method: POST
    path: /api/widgets/{widget_id}/parts/{part:[0-9]+}/update
  - method: GET
    path: /([^/]+)
"#
}

#[test]
fn test_yaml_table_preserves_declaration_order() {
    let table = routes_from_yaml(example_yaml()).expect("yaml parses");
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.routes()[0],
        Route::new(Method::GET, "/".to_string())
    );
    assert_eq!(table.routes()[2].method(), &Method::POST);
    assert_eq!(
        table.routes()[2].pattern(),
        "/api/widgets/{widget_id}/parts/{part:[0-9]+}/update"
    );
}

#[test]
fn test_yaml_table_compiles_and_matches() {
    let table = routes_from_yaml(example_yaml()).expect("yaml parses");
    let router = Router::new(&table).expect("table compiles");

    let m = router
        .match_request("POST /api/widgets/abc/parts/42/update")
        .expect("matches");
    assert_eq!(m.route_index, 2);
    assert_eq!(m.get_param("widget_id"), Some("abc"));
    assert_eq!(m.get_param("part"), Some("42"));
}

#[test]
fn test_lowercase_method_is_normalized() {
    let table = routes_from_yaml(
        r#"
routes:
  - method: get
    path: /
"#,
    )
    .expect("yaml parses");
    assert_eq!(table.routes()[0].method(), &Method::GET);
}

#[test]
fn test_unknown_method_is_rejected() {
    let err = routes_from_yaml(
        r#"
routes:
  - method: "not a method"
    path: /
"#,
    )
    .expect_err("method should be rejected");
    assert!(err.to_string().contains("not a method"), "error was: {err:#}");
}

#[test]
fn test_malformed_yaml_is_rejected() {
    assert!(routes_from_yaml("routes: [method: GET").is_err());
}

#[test]
fn test_bad_pattern_fails_at_compile_not_load() {
    // Loading only declares the table; the malformed pattern surfaces when
    // a matcher is compiled, rejecting the whole table.
    let table = routes_from_yaml(
        r#"
routes:
  - method: GET
    path: /ok
  - method: GET
    path: /bad/[z-a]
"#,
    )
    .expect("loading does not validate patterns");
    assert!(Router::new(&table).is_err());
}

#[test]
fn test_load_routes_from_file() {
    let path = std::env::temp_dir().join("routeset_table_loading_test.yaml");
    std::fs::write(&path, example_yaml()).expect("temp file writes");

    let table = load_routes(&path).expect("file loads");
    assert_eq!(table.len(), 4);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_routes_missing_file() {
    let err = load_routes("/definitely/not/here.yaml").expect_err("missing file");
    assert!(err.to_string().contains("failed to read route table file"));
}
