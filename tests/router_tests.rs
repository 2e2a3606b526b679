use http::Method;
use routeset::{MatchPolicy, Route, RouteMatch, RouteTable, Router};

/// The small table from the matcher's reference scenarios.
fn site_table() -> RouteTable {
    RouteTable::new(vec![
        Route::new(Method::GET, "/"),
        Route::new(Method::GET, "/contact"),
        Route::new(Method::GET, "/([^/]+)"),
        Route::new(Method::GET, "/([^/]+)/admin"),
    ])
}

/// The full widget API table: literal routes, raw capture groups, and a
/// digit-constrained segment.
fn widget_table() -> RouteTable {
    RouteTable::new(vec![
        Route::new(Method::GET, "/"),
        Route::new(Method::GET, "/contact"),
        Route::new(Method::GET, "/api/widgets"),
        Route::new(Method::POST, "/api/widgets"),
        Route::new(Method::POST, "/api/widgets/([^/]+)"),
        Route::new(Method::POST, "/api/widgets/([^/]+)/parts"),
        Route::new(Method::POST, "/api/widgets/([^/]+)/parts/([0-9]+)/update"),
        Route::new(Method::POST, "/api/widgets/([^/]+)/parts/([0-9]+)/delete"),
        Route::new(Method::GET, "/([^/]+)"),
        Route::new(Method::GET, "/([^/]+)/admin"),
        Route::new(Method::POST, "/([^/]+)/image"),
    ])
}

fn both_routers(table: &RouteTable) -> Vec<(&'static str, Router)> {
    vec![
        (
            "linear",
            Router::with_policy(table, MatchPolicy::Linear).expect("table compiles"),
        ),
        (
            "combined",
            Router::with_policy(table, MatchPolicy::Combined).expect("table compiles"),
        ),
    ]
}

fn assert_route_match(
    strategy: &str,
    router: &Router,
    request: &str,
    expected_index: Option<usize>,
    expected_params: &[&str],
) {
    let result = router.match_request(request);
    match result {
        Some(RouteMatch {
            route_index,
            ref params,
            ..
        }) => {
            println!("✅ [{}] {} → route {}", strategy, request, route_index);
            assert_eq!(
                Some(route_index),
                expected_index,
                "[{}] route mismatch for {:?}",
                strategy,
                request
            );
            let values: Vec<&str> = params.iter().map(|(_, v)| v.as_str()).collect();
            assert_eq!(
                values, expected_params,
                "[{}] param mismatch for {:?}",
                strategy, request
            );
        }
        None => {
            println!("❌ [{}] {} → no match", strategy, request);
            assert_eq!(
                expected_index, None,
                "[{}] expected a match for {:?}",
                strategy, request
            );
        }
    }
}

#[test]
fn test_dynamic_segment() {
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "GET /widgets", Some(2), &["widgets"]);
    }
}

#[test]
fn test_dynamic_segment_with_suffix() {
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(
            strategy,
            router,
            "GET /widgets/admin",
            Some(3),
            &["widgets"],
        );
    }
}

#[test]
fn test_root_route() {
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "GET /", Some(0), &[]);
    }
}

#[test]
fn test_undeclared_method_is_no_match() {
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "DELETE /widgets", None, &[]);
    }
}

#[test]
fn test_literal_route_beats_dynamic() {
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "GET /contact", Some(1), &[]);
    }
}

#[test]
fn test_multi_param_extraction() {
    let table = widget_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(
            strategy,
            router,
            "POST /api/widgets/abc/parts/42/update",
            Some(6),
            &["abc", "42"],
        );
    }
}

#[test]
fn test_digit_constraint_rejects_non_digits() {
    let table = widget_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(
            strategy,
            router,
            "POST /api/widgets/abc/parts/xy/update",
            None,
            &[],
        );
    }
}

#[test]
fn test_collection_routes_by_method() {
    let table = widget_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "GET /api/widgets", Some(2), &[]);
        assert_route_match(strategy, router, "POST /api/widgets", Some(3), &[]);
    }
}

#[test]
fn test_no_match_on_unknown_path_shape() {
    let table = widget_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "POST /foo/bar/gah/12345", None, &[]);
    }
}

#[test]
fn test_placeholder_table_names_params() {
    let table = RouteTable::new(vec![
        Route::new(Method::GET, "/"),
        Route::new(
            Method::POST,
            "/api/widgets/{widget_id}/parts/{part:[0-9]+}/update",
        ),
    ]);
    for (strategy, router) in &both_routers(&table) {
        let m = router
            .match_request("POST /api/widgets/abc/parts/42/update")
            .unwrap_or_else(|| panic!("[{}] expected a match", strategy));
        assert_eq!(m.route_index, 1);
        assert_eq!(m.get_param("widget_id"), Some("abc"));
        assert_eq!(m.get_param("part"), Some("42"));
        assert_eq!(m.param_values(), ["abc", "42"]);
    }
}

#[test]
fn test_query_strings_are_callers_problem() {
    // The matcher consumes a normalized request line; an un-stripped query
    // string simply fails to match.
    let table = site_table();
    for (strategy, router) in &both_routers(&table) {
        assert_route_match(strategy, router, "GET /contact?from=footer", None, &[]);
    }
}
