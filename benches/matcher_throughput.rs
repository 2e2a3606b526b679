use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use http::Method;
use routeset::{CombinedRouter, LinearRouter, Route, RouteTable};
use std::hint::black_box;

/// The widget route table: a small, realistic mix of literal routes,
/// raw capture groups, and constrained segments.
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

fn synthetic_table(n: usize) -> RouteTable {
    let mut routes = Vec::with_capacity(n);
    for i in 0..n {
        let route = match i % 4 {
            0 => Route::new(Method::GET, format!("/api/v1/resource{}", i)),
            1 => Route::new(Method::GET, format!("/api/v1/resource{}/{{id}}", i)),
            2 => Route::new(
                Method::POST,
                format!("/api/v1/resource{}/{{id}}/parts/{{part:[0-9]+}}", i),
            ),
            _ => Route::new(Method::DELETE, format!("/api/v1/resource{}/([^/]+)", i)),
        };
        routes.push(route);
    }
    RouteTable::new(routes)
}

fn bench_widget_table(c: &mut Criterion) {
    let table = widget_table();
    let linear = LinearRouter::compile(&table).expect("widget table compiles");
    let combined = CombinedRouter::compile(&table).expect("widget table compiles");

    let requests = [
        "GET /",
        "GET /widgets",
        "POST /api/widgets/abc/parts/42/update",
        "POST /foo/bar/gah/12345",
    ];

    let mut group = c.benchmark_group("widget_table");
    group.bench_function("linear", |b| {
        b.iter(|| {
            for request in requests.iter() {
                black_box(linear.match_request(request));
            }
        })
    });
    group.bench_function("combined", |b| {
        b.iter(|| {
            for request in requests.iter() {
                black_box(combined.match_request(request));
            }
        })
    });
    group.finish();
}

/// The case the combined pattern exists for: no route matches, so the
/// linear scan runs every pattern before giving up.
fn bench_no_match_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("no_match");
    for size in [64usize, 256, 1024] {
        let table = synthetic_table(size);
        let linear = LinearRouter::compile(&table).expect("synthetic table compiles");
        let combined = CombinedRouter::compile(&table).expect("synthetic table compiles");

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| black_box(linear.match_request("POST /foo/bar/gah/12345")))
        });
        group.bench_with_input(BenchmarkId::new("combined", size), &size, |b, _| {
            b.iter(|| black_box(combined.match_request("POST /foo/bar/gah/12345")))
        });
    }
    group.finish();
}

/// Matching the last route in the table - the linear scan's other worst
/// case; the combined pattern still decides in one pass.
fn bench_match_late_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_late");
    for size in [64usize, 256, 1024] {
        let table = synthetic_table(size);
        let linear = LinearRouter::compile(&table).expect("synthetic table compiles");
        let combined = CombinedRouter::compile(&table).expect("synthetic table compiles");

        // i % 4 == 3 is the last declared shape; aim at the final route.
        let last = size - 1;
        let request = match last % 4 {
            0 => format!("GET /api/v1/resource{}", last),
            1 => format!("GET /api/v1/resource{}/abc", last),
            2 => format!("POST /api/v1/resource{}/abc/parts/42", last),
            _ => format!("DELETE /api/v1/resource{}/abc", last),
        };
        assert!(linear.match_request(&request).is_some());

        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, _| {
            b.iter(|| black_box(linear.match_request(&request)))
        });
        group.bench_with_input(BenchmarkId::new("combined", size), &size, |b, _| {
            b.iter(|| black_box(combined.match_request(&request)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_widget_table,
    bench_no_match_scaling,
    bench_match_late_scaling
);
criterion_main!(benches);
