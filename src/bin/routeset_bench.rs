//! CLI timing harness for the two matching strategies.
//!
//! Builds a synthetic route table, runs the same request line through each
//! strategy for a fixed repetition count, and prints elapsed wall time.
//! Throughput measurement only - correctness is the matchers' contract,
//! covered by the test suite, not checked here.
//!
//! ```bash
//! cargo run --release --bin routeset-bench -- --routes 1024 --iters 1048576
//! ```

use clap::Parser;
use http::Method;
use routeset::{CombinedRouter, LinearRouter, Route, RouteTable};
use std::hint::black_box;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Time the linear-scan and combined-pattern matchers over an identical
/// workload.
#[derive(Parser)]
#[command(name = "routeset-bench")]
#[command(about = "Time both route-matching strategies over an identical workload", long_about = None)]
struct Args {
    /// Number of synthetic routes in the table
    #[arg(long, default_value_t = 256)]
    routes: usize,

    /// Repetitions of the request per strategy
    #[arg(long, default_value_t = 1 << 20)]
    iters: u64,

    /// Request line to match (METHOD PATH). The default matches no
    /// synthetic route, which is the linear scan's worst case.
    #[arg(long, default_value = "POST /foo/bar/gah/12345")]
    request: String,
}

/// A synthetic table shaped like a REST API: literal collection routes,
/// parameterized item routes, and digit-constrained sub-resources.
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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let table = synthetic_table(args.routes);

    let compile_start = Instant::now();
    let linear = LinearRouter::compile(&table)?;
    let linear_compile = compile_start.elapsed();

    let compile_start = Instant::now();
    let combined = CombinedRouter::compile(&table)?;
    let combined_compile = compile_start.elapsed();

    println!(
        "table: {} routes | request: {:?} | {} iters per strategy",
        args.routes, args.request, args.iters
    );
    println!(
        "compile: linear {}us, combined {}us",
        linear_compile.as_micros(),
        combined_compile.as_micros()
    );

    let start = Instant::now();
    for _ in 0..args.iters {
        black_box(linear.match_request(black_box(&args.request)));
    }
    println!("linear:   {}ms", start.elapsed().as_millis());

    let start = Instant::now();
    for _ in 0..args.iters {
        black_box(combined.match_request(black_box(&args.request)));
    }
    println!("combined: {}ms", start.elapsed().as_millis());

    Ok(())
}
