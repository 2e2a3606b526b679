//! # routeset
//!
//! **routeset** is a fast HTTP request-route matcher: given a fixed table of
//! (method, path-pattern) routes, it resolves an incoming request to the
//! single matching route and extracts its path parameters.
//!
//! ## Overview
//!
//! Route matching is the dominant cost path of an HTTP front end once the
//! route table grows, so routeset ships two interchangeable strategies and
//! makes the choice a configuration knob:
//!
//! - **Linear scan** ([`LinearRouter`]) - one compiled regex per route,
//!   tried in declaration order. Simple, and fastest for small tables.
//! - **Combined pattern** ([`CombinedRouter`]) - the whole table folded
//!   into one alternation regex run once per request, with a capture-group
//!   offset table to recover which route fired. Asymptotically cheaper in
//!   table size, which pays off for large tables and for requests that
//!   match late or not at all.
//!
//! Both return identical results on any well-formed table; the [`Router`]
//! facade selects between them via [`MatchPolicy`].
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - **[`route`]** - route declarations and the ordered route table
//! - **[`router`]** - pattern compilation and both matching strategies
//! - **[`load`]** - YAML route-table loading for config-driven embedders
//! - **[`runtime_config`]** - environment-variable policy selection
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routeset::{Route, RouteTable, Router};
//!
//! # fn main() -> Result<(), routeset::RouteCompileError> {
//! let table = RouteTable::new(vec![
//!     Route::new(Method::GET, "/"),
//!     Route::new(Method::GET, "/contact"),
//!     Route::new(Method::POST, "/api/widgets/{widget_id}/parts/{part:[0-9]+}/update"),
//!     Route::new(Method::GET, "/([^/]+)"),
//! ]);
//! let router = Router::new(&table)?;
//!
//! let m = router.route(&Method::POST, "/api/widgets/abc/parts/42/update").unwrap();
//! assert_eq!(m.get_param("widget_id"), Some("abc"));
//! assert_eq!(m.get_param("part"), Some("42"));
//!
//! assert!(router.route(&Method::DELETE, "/widgets").is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern syntax
//!
//! Patterns are regular-expression path templates. Capturing groups stand
//! in for path parameters, either written raw (`/([^/]+)`) or through the
//! placeholder shorthand (`/{id}`, `/{part:[0-9]+}`) that expands to a
//! group and names the parameter. Compilation is fail-fast: one malformed
//! pattern rejects the whole table at startup, and no partial table is
//! ever served.
//!
//! ## Concurrency
//!
//! Compilation runs once at table initialization. Compiled matchers are
//! immutable afterwards and safe to share across any number of concurrent
//! matching calls without locking. Matching itself is pure and
//! non-blocking, with parameter storage stack-allocated up to
//! [`MAX_INLINE_PARAMS`].
//!
//! ## Benchmarks
//!
//! `benches/matcher_throughput.rs` compares both strategies across table
//! sizes with Criterion, and the `routeset-bench` binary times a fixed
//! request over a synthetic table for quick comparisons:
//!
//! ```bash
//! cargo bench
//! cargo run --release --bin routeset-bench -- --routes 1024 --iters 1048576
//! ```

pub mod load;
pub mod route;
pub mod router;
pub mod runtime_config;

pub use load::{load_routes, routes_from_yaml};
pub use route::{Route, RouteTable};
pub use router::{
    CombinedRouter, CompiledRoute, LinearRouter, MatchPolicy, ParamVec, RouteCompileError,
    RouteMatch, Router, Strategy, DEFAULT_COMBINED_THRESHOLD, MAX_INLINE_PARAMS,
};
pub use runtime_config::RuntimeConfig;
