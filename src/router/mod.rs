//! # Router Module
//!
//! Path matching and route resolution. The router compiles a declared
//! [`RouteTable`](crate::route::RouteTable) into immutable matchers and
//! resolves incoming `METHOD PATH` request lines to a route plus its
//! extracted path parameters.
//!
//! ## Overview
//!
//! Two matching strategies are implemented behind the same contract:
//!
//! - [`LinearRouter`] - one compiled regex per route, tried in table
//!   order; first match wins. O(routes) regex runs per request in the
//!   worst case.
//! - [`CombinedRouter`] - every route folded into one alternation regex,
//!   run once per request; a capture-group offset table recovers which
//!   alternative fired. The fast path for large tables, at the price of a
//!   more intricate compile and decode step.
//!
//! On any well-formed table the two return identical results, including
//! agreeing on "no match" - which is what lets the choice between them be
//! a policy knob ([`MatchPolicy`]) on the [`Router`] facade rather than an
//! API difference.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at startup, declared patterns (placeholders and raw
//!    regex groups) are expanded and compiled; any invalid pattern rejects
//!    the whole table with a [`RouteCompileError`].
//!
//! 2. **Matching**: for each incoming request, the selected strategy tests
//!    the request line against compiled state and extracts parameters.
//!    Matching is pure and lock-free over immutable data.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routeset::{MatchPolicy, Route, RouteTable, Router};
//!
//! # fn main() -> Result<(), routeset::RouteCompileError> {
//! let table = RouteTable::new(vec![
//!     Route::new(Method::GET, "/"),
//!     Route::new(Method::GET, "/contact"),
//!     Route::new(Method::GET, "/([^/]+)"),
//!     Route::new(Method::GET, "/([^/]+)/admin"),
//! ]);
//!
//! let router = Router::with_policy(&table, MatchPolicy::Combined)?;
//! let m = router.match_request("GET /widgets").unwrap();
//! assert_eq!(m.route_index, 2);
//! assert_eq!(m.param_values(), ["widgets"]);
//! # Ok(())
//! # }
//! ```

mod combined;
mod compile;
mod core;
mod error;
mod linear;
mod pattern;

pub use combined::CombinedRouter;
pub use compile::{CompiledRoute, ParamVec, MAX_INLINE_PARAMS};
pub use core::{
    MatchPolicy, RouteMatch, Router, Strategy, DEFAULT_COMBINED_THRESHOLD,
};
pub use error::RouteCompileError;
pub use linear::LinearRouter;
